//! Where the data documents live. Environment first, CLI flags override.

use std::env;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "HELLPOD_DATA_DIR";
pub const RULES_PATH_ENV: &str = "HELLPOD_RULES";
pub const DEFAULT_DATA_DIR: &str = "data";

pub const ITEMS_FILE: &str = "items.json";
pub const CURATED_FILE: &str = "curated.json";
pub const USAGE_FILE: &str = "usage.json";

pub const DEFAULT_FACTION: &str = "Terminids (Bugs)";
pub const DEFAULT_DIFFICULTY: &str = "Challenging";
pub const DEFAULT_OBJECTIVE: &str = "Destroy Nests";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    /// Optional YAML file overriding the built-in loadout rules.
    pub rules_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            rules_path: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let rules_path = env::var(RULES_PATH_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        Self {
            data_dir,
            rules_path,
        }
    }

    pub fn with_overrides(mut self, data_dir: Option<&Path>, rules_path: Option<&Path>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir.to_path_buf();
        }
        if let Some(path) = rules_path {
            self.rules_path = Some(path.to_path_buf());
        }
        self
    }

    pub fn items_path(&self) -> PathBuf {
        self.data_dir.join(ITEMS_FILE)
    }

    pub fn curated_path(&self) -> PathBuf {
        self.data_dir.join(CURATED_FILE)
    }

    pub fn usage_path(&self) -> PathBuf {
        self.data_dir.join(USAGE_FILE)
    }
}
