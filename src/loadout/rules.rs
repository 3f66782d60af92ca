//! Tunable loadout rules. Built-in defaults, optionally overridden from a YAML file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loadout::ranking::DEFAULT_BASE_BIAS;

pub const TERMINIDS: &str = "Terminids (Bugs)";
pub const AUTOMATONS: &str = "Automatons (Bots)";
pub const ILLUMINATE: &str = "Illuminate (Squids)";

pub const DEFAULT_BOOSTER_CAP: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadoutRules {
    /// Stratagems every role's candidate pool should contain when the catalog has a loose match.
    pub must_include_stratagems: Vec<String>,
    /// Lower-case fragments removed from a must-include name before loose matching.
    pub loose_match_suffixes: Vec<String>,
    /// Faction -> preferred grenade name fragments, highest priority first.
    pub grenade_hints: HashMap<String, Vec<String>>,
    /// Maximum number of role assignments sharing one booster.
    pub booster_cap: usize,
    pub base_bias: f64,
}

impl Default for LoadoutRules {
    fn default() -> Self {
        let hints = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
        let grenade_hints = HashMap::from([
            (
                TERMINIDS.to_string(),
                hints(&["Incendiary Grenade", "Incendiary Impact", "Stun Grenade"]),
            ),
            (
                AUTOMATONS.to_string(),
                hints(&["Thermite Grenade", "EMP Grenade", "Anti-Armor Grenade"]),
            ),
            (
                ILLUMINATE.to_string(),
                hints(&["EMP Grenade", "Stun Grenade", "Fragmentation Grenade"]),
            ),
        ]);

        Self {
            must_include_stratagems: hints(&[
                "Quasar Cannon",
                "Orbital Napalm Strike",
                "Emancipator Exosuit",
            ]),
            loose_match_suffixes: hints(&[" strike", " exosuit"]),
            grenade_hints,
            booster_cap: DEFAULT_BOOSTER_CAP,
            base_bias: DEFAULT_BASE_BIAS,
        }
    }
}

impl LoadoutRules {
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    /// Defaults when no path is given.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn hints_for(&self, faction: &str) -> &[String] {
        self.grenade_hints
            .get(faction)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lower-cased name with every configured suffix fragment removed, trimmed.
    pub fn loose_key(&self, name: &str) -> String {
        let mut key = name.to_lowercase();
        for suffix in &self.loose_match_suffixes {
            let suffix = suffix.to_lowercase();
            if !suffix.is_empty() {
                key = key.replace(&suffix, "");
            }
        }
        key.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_key_strips_suffixes() {
        let rules = LoadoutRules::default();
        assert_eq!(rules.loose_key("Orbital Napalm Strike"), "orbital napalm");
        assert_eq!(rules.loose_key("Emancipator Exosuit"), "emancipator");
        assert_eq!(rules.loose_key("Quasar Cannon"), "quasar cannon");
    }

    #[test]
    fn yaml_overrides_only_named_fields() {
        let rules = LoadoutRules::from_yaml_str("booster_cap: 3\nmust_include_stratagems: []\n")
            .expect("yaml should parse");
        assert_eq!(rules.booster_cap, 3);
        assert!(rules.must_include_stratagems.is_empty());
        assert_eq!(rules.base_bias, DEFAULT_BASE_BIAS);
        assert_eq!(rules.hints_for(TERMINIDS)[0], "Incendiary Grenade");
    }

    #[test]
    fn unknown_faction_has_no_hints() {
        assert!(LoadoutRules::default().hints_for("Cyborgs").is_empty());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(LoadoutRules::from_yaml_str("booster_cap: [nope").is_err());
    }
}
