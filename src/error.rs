//! Crate error type. Data-shape problems never reach here; they degrade to empty pools.

use thiserror::Error;

/// User-facing text for any upstream load failure.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please refresh.";

#[derive(Debug, Error)]
pub enum HellpodError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to load {document}: {source}")]
    Load {
        document: String,
        #[source]
        source: Box<HellpodError>,
    },
    #[error("data not loaded yet")]
    NotReady,
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl HellpodError {
    pub fn load(document: impl Into<String>, source: HellpodError) -> Self {
        Self::Load {
            document: document.into(),
            source: Box::new(source),
        }
    }

    /// Coarse message suitable for showing to a player.
    pub fn user_message(&self) -> String {
        match self {
            Self::Load { .. } => LOAD_FAILED_MESSAGE.to_string(),
            Self::NotReady => "Data is still loading.".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HellpodError>;
