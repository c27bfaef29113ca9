use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Could not read state file {path:?}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("State file {path:?} is not valid JSON: {source}")]
    Malformed { path: PathBuf, source: serde_json::Error },
    #[error("Failed to encode {section}: {source}")]
    Encode { section: &'static str, source: serde_json::Error },
    #[error("Failed to write state to {path:?}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("Failed to update {section}: {source}")]
    Update { section: &'static str, source: std::io::Error },
}
