use crate::project::LocationConflict;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildshipError {
    #[error(transparent)]
    UnsupportedConfiguration(#[from] LocationConflict),
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("Operation cancelled")]
    Cancelled,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuildshipError {
    /// The conflict behind an unsupported configuration, if that is what this is.
    pub fn location_conflict(&self) -> Option<&LocationConflict> {
        match self {
            BuildshipError::UnsupportedConfiguration(conflict) => Some(conflict),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildshipError>;
