use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the output management library
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid output type: {0}")]
    InvalidOutputType(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to export file list to {path:?}: {source}")]
    Export { path: PathBuf, source: io::Error },
}

/// Result type alias for the output management library
pub type Result<T> = std::result::Result<T, OutputError>;

impl OutputError {
    /// Create an invalid output type error
    pub fn invalid_output_type<S: Into<String>>(name: S) -> Self {
        OutputError::InvalidOutputType(name.into())
    }

    /// Create an export error from a destination path and its IO cause
    pub fn export(path: PathBuf, source: io::Error) -> Self {
        OutputError::Export { path, source }
    }
}
