//! Error types
//!
//! Unmappable types are not errors: the translator degrades them to `any`.
//! Only external inputs that cannot be safely defaulted fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for tsdecl-weld operations
pub type WeldResult<T> = Result<T, WeldError>;

/// Main error type for tsdecl-weld
#[derive(Debug, Error)]
pub enum WeldError {
    /// IO error
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Override document exists but is not a valid override table
    #[error("Malformed override document {path}: {source}")]
    MalformedOverride {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration value could not be parsed
    #[error("Invalid configuration value for {var}: {source}")]
    Config {
        var: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WeldError {
    /// Create an IO error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WeldError::Io {
            path: path.into(),
            source,
        }
    }
}
