//! Error types for the buoy i18n tool.
//!
//! The i18n core itself is total; these errors cover the CLI surface
//! (configuration, arguments, output) and registry integrity reports.

use std::io;
use thiserror::Error;

use crate::i18n::IntegrityError;

/// Crate error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (unreadable or invalid config file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A dictionary or the registry violates the key-set contract.
    #[error("Translation data defect: {0}")]
    Integrity(#[from] IntegrityError),

    /// General/unspecified error.
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the process exit code for this error.
    ///
    /// - 1: General error
    /// - 2: Invalid arguments or configuration
    /// - 3: Translation data defect
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::InvalidArgument(_) => 2,
            Error::Integrity(_) => 3,
            Error::Io(_) | Error::Json(_) | Error::Yaml(_) | Error::Other(_) => 1,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a general error.
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

impl From<crate::i18n::ParseKeyError> for Error {
    fn from(err: crate::i18n::ParseKeyError) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}
