//! Error types for frametrail's own operations
//!
//! These cover loading render settings and writing reports. The contextual
//! error values that callers raise live in [`crate::core`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading settings or writing reports
#[derive(Debug, Error)]
pub enum TrailError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Invalid setting value
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Report file write errors
    #[error("Error writing report to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stderr write errors
    #[error("Error writing report to stderr: {source}")]
    StderrWrite {
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing errors without file context
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
    },
}

impl TrailError {
    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        TrailError::Io { source }
    }

    /// Create a configuration validation error
    pub fn config_error(message: impl Into<String>) -> Self {
        TrailError::Config {
            message: message.into(),
        }
    }

    /// Whether this error comes from a settings file that does not exist
    pub fn is_missing_config(&self) -> bool {
        matches!(self, TrailError::ConfigNotFound { .. })
    }
}

impl From<std::io::Error> for TrailError {
    fn from(err: std::io::Error) -> Self {
        TrailError::io_error(err)
    }
}

impl From<toml::de::Error> for TrailError {
    fn from(err: toml::de::Error) -> Self {
        TrailError::TomlParse { source: err }
    }
}

/// Result type alias for frametrail operations
pub type Result<T> = std::result::Result<T, TrailError>;
