//! Centralized error handling for SNGMaker
//!
//! One error type covers the two places the application touches the disk:
//! writing song files and persisting the configuration. Clipboard failures
//! have their own type in `export::clipboard`.

use log::warn;
use std::fmt;
use std::io;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Custom Result Type Alias
// ─────────────────────────────────────────────────────────────────────────────

/// A specialized `Result` type for the application.
pub type Result<T> = std::result::Result<T, Error>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The centralized error type for the application.
#[derive(Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // Song Files
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to write a `.sng` file
    FileWrite { path: PathBuf, source: io::Error },

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to read the configuration file
    ConfigLoad { path: PathBuf, source: BoxedSource },

    /// Failed to write the configuration file
    ConfigSave { path: PathBuf, source: BoxedSource },

    /// Configuration file is not valid JSON for `Settings`
    ConfigParse {
        message: String,
        source: Option<BoxedSource>,
    },

    /// Platform config directory could not be determined
    ConfigDirNotFound,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileWrite { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
            Error::ConfigLoad { path, source } => write!(
                f,
                "Failed to load configuration from '{}': {}",
                path.display(),
                source
            ),
            Error::ConfigSave { path, source } => write!(
                f,
                "Failed to save configuration to '{}': {}",
                path.display(),
                source
            ),
            Error::ConfigParse { message, .. } => {
                write!(f, "Invalid configuration format: {}", message)
            }
            Error::ConfigDirNotFound => write!(f, "Configuration directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileWrite { source, .. } => Some(source),
            Error::ConfigLoad { source, .. } | Error::ConfigSave { source, .. } => {
                Some(source.as_ref())
            }
            Error::ConfigParse { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            Error::ConfigDirNotFound => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graceful Degradation Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for Result to support graceful degradation.
pub trait ResultExt<T> {
    /// If the result is an error, log it at warning level and return the provided default.
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: {}. Using default.", context, err);
                default
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
