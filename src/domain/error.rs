//! Error types for linecfg.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for linecfg.
///
/// A missing parameter is never an error; lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened
    #[error("Failed to open config file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error while seeking or reading an open source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Integer value rejected by the strict number parser
    #[error("Invalid integer value for '{name}': {value:?}")]
    InvalidNumber { name: String, value: String },

    /// Reader options failed validation
    #[error("Invalid reader options: {0}")]
    InvalidOptions(String),
}

impl ConfigError {
    /// True when the file to open does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Open { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Error from the strict integer parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// Text is not an optionally signed run of decimal digits
    #[error("not a decimal integer: {0:?}")]
    Malformed(String),

    /// Value does not fit in 64 bits after suffix expansion
    #[error("integer out of range: {0:?}")]
    Overflow(String),
}
