//! Configuration data types.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::line::DEFAULT_MAX_LINE_LEN;
use crate::domain::ConfigError;

use super::validation;

/// Options controlling how a configuration source is scanned and decoded.
///
/// Deserializable so applications can keep these in their own config:
///
/// ```toml
/// max_line_len = 1024
/// numbers = "strict"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Maximum bytes kept from a line when `truncate_lines` is set
    pub max_line_len: usize,

    /// Truncate long lines (legacy behavior); `false` lifts the limit
    pub truncate_lines: bool,

    /// How integer values are parsed
    pub numbers: NumberMode,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            truncate_lines: true,
            numbers: NumberMode::Lenient,
        }
    }
}

impl ReaderOptions {
    /// Validate options and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self)
    }

    /// Effective line limit, `None` when unlimited.
    pub fn line_limit(&self) -> Option<usize> {
        self.truncate_lines.then_some(self.max_line_len)
    }

    /// Builder-style switch to strict integer parsing.
    pub fn strict_numbers(mut self) -> Self {
        self.numbers = NumberMode::Strict;
        self
    }

    /// Builder-style removal of the line length limit.
    pub fn unlimited_lines(mut self) -> Self {
        self.truncate_lines = false;
        self
    }
}

/// Integer parsing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    /// `atoi`-compatible: malformed text parses as zero
    #[default]
    Lenient,
    /// Malformed integers are reported as errors
    Strict,
}

/// Settings for the optional file logger.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Path to log directory
    pub log_path: PathBuf,

    /// Days to keep rotated log files
    pub retention_days: u64,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            retention_days: 2,
        }
    }
}

impl LogSettings {
    /// Settings writing logs under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            log_path: dir.to_path_buf(),
            ..Self::default()
        }
    }
}

/// Default log directory: `~/.config/linecfg/logs`.
pub fn default_log_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("linecfg")
        .join("logs")
}
