//! Configuration validation.

use crate::domain::ConfigError;

use super::{LogSettings, ReaderOptions};

/// Validate reader options.
pub fn validate(options: &ReaderOptions) -> Result<(), ConfigError> {
    if options.truncate_lines && options.max_line_len == 0 {
        return Err(ConfigError::InvalidOptions(
            "max_line_len must be greater than 0 when truncate_lines is enabled".to_string(),
        ));
    }

    Ok(())
}

/// Validate log settings.
pub fn validate_log_settings(settings: &LogSettings) -> Result<(), ConfigError> {
    if settings.log_path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidOptions(
            "log_path cannot be empty".to_string(),
        ));
    }

    // Path will be created if it doesn't exist, so just check it's valid
    if settings.log_path.to_string_lossy().contains('\0') {
        return Err(ConfigError::InvalidOptions(
            "Invalid log_path: contains null character".to_string(),
        ));
    }

    if settings.retention_days == 0 {
        return Err(ConfigError::InvalidOptions(
            "retention_days must be at least 1".to_string(),
        ));
    }

    Ok(())
}
