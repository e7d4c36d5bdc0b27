//! Optional file logging with daily rotation.
//!
//! The library only emits `tracing` events; applications that have no
//! subscriber of their own can call [`init`] to write them to a log
//! directory.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::{self, LogSettings};

/// File name prefix of every log file written by [`init`].
pub const LOG_FILE_PREFIX: &str = "linecfg";

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Initialize the logging system.
///
/// Fails if a global subscriber is already installed.
pub fn init(settings: &LogSettings) -> Result<()> {
    config::validate_log_settings(settings)?;

    if !settings.log_path.exists() {
        fs::create_dir_all(&settings.log_path)?;
    }

    cleanup_old_logs(&settings.log_path, settings.retention_days)?;

    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, &settings.log_path, LOG_FILE_PREFIX);

    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linecfg=debug"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::debug!(path = %settings.log_path.display(), "File logging initialized");
    Ok(())
}

/// Remove log files older than `retention_days`. Returns how many were removed.
pub fn cleanup_old_logs(log_path: &Path, retention_days: u64) -> Result<usize> {
    if !log_path.exists() {
        return Ok(0);
    }

    let retention = Duration::from_secs(retention_days.saturating_mul(SECS_PER_DAY));
    let cutoff = SystemTime::now()
        .checked_sub(retention)
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let mut removed = 0;

    for entry in fs::read_dir(log_path)? {
        let path = entry?.path();
        if !path.is_file() || !is_log_file(&path) {
            continue;
        }

        let modified = match fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(_) => continue,
        };
        if modified < cutoff && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }

    Ok(removed)
}

fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn age_file(path: &Path, days: u64) {
        let file = File::options().write(true).open(path).unwrap();
        let then = SystemTime::now() - Duration::from_secs(days * SECS_PER_DAY);
        file.set_modified(then).unwrap();
    }

    #[test]
    fn test_cleanup_removes_only_old_log_files() {
        let dir = tempfile::tempdir().unwrap();
        let old_log = dir.path().join("linecfg.2020-01-01");
        let new_log = dir.path().join("linecfg.2099-01-01");
        let other = dir.path().join("unrelated.log");
        for p in [&old_log, &new_log, &other] {
            fs::write(p, "x").unwrap();
        }
        age_file(&old_log, 5);
        age_file(&other, 5);

        let removed = cleanup_old_logs(dir.path(), 2).unwrap();

        assert_eq!(removed, 1);
        assert!(!old_log.exists());
        assert!(new_log.exists());
        assert!(other.exists());
    }

    #[test]
    fn test_cleanup_huge_retention_keeps_everything() {
        let dir = tempfile::tempdir().unwrap();
        let old_log = dir.path().join("linecfg.2020-01-01");
        fs::write(&old_log, "x").unwrap();
        age_file(&old_log, 5);

        assert_eq!(cleanup_old_logs(dir.path(), u64::MAX / 1000).unwrap(), 0);
        assert_eq!(cleanup_old_logs(dir.path(), u64::MAX).unwrap(), 0);
        assert!(old_log.exists());
    }

    #[test]
    fn test_cleanup_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(cleanup_old_logs(&missing, 2).unwrap(), 0);
    }

    #[test]
    fn test_init_rejects_invalid_settings() {
        let settings = LogSettings {
            retention_days: 0,
            ..LogSettings::default()
        };
        assert!(init(&settings).is_err());
    }
}
