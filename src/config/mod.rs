//! Configuration management module.
//!
//! Reader options and logger settings, with validation.

mod types;
mod validation;

pub use types::{default_log_path, LogSettings, NumberMode, ReaderOptions};
pub use validation::{validate, validate_log_settings};
