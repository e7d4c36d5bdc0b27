//! linecfg: minimal `name=value` configuration file reader
//!
//! Opens a plain text file of `name=value` lines and looks up parameters by
//! their exact name prefix, decoding values as text, integers (with `k`/`M`
//! suffixes) or booleans. Every lookup rescans the file from the start.
//!
//! ```no_run
//! use linecfg::{ConfigSource, ValueKind};
//!
//! # fn main() -> Result<(), linecfg::ConfigError> {
//! let mut cfg = ConfigSource::open("/etc/app.conf")?;
//! let port = cfg.get_integer("port=")?.unwrap_or(80);
//! let host = cfg.lookup(ValueKind::Text, "host=")?;
//! cfg.close();
//! # let _ = (port, host);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod service;

pub use config::{LogSettings, NumberMode, ReaderOptions};
pub use domain::logger;
pub use domain::{lookup, parse_number, ConfigError, NumberError, Value, ValueKind};
pub use service::ConfigSource;
