//! Domain layer containing the core scanning and decoding logic.
//!
//! This module contains:
//! - Decoded value types
//! - Line scanner with comment stripping and truncation
//! - Integer parser with `k`/`M` suffixes
//! - Parameter lookup
//! - Logger with rotation

mod error;
pub mod line;
pub mod logger;
pub mod lookup;
pub mod number;
mod types;

pub use error::{ConfigError, NumberError};
pub use line::{Line, LineScanner, DEFAULT_MAX_LINE_LEN};
pub use lookup::lookup;
pub use number::parse_number;
pub use types::{Value, ValueKind};
