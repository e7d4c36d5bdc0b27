//! Parameter lookup over a seekable text source.
//!
//! Every call rewinds to offset 0 and scans forward; nothing is cached
//! between calls. The first line that starts with `name` and decodes
//! successfully wins.

use std::io::{BufRead, Seek};

use tracing::{debug, trace};

use crate::config::{NumberMode, ReaderOptions};
use crate::domain::error::{ConfigError, NumberError};
use crate::domain::line::LineScanner;
use crate::domain::number::parse_number;
use crate::domain::types::{Value, ValueKind};

/// Find `name` in `reader` and decode the rest of its line as `kind`.
///
/// `name` is matched as a verbatim byte prefix and must include the
/// separator, e.g. `"timeout="`. Returns `Ok(None)` when no line matches,
/// or when `name` is empty.
pub fn lookup<R: BufRead + Seek + ?Sized>(
    reader: &mut R,
    kind: ValueKind,
    name: &str,
    options: &ReaderOptions,
) -> Result<Option<Value>, ConfigError> {
    if name.is_empty() {
        debug!("Empty parameter name, nothing to look up");
        return Ok(None);
    }

    reader.rewind()?;
    let mut scanner = LineScanner::new(options.line_limit());

    while let Some(line) = scanner.next_line(reader)? {
        if line.is_empty() {
            continue;
        }

        // the name must be strictly shorter than the line
        let rest = match line.text.strip_prefix(name.as_bytes()) {
            Some(rest) if !rest.is_empty() => rest,
            _ => continue,
        };

        match decode(kind, rest, options.numbers) {
            Ok(Some(value)) => {
                debug!(name, ?kind, line = line.number, "Parameter found");
                return Ok(Some(value));
            }
            Ok(None) => {
                trace!(name, ?kind, line = line.number, "Candidate rejected, continuing scan");
            }
            Err(e) => {
                debug!(name, line = line.number, error = %e, "Invalid integer value");
                return Err(ConfigError::InvalidNumber {
                    name: name.to_string(),
                    value: String::from_utf8_lossy(rest).into_owned(),
                });
            }
        }
    }

    trace!(name, ?kind, "Parameter not found");
    Ok(None)
}

/// Decode the text after a matched name.
///
/// `Ok(None)` rejects this candidate without ending the scan.
fn decode(kind: ValueKind, raw: &[u8], numbers: NumberMode) -> Result<Option<Value>, NumberError> {
    match kind {
        ValueKind::Text => Ok(Some(Value::Text(String::from_utf8_lossy(raw).into_owned()))),
        ValueKind::Integer => parse_number(raw, numbers).map(|n| Some(Value::Integer(n))),
        ValueKind::Boolean => Ok(match raw {
            b"true" => Some(Value::Boolean(true)),
            b"false" => Some(Value::Boolean(false)),
            _ => None,
        }),
    }
}
