//! Configuration source handle.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ReaderOptions;
use crate::domain::{self, ConfigError, Value, ValueKind};

/// An open configuration source.
///
/// Each handle owns its own read cursor, so any number of sources may be
/// open at once. Lookups take `&mut self` and always rescan from the start.
/// Closing consumes the handle.
#[derive(Debug)]
pub struct ConfigSource<R = File> {
    reader: BufReader<R>,
    path: Option<PathBuf>,
    options: ReaderOptions,
}

impl ConfigSource<File> {
    /// Open a configuration file with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::open_with(path, ReaderOptions::default())
    }

    /// Open a configuration file with the given options.
    pub fn open_with(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        options.validate()?;

        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Opened config source");

        Ok(Self {
            reader: BufReader::new(file),
            path: Some(path.to_path_buf()),
            options,
        })
    }
}

impl<R: Read + Seek> ConfigSource<R> {
    /// Wrap an already open reader, such as an in-memory buffer.
    pub fn from_reader(reader: R, options: ReaderOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            reader: BufReader::new(reader),
            path: None,
            options,
        })
    }

    /// Look up `name` (including its `=`) and decode the value as `kind`.
    ///
    /// `Ok(None)` means the parameter is absent, which callers are expected
    /// to handle with their own default.
    pub fn lookup(&mut self, kind: ValueKind, name: &str) -> Result<Option<Value>, ConfigError> {
        domain::lookup(&mut self.reader, kind, name, &self.options)
    }

    /// Look up a text value.
    pub fn get_text(&mut self, name: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.lookup(ValueKind::Text, name)?.and_then(Value::into_text))
    }

    /// Look up an integer value, expanding `k`/`K`/`M` suffixes.
    pub fn get_integer(&mut self, name: &str) -> Result<Option<i64>, ConfigError> {
        Ok(self.lookup(ValueKind::Integer, name)?.and_then(|v| v.as_integer()))
    }

    /// Look up a boolean value (`true` or `false`).
    pub fn get_bool(&mut self, name: &str) -> Result<Option<bool>, ConfigError> {
        Ok(self.lookup(ValueKind::Boolean, name)?.and_then(|v| v.as_bool()))
    }

    /// Path this source was opened from, if it came from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Release the underlying reader.
    pub fn close(self) {
        drop(self.into_inner());
    }

    /// Release the handle and return the underlying reader.
    pub fn into_inner(self) -> R {
        if let Some(path) = &self.path {
            debug!(path = %path.display(), "Closed config source");
        }
        self.reader.into_inner()
    }
}
