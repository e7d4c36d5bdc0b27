//! Service layer exposing configuration source handles.

mod source;

pub use source::ConfigSource;
