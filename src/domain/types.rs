//! Decoded value types.

use std::fmt;

/// How the text after a parameter name is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Remainder of the line, verbatim
    Text,
    /// Decimal integer with optional `k`/`K`/`M` suffix
    Integer,
    /// Exactly `true` or `false`
    Boolean,
}

impl ValueKind {
    /// Map a legacy numeric type tag (1 = text, 2 = integer, 3 = boolean).
    ///
    /// Any other tag is unsupported and yields `None`.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(ValueKind::Text),
            2 => Some(ValueKind::Integer),
            3 => Some(ValueKind::Boolean),
            _ => None,
        }
    }

    /// Legacy numeric tag for this kind.
    pub fn tag(self) -> u8 {
        match self {
            ValueKind::Text => 1,
            ValueKind::Integer => 2,
            ValueKind::Boolean => 3,
        }
    }
}

/// A decoded parameter value. Owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Integer(_) => ValueKind::Integer,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Consume the value, returning the text if it is one.
    pub fn into_text(self) -> Option<String> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_tags() {
        assert_eq!(ValueKind::from_tag(1), Some(ValueKind::Text));
        assert_eq!(ValueKind::from_tag(2), Some(ValueKind::Integer));
        assert_eq!(ValueKind::from_tag(3), Some(ValueKind::Boolean));
        assert_eq!(ValueKind::from_tag(0), None);
        assert_eq!(ValueKind::from_tag(4), None);
        for kind in [ValueKind::Text, ValueKind::Integer, ValueKind::Boolean] {
            assert_eq!(ValueKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_accessors_match_kind() {
        let text = Value::Text("/dev/tty0".to_string());
        assert_eq!(text.kind(), ValueKind::Text);
        assert_eq!(text.as_text(), Some("/dev/tty0"));
        assert_eq!(text.as_integer(), None);

        let num = Value::Integer(4096);
        assert_eq!(num.as_integer(), Some(4096));
        assert_eq!(num.as_bool(), None);

        let flag = Value::Boolean(false);
        assert_eq!(flag.as_bool(), Some(false));
        assert_eq!(flag.clone().into_text(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Text("a b".into()).to_string(), "a b");
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Boolean(true).to_string(), "true");
    }
}
