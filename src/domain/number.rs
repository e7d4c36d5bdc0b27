//! Integer parsing with binary magnitude suffixes.
//!
//! `k`/`K` multiply by 1024 and `M` by 1024 * 1024. The first suffix
//! character found ends the number; anything after it is ignored.

use tracing::trace;

use crate::config::NumberMode;
use crate::domain::error::NumberError;

const KIBI: i64 = 1024;
const MEBI: i64 = 1024 * 1024;

/// Parse an integer value according to `mode`.
///
/// In [`NumberMode::Lenient`] this never fails: text that is not a number
/// parses as zero, the same as C `atoi`.
pub fn parse_number(text: impl AsRef<[u8]>, mode: NumberMode) -> Result<i64, NumberError> {
    let text = text.as_ref();
    let (digits, multiplier, suffix_at) = split_suffix(text);

    match mode {
        NumberMode::Lenient => {
            let (value, digits_read) = parse_prefix(digits);
            if digits_read == 0 {
                trace!(
                    value = %String::from_utf8_lossy(text),
                    "No digits in integer value, reading as 0"
                );
            }
            Ok(value.saturating_mul(multiplier))
        }
        NumberMode::Strict => {
            let malformed = || NumberError::Malformed(String::from_utf8_lossy(text).into_owned());
            if let Some(pos) = suffix_at {
                if pos + 1 != text.len() {
                    return Err(malformed());
                }
            }
            if !is_plain_integer(digits) {
                return Err(malformed());
            }
            let overflow = || NumberError::Overflow(String::from_utf8_lossy(text).into_owned());
            // only sign and digits remain, so a failed parse means out of range
            let value: i64 = std::str::from_utf8(digits)
                .map_err(|_| malformed())?
                .parse()
                .map_err(|_| overflow())?;
            value.checked_mul(multiplier).ok_or_else(overflow)
        }
    }
}

/// Split at the first suffix character, returning the text before it,
/// the multiplier and the suffix position.
fn split_suffix(text: &[u8]) -> (&[u8], i64, Option<usize>) {
    for (i, &b) in text.iter().enumerate() {
        match b {
            b'k' | b'K' => return (&text[..i], KIBI, Some(i)),
            b'M' => return (&text[..i], MEBI, Some(i)),
            _ => {}
        }
    }
    (text, 1, None)
}

/// `atoi`-style prefix parse. Saturates instead of overflowing.
///
/// Returns the value and how many digits were read.
fn parse_prefix(text: &[u8]) -> (i64, usize) {
    let mut bytes = text
        .iter()
        .copied()
        .skip_while(|b| matches!(*b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
        .peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut digits_read = 0;
    for b in bytes.take_while(u8::is_ascii_digit) {
        digits_read += 1;
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    (value, digits_read)
}

/// Optional sign then one or more digits, nothing else.
fn is_plain_integer(text: &[u8]) -> bool {
    let unsigned = match text.first() {
        Some(b'-') | Some(b'+') => &text[1..],
        _ => text,
    };
    !unsigned.is_empty() && unsigned.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(text: &str) -> i64 {
        parse_number(text, NumberMode::Lenient).unwrap()
    }

    #[test]
    fn test_plain_decimal() {
        assert_eq!(lenient("10"), 10);
        assert_eq!(lenient("8080"), 8080);
        assert_eq!(lenient("-42"), -42);
        assert_eq!(lenient("+7"), 7);
        assert_eq!(lenient("  15"), 15);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(lenient("4k"), 4096);
        assert_eq!(lenient("4K"), 4096);
        assert_eq!(lenient("3k"), 3072);
        assert_eq!(lenient("2M"), 2_097_152);
        assert_eq!(lenient("-1k"), -1024);
        // lowercase m is not a suffix
        assert_eq!(lenient("2m"), 2);
    }

    #[test]
    fn test_first_suffix_wins_and_rest_ignored() {
        assert_eq!(lenient("1k2M"), 1024);
        assert_eq!(lenient("2Mk"), 2 * MEBI);
        assert_eq!(lenient("5kbytes"), 5120);
    }

    // Legacy laxity: garbage is zero, trailing junk is dropped.
    #[test]
    fn test_lenient_garbage_is_zero() {
        assert_eq!(lenient(""), 0);
        assert_eq!(lenient("abc"), 0);
        assert_eq!(lenient("k"), 0);
        assert_eq!(lenient("12abc"), 12);
        assert_eq!(lenient("1.5k"), 1024);
        // 'K' inside a word is still taken as a suffix
        assert_eq!(lenient("OK"), 0);
    }

    #[test]
    fn test_prefix_reports_digits_read() {
        assert_eq!(parse_prefix(b"42abc"), (42, 2));
        assert_eq!(parse_prefix(b"  -7"), (-7, 1));
        assert_eq!(parse_prefix(b"abc"), (0, 0));
        assert_eq!(parse_prefix(b"-"), (0, 0));
        assert_eq!(parse_prefix(b"0"), (0, 1));
    }

    #[test]
    fn test_lenient_saturates() {
        assert_eq!(lenient("99999999999999999999"), i64::MAX);
        assert_eq!(lenient("-99999999999999999999"), i64::MIN);
        assert_eq!(lenient("9223372036854775807M"), i64::MAX);
    }

    #[test]
    fn test_strict_accepts_well_formed() {
        assert_eq!(parse_number("10", NumberMode::Strict), Ok(10));
        assert_eq!(parse_number("4k", NumberMode::Strict), Ok(4096));
        assert_eq!(parse_number("-2M", NumberMode::Strict), Ok(-2 * MEBI));
    }

    #[test]
    fn test_strict_rejects_malformed() {
        for text in ["", "abc", "k", "12abc", "1.5k", "5kbytes", " 1", "+", "1k2"] {
            assert!(
                matches!(
                    parse_number(text, NumberMode::Strict),
                    Err(NumberError::Malformed(_))
                ),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_strict_overflow() {
        assert!(matches!(
            parse_number("9223372036854775807k", NumberMode::Strict),
            Err(NumberError::Overflow(_))
        ));
        assert!(matches!(
            parse_number("99999999999999999999", NumberMode::Strict),
            Err(NumberError::Overflow(_))
        ));
    }
}
