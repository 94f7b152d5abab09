//! Human byte-size parsing for `--bytes-limit`.
//!
//! Accepts a decimal integer with an optional `K`/`KB` (x1000) or `M`/`MB`
//! (x1000000) suffix: `1000`, `1KB`, `1K` are all the same limit.

use junkify_core::ByteLimit;
use thiserror::Error;

const SUFFIXES: [(&str, u64); 4] = [
    ("KB", 1_000),
    ("K", 1_000),
    ("MB", 1_000_000),
    ("M", 1_000_000),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLimitError {
    #[error("parsing bytes limit value: {0:?}")]
    Invalid(String),

    #[error("positive file size limit required, got {0}")]
    NotPositive(i64),

    #[error("bytes limit {0:?} is too large")]
    TooLarge(String),
}

/// Parse a limit such as `2MB`, `500K` or `16536`.
pub fn parse_byte_limit(text: &str) -> Result<ByteLimit, ParseLimitError> {
    let text = text.trim();
    let (digits, multiplier) = SUFFIXES
        .iter()
        .find_map(|&(suffix, multiplier)| text.strip_suffix(suffix).map(|d| (d, multiplier)))
        .unwrap_or((text, 1));

    let value: i64 = digits
        .parse()
        .map_err(|_| ParseLimitError::Invalid(text.to_string()))?;
    if value <= 0 {
        return Err(ParseLimitError::NotPositive(value));
    }

    let bytes = value
        .unsigned_abs()
        .checked_mul(multiplier)
        .and_then(|bytes| usize::try_from(bytes).ok())
        .ok_or_else(|| ParseLimitError::TooLarge(text.to_string()))?;

    ByteLimit::new(bytes).map_err(|_| ParseLimitError::NotPositive(value))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every suffix scales the number by its multiplier.
        #[test]
        fn prop_suffix_scales_value(
            value in 1u32..=1_000_000,
            (suffix, multiplier) in prop_oneof![
                Just(("", 1u64)),
                Just(("K", 1_000)),
                Just(("KB", 1_000)),
                Just(("M", 1_000_000)),
                Just(("MB", 1_000_000)),
            ],
        ) {
            let limit = parse_byte_limit(&format!("{value}{suffix}")).unwrap();
            prop_assert_eq!(limit.get() as u64, u64::from(value) * multiplier);
        }

        /// Non-positive numbers never parse, whatever the suffix.
        #[test]
        fn prop_non_positive_rejected(
            value in -1_000_000i64..=0,
            suffix in prop_oneof![Just(""), Just("K"), Just("MB")],
        ) {
            let result = parse_byte_limit(&format!("{value}{suffix}"));
            prop_assert_eq!(result, Err(ParseLimitError::NotPositive(value)));
        }
    }
}
