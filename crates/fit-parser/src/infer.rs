//! Value inference: classify a raw token and convert it.
//!
//! Patterns are tried in a fixed order and the first match wins. Dates and
//! times are checked before numbers so `2025.12.15` is never read as a
//! float. Anything unmatched is bare text.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use fit_core::errors::SyntaxError;
use fit_core::PrimitiveValue;
use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect("value pattern compiles"));
    };
}

pattern!(DATE, r"^([0-9]{4})\.([0-9]{2})\.([0-9]{2})$");
pattern!(TIME, r"^([0-9]{2}):([0-9]{2})$");
pattern!(INTEGER, r"^-?[0-9]+$");
pattern!(FLOAT, r"^-?[0-9]+\.[0-9]+$");

/// Infer the typed value of one token.
///
/// # Errors
///
/// A token shaped like a date or time that is not a real calendar date or
/// clock time, or a numeric token that does not fit its native type.
pub fn infer(raw: &str) -> Result<PrimitiveValue, SyntaxError> {
    if let Some(caps) = DATE.captures(raw) {
        let invalid = || SyntaxError::InvalidDate {
            literal: raw.to_string(),
        };
        let year: i32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let day: u32 = caps[3].parse().map_err(|_| invalid())?;
        return NaiveDate::from_ymd_opt(year, month, day)
            .map(PrimitiveValue::Date)
            .ok_or_else(invalid);
    }

    if let Some(caps) = TIME.captures(raw) {
        let invalid = || SyntaxError::InvalidTime {
            literal: raw.to_string(),
        };
        let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
        return NaiveTime::from_hms_opt(hour, minute, 0)
            .map(PrimitiveValue::Time)
            .ok_or_else(invalid);
    }

    if let Some(inner) = unquote(raw) {
        return Ok(PrimitiveValue::Text(inner.to_string()));
    }

    if INTEGER.is_match(raw) {
        return raw
            .parse()
            .map(PrimitiveValue::Integer)
            .map_err(|_| SyntaxError::InvalidNumber {
                literal: raw.to_string(),
            });
    }

    if FLOAT.is_match(raw) {
        return raw
            .parse()
            .map(PrimitiveValue::Float)
            .map_err(|_| SyntaxError::InvalidNumber {
                literal: raw.to_string(),
            });
    }

    Ok(PrimitiveValue::Text(raw.to_string()))
}

/// Strip one pair of outer quotes. No escape processing.
fn unquote(raw: &str) -> Option<&str> {
    raw.strip_prefix('"')?.strip_suffix('"')
}
