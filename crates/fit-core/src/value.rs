//! Primitive values inferred from line tokens.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Semantic type of a [`PrimitiveValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValueTag {
    Date,
    Time,
    Text,
    Integer,
    Float,
}

impl ValueTag {
    pub const ALL: [Self; 5] = [
        Self::Date,
        Self::Time,
        Self::Text,
        Self::Integer,
        Self::Float,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed value. Exactly one tag holds at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PrimitiveValue {
    Date(NaiveDate),
    Time(NaiveTime),
    Text(String),
    Integer(i64),
    Float(f64),
}

impl PrimitiveValue {
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Date(_) => ValueTag::Date,
            Self::Time(_) => ValueTag::Time,
            Self::Text(_) => ValueTag::Text,
            Self::Integer(_) => ValueTag::Integer,
            Self::Float(_) => ValueTag::Float,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y.%m.%d")),
            Self::Time(t) => write!(f, "{}", t.format("%H:%M")),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_matches_variant() {
        assert_eq!(PrimitiveValue::Integer(3).tag(), ValueTag::Integer);
        assert_eq!(PrimitiveValue::Float(3.5).tag(), ValueTag::Float);
        assert_eq!(PrimitiveValue::Text("x".into()).tag(), ValueTag::Text);
    }

    #[test]
    fn accessors_reject_other_tags() {
        let value = PrimitiveValue::Integer(25);
        assert_eq!(value.as_integer(), Some(25));
        assert_eq!(value.as_float(), None);
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn display_uses_line_syntax() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        let time = NaiveTime::from_hms_opt(1, 30, 0).unwrap();
        assert_eq!(PrimitiveValue::Date(date).to_string(), "2025.12.15");
        assert_eq!(PrimitiveValue::Time(time).to_string(), "01:30");
        assert_eq!(PrimitiveValue::Float(75.0).to_string(), "75.0");
        assert_eq!(PrimitiveValue::Text("Squat".into()).to_string(), "\"Squat\"");
    }
}
