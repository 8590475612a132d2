//! Error taxonomy for FitTrack.
//!
//! A rejected line surfaces as a single [`FitError`]. Collaborators match on
//! [`FitError::kind`] to tell a malformed line, a line that does not satisfy
//! its kind's property schema, and a well-formed line whose values are out of
//! range apart. Registry misconfiguration errors live in `fit-schema`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::ValueTag;

/// Coarse category of a [`FitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedSyntax,
    SchemaViolation,
    SemanticInvariantViolation,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedSyntax => "malformed_syntax",
            Self::SchemaViolation => "schema_violation",
            Self::SemanticInvariantViolation => "semantic_invariant_violation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The line itself cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("empty input")]
    EmptyInput,

    #[error("unclosed quotes")]
    UnclosedQuotes,

    /// Fewer than three tokens: an object kind needs at least one key/value pair.
    #[error("not enough tokens ({count}): expected an object kind followed by key/value pairs")]
    InsufficientTokens { count: usize },

    #[error("unpaired key/value: key '{key}' has no value")]
    UnpairedKey { key: String },

    #[error("duplicate property: '{raw}' (canonical key '{canonical}')")]
    DuplicateProperty { raw: String, canonical: String },

    #[error("invalid date literal '{literal}' (expected a real calendar date as YYYY.MM.DD)")]
    InvalidDate { literal: String },

    #[error("invalid time literal '{literal}' (expected HH:MM with hour 0-23 and minute 0-59)")]
    InvalidTime { literal: String },

    #[error("invalid number literal '{literal}'")]
    InvalidNumber { literal: String },

    #[error("unknown object kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("unexpected property '{key}' for {kind}")]
    UnexpectedProperty { kind: String, key: String },
}

/// A required property whose value was inferred with the wrong tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    pub key: String,
    pub expected: ValueTag,
    pub actual: ValueTag,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.key, self.expected, self.actual
        )
    }
}

/// Every schema problem found for one line, reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct SchemaViolation {
    pub kind: String,
    pub missing: Vec<String>,
    pub mismatches: Vec<TypeMismatch>,
}

impl SchemaViolation {
    /// True when nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.mismatches.is_empty()
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}", self.kind)?;
        let mut sep = ": ";
        if !self.missing.is_empty() {
            write!(
                f,
                "{sep}missing required properties: {}",
                self.missing.join(", ")
            )?;
            sep = "; ";
        }
        if !self.mismatches.is_empty() {
            let mismatches: Vec<String> =
                self.mismatches.iter().map(ToString::to_string).collect();
            write!(f, "{sep}type errors: {}", mismatches.join("; "))?;
        }
        Ok(())
    }
}

/// A well-formed value that falls outside its declared range or enumeration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("{field} out of range: {value} (must be between {min} and {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid {field}: '{value}' (allowed: {})", allowed.join(", "))]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("workout date {date} is in the future (today is {today})")]
    FutureDate {
        date: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },
}

/// Structured error returned by the top-level parse-and-construct operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl FitError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::MalformedSyntax,
            Self::Schema(_) => ErrorKind::SchemaViolation,
            Self::Invariant(_) => ErrorKind::SemanticInvariantViolation,
        }
    }

    /// Human-readable message for the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
