//! # fit-parser
//!
//! Turns one free-form line into a validated FitTrack record.
//!
//! ```text
//! line -> tokenize -> assemble (translate keys, infer values)
//!      -> schema validation -> construct record
//! ```
//!
//! Data flows strictly forward and the only shared state is the read-only
//! alias and schema tables, so any number of lines can be parsed
//! concurrently.
//!
//! # Usage
//!
//! ```
//! use fit_core::{DomainRecord, ErrorKind};
//!
//! let record = fit_parser::create_from_text(
//!     r#"Exercise name "Приседания" sets 4 reps_per_set 10 weight 60.0"#,
//! )
//! .unwrap();
//! assert!(matches!(record, DomainRecord::Exercise(_)));
//!
//! let err = fit_parser::create_from_text("UserProfile gender").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedSyntax);
//! ```

pub mod assemble;
pub mod construct;
pub mod infer;
pub mod keys;
pub mod tokenizer;

use chrono::NaiveDate;
use fit_core::{Clock, DomainRecord, FitError, ObjectDescriptor};
use fit_schema::SchemaRegistry;

pub use keys::{AliasTable, translate};
pub use tokenizer::tokenize;

/// Number of input characters echoed into log events.
const LOG_PREVIEW_CHARS: usize = 50;

fn preview(line: &str) -> String {
    line.chars().take(LOG_PREVIEW_CHARS).collect()
}

/// Tokenize, assemble and schema-check a line without building a record.
///
/// # Errors
///
/// Any syntax error, or a [`fit_core::errors::SchemaViolation`] naming every
/// missing or mistyped property.
pub fn parse_descriptor(line: &str) -> Result<ObjectDescriptor, FitError> {
    let tokens = tokenize(line)?;
    tracing::debug!(tokens = tokens.len(), "tokenized line");

    let descriptor = assemble::assemble(&tokens, AliasTable::standard())?;
    tracing::debug!(
        kind = %descriptor.kind,
        keys = ?descriptor.properties.keys().collect::<Vec<_>>(),
        "assembled descriptor"
    );

    SchemaRegistry::builtin().validate(&descriptor.kind, &descriptor.properties)?;
    Ok(descriptor)
}

/// Parse a line and build its record, judging dates against `today`.
///
/// # Errors
///
/// A [`FitError`] whose [`FitError::kind`] tells a malformed line, a schema
/// violation and an out-of-range value apart.
pub fn create_from_text_at(line: &str, today: NaiveDate) -> Result<DomainRecord, FitError> {
    let result = parse_descriptor(line)
        .and_then(|descriptor| construct::construct(descriptor, today));

    match &result {
        Ok(record) => tracing::debug!(kind = %fit_core::FitnessEntity::kind(record), "record created"),
        Err(error) => tracing::debug!(
            kind = %error.kind(),
            %error,
            input = %preview(line),
            "line rejected"
        ),
    }
    result
}

/// Parse a line and build its record, judging dates against `clock`.
///
/// # Errors
///
/// See [`create_from_text_at`].
pub fn create_from_text_with(line: &str, clock: Clock) -> Result<DomainRecord, FitError> {
    create_from_text_at(line, clock.today())
}

/// Parse a line and build its record, judging dates against the local date.
///
/// # Errors
///
/// See [`create_from_text_at`].
pub fn create_from_text(line: &str) -> Result<DomainRecord, FitError> {
    create_from_text_with(line, Clock::Local)
}
