//! # fit-core
//!
//! Core types and error taxonomy for FitTrack.
//!
//! This crate provides the foundational types shared across all FitTrack crates:
//! - `PrimitiveValue`, the closed set of semantic types a line value can carry
//! - Record structs (profile, exercise, workout, nutrition goal) whose
//!   constructors enforce every range and enumeration invariant
//! - `ObjectDescriptor`, the transient (kind, properties) pairing of one line
//! - `DomainRecord`, the closed sum over all record kinds
//! - Derived metrics and the serializable `RecordSummary`
//! - `Clock`, the source of "today" for the workout date rule
//! - The structured error returned to collaborators (`FitError` + `ErrorKind`)

pub mod clock;
pub mod descriptor;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod record;
pub mod responses;
pub mod value;

pub use clock::Clock;
pub use descriptor::{ObjectDescriptor, Properties};
pub use errors::{ErrorKind, FitError};
pub use record::{DomainRecord, FitnessEntity};
pub use value::{PrimitiveValue, ValueTag};
