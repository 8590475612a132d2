//! Serializable response types handed to collaborators.

use schemars::JsonSchema;
use serde::Serialize;

use crate::errors::{ErrorKind, FitError};
use crate::record::{DerivedMetrics, DomainRecord};

/// A constructed record together with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RecordSummary {
    pub record: DomainRecord,
    pub metrics: DerivedMetrics,
}

impl From<DomainRecord> for RecordSummary {
    fn from(record: DomainRecord) -> Self {
        let metrics = record.metrics();
        Self { record, metrics }
    }
}

/// Wire shape of a rejected line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&FitError> for ErrorResponse {
    fn from(error: &FitError) -> Self {
        Self {
            kind: error.kind(),
            message: error.message(),
        }
    }
}
