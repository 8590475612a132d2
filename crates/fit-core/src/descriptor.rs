//! The intermediate (kind, properties) pairing of one line.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::PrimitiveValue;

/// Canonical key -> inferred value. Keys are unique.
pub type Properties = BTreeMap<String, PrimitiveValue>;

/// A line after tokenizing, key translation and value inference, before any
/// schema or semantic checks. Lives only for one parse call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDescriptor {
    /// First token of the line, verbatim.
    pub kind: String,
    pub properties: Properties,
}

impl ObjectDescriptor {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: Properties::new(),
        }
    }
}
