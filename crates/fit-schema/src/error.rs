//! Schema error types.

use thiserror::Error;

/// Errors from the JSON Schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no JSON Schema named '{0}'")]
    NotFound(String),

    /// Every validation error of one document, with its JSON pointer.
    #[error("document does not match '{name}': {}", errors.join("; "))]
    ValidationFailed { name: String, errors: Vec<String> },

    #[error("schema '{name}' does not compile: {reason}")]
    Generation { name: String, reason: String },

    #[error("value does not serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A static table is internally inconsistent. A configuration bug, not a
/// user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("kind '{0}' is declared more than once")]
    DuplicateKind(String),

    #[error("property '{key}' is declared more than once for kind '{kind}'")]
    DuplicateKey { kind: String, key: String },

    #[error("alias '{alias}' maps to both '{first}' and '{second}'")]
    AmbiguousAlias {
        alias: String,
        first: String,
        second: String,
    },
}
