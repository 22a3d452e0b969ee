// File: src/error.rs
// Purpose: Errors raised while loading schemas and driving form sessions

use std::path::PathBuf;
use thiserror::Error;

/// A schema that cannot be used at all.
///
/// Softer problems (no submit button, empty option lists, unknown field
/// types) are logged during [`FormSchema::check`](crate::FormSchema::check)
/// instead, since the form still renders.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate field id `{id}` (fields #{first} and #{second})")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

/// Misuse of a [`FormSession`](crate::FormSession) by its host
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no field with id `{0}` in this form")]
    UnknownField(String),

    #[error("field `{0}` does not hold a value")]
    NoValue(String),

    #[error("form has no submit button")]
    NoSubmitAction,
}
