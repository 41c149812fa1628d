//! Error types for the record layer.

use quill_store::{EntryId, StoreError};
use thiserror::Error;

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur constructing, querying, or saving records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The id does not resolve to an entry in the backing store.
    #[error("{context}: {id}")]
    NotFound {
        id: EntryId,
        /// Which path produced the failure ("entry does not exist" from
        /// construction, "entry not found" from `find_or_fail`).
        context: &'static str,
    },

    /// A declared attribute name collides with a reserved field name.
    #[error("attribute name is reserved: {0}")]
    ReservedName(String),

    /// The generic accessor was asked to write a field that is neither a
    /// first-class field nor a declared attribute.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The operation needs an identity but the record was never saved.
    #[error("record has no id (never saved)")]
    Unsaved,

    /// Failure surfaced unchanged from a store or query adapter.
    #[error(transparent)]
    Store(#[from] StoreError),
}
