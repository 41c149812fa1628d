//! Error types for the store contract.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by store and query adapters.
///
/// Adapters fold their engine-native failures into these variants; the
/// record layer propagates them unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failure inside the backing engine (network, storage, constraint).
    #[error("store backend error: {0}")]
    Backend(String),

    /// A field set carried a value the adapter cannot represent.
    #[error("invalid field: {0}")]
    InvalidField(String),
}
