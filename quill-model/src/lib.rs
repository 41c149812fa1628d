//! Active-record layer over a content-entry store.
//!
//! A [`Record<K>`] is a typed, mutable object that loads from and saves
//! back to any store implementing the `quill-store` adapter traits:
//! - [`Kind`] — per-type configuration: kind name, declared attributes,
//!   lifecycle hook slots, computed accessors
//! - [`Record`] — lifecycle/hydration, dirty tracking, the insert-vs-update
//!   save protocol, finders, and the `has_many` relation helper
//! - [`RecordError`] — not-found, reserved-name, unknown-field, and
//!   pass-through store failures
//!
//! The layer is synchronous and transaction-free: a save writes the entry
//! first and each attribute afterwards, and a failure in between leaves the
//! record dirty so the caller can retry.

mod error;
mod finder;
mod hook;
mod kind;
mod record;
mod relation;

pub use error::{RecordError, RecordResult};
pub use kind::Kind;
pub use record::{Record, RESERVED_FIELDS, SELF_ID_ATTR};
