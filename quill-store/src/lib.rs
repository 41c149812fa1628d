//! Content-entry store contract for Quill.
//!
//! Defines the types and traits that sit between the record layer and a
//! concrete storage engine:
//! - [`Entry`] / [`EntryId`] / [`EntryStatus`] — the canonical entry handle
//! - [`FieldValue`] / [`FieldMap`] — field sets passed to insert/update
//! - [`AttrFilter`] — attribute-equality filter specs for queries
//! - [`ContentStore`] / [`QueryService`] / [`TypeRegistrar`] — adapter traits
//! - [`MemoryStore`] — an embeddable in-memory reference adapter
//!
//! Engines are external: anything that can answer these traits (a SQL
//! database, a flat-file store, a remote API) can back the record layer.

mod entry;
mod error;
mod field;
mod filter;
mod memory;
mod store;

pub use entry::{Entry, EntryId, EntryStatus};
pub use error::{StoreError, StoreResult};
pub use field::{fields, FieldMap, FieldValue};
pub use filter::{AttrFilter, Compare, ValueType};
pub use memory::MemoryStore;
pub use store::{ContentStore, QueryService, TypeRegistrar};
