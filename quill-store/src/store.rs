//! Adapter traits implemented by concrete storage engines.
//!
//! The record layer only ever talks to these three traits. Every call is
//! blocking and independent — no transaction spans more than one call, so
//! an engine failure between calls leaves partial state (the record layer
//! documents this as an accepted non-atomic window).

use crate::{AttrFilter, Entry, EntryId, EntryStatus, FieldMap, StoreResult};

/// Single-entry CRUD plus per-attribute access.
pub trait ContentStore {
    /// Existence/status probe. `None` means the id does not resolve.
    fn entry_status(&self, id: EntryId) -> StoreResult<Option<EntryStatus>>;

    /// Fetches the canonical entry for an id.
    fn entry(&self, id: EntryId) -> StoreResult<Option<Entry>>;

    /// Inserts a new entry from a field set and returns the assigned id.
    fn insert_entry(&self, fields: &FieldMap) -> StoreResult<EntryId>;

    /// Updates an existing entry; `fields` carries the id under `fields::ID`.
    fn update_entry(&self, fields: &FieldMap) -> StoreResult<EntryId>;

    /// Reads one attribute value. Unset attributes read as the empty string.
    fn attribute(&self, id: EntryId, key: &str) -> StoreResult<String>;

    /// Writes one attribute value. Returns false when the write was a no-op
    /// (value already current).
    fn set_attribute(&self, id: EntryId, key: &str, value: &str) -> StoreResult<bool>;
}

/// Executes attribute filter sets and returns matching entry ids.
pub trait QueryService {
    /// Runs the filters (implicit AND) and returns matching ids in the
    /// engine's result order. The record layer preserves this order.
    fn query(&self, filters: &[AttrFilter]) -> StoreResult<Vec<EntryId>>;
}

/// Registers a named entry kind with the backing engine.
pub trait TypeRegistrar {
    /// Registers `name` as an entry kind. `options` is engine-defined;
    /// the record layer pre-merges its own defaults into it.
    fn register_type(&self, name: &str, options: &FieldMap) -> StoreResult<()>;
}
