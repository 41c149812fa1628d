//! Finders: id lookup, attribute queries, bulk lookup, kind registration.

use quill_store::{AttrFilter, ContentStore, EntryId, FieldMap, FieldValue, QueryService, TypeRegistrar};
use tracing::debug;

use crate::{Kind, Record, RecordError, RecordResult};

impl<K: Kind> Record<K> {
    /// Static existence probe against the store.
    pub fn exists(store: &impl ContentStore, id: EntryId) -> RecordResult<bool> {
        Ok(store.entry_status(id)?.is_some())
    }

    /// Constructs a record from an id. Fails with
    /// [`NotFound`](RecordError::NotFound) when the id does not resolve —
    /// construction performs the existence check itself.
    pub fn find(store: &impl ContentStore, id: EntryId) -> RecordResult<Self> {
        Self::from_id(store, id)
    }

    /// Like [`find`](Record::find), with a dedicated up-front existence
    /// check and its own error message. Kept for API parity; the
    /// observable failure mode is the same.
    pub fn find_or_fail(store: &impl ContentStore, id: EntryId) -> RecordResult<Self> {
        if !Self::exists(store, id)? {
            return Err(RecordError::NotFound {
                id,
                context: "entry not found",
            });
        }
        Self::from_id(store, id)
    }

    /// Runs an attribute filter set and hydrates every matching entry,
    /// preserving the query service's result order.
    pub fn where_attrs(
        store: &impl ContentStore,
        queries: &impl QueryService,
        filters: impl IntoIterator<Item = AttrFilter>,
    ) -> RecordResult<Vec<Self>> {
        let filters: Vec<AttrFilter> = filters.into_iter().collect();
        let ids = queries.query(&filters)?;
        debug!(kind = K::NAME, filters = filters.len(), matched = ids.len(), "where query");
        ids.into_iter().map(|id| Self::find(store, id)).collect()
    }

    /// Single-pair equality convenience over [`where_attrs`](Record::where_attrs).
    pub fn where_eq(
        store: &impl ContentStore,
        queries: &impl QueryService,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> RecordResult<Vec<Self>> {
        Self::where_attrs(store, queries, [AttrFilter::eq(key, value)])
    }

    /// Hydrates every id that exists, silently skipping the rest.
    pub fn find_in(
        store: &impl ContentStore,
        ids: impl IntoIterator<Item = EntryId>,
    ) -> RecordResult<Vec<Self>> {
        let mut records = Vec::new();
        for id in ids {
            if Self::exists(store, id)? {
                records.push(Self::find(store, id)?);
            }
        }
        Ok(records)
    }

    /// Registers this kind with the backing engine, merging caller options
    /// over the defaults `{public: true, label: title-cased name}`.
    pub fn register(registrar: &impl TypeRegistrar, options: FieldMap) -> RecordResult<()> {
        let mut merged = FieldMap::new();
        merged.insert("public".to_string(), FieldValue::Bool(true));
        merged.insert("label".to_string(), FieldValue::Text(title_case(K::NAME)));
        merged.extend(options);
        registrar.register_type(K::NAME, &merged)?;
        Ok(())
    }
}

/// Uppercases the first character, leaving the rest untouched.
fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
