//! In-memory reference adapter.
//!
//! Implements all three adapter traits over plain maps. This is the
//! reference semantics for adapter authors and the default backing for
//! tests: ids are assigned monotonically starting at 1, attributes live in
//! a separate key/value map exactly as the contract describes, and filter
//! evaluation covers every [`Compare`] operator for both value types.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::field::fields;
use crate::{
    AttrFilter, Compare, ContentStore, Entry, EntryId, EntryStatus, FieldMap, FieldValue,
    QueryService, StoreError, StoreResult, TypeRegistrar, ValueType,
};

/// An embeddable content-entry store backed by in-memory maps.
///
/// Interior mutability (a single `Mutex`) lets it answer the `&self`
/// adapter traits; it is not intended for cross-thread sharing, matching
/// the layer's single-caller model.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    entries: BTreeMap<EntryId, Entry>,
    attributes: BTreeMap<(EntryId, String), String>,
    kinds: BTreeMap<String, FieldMap>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }

    /// Returns the options a kind was registered with, if any.
    pub fn registered(&self, name: &str) -> Option<FieldMap> {
        self.locked().ok()?.kinds.get(name).cloned()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.locked().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn apply_fields(entry: &mut Entry, fields_map: &FieldMap) -> StoreResult<()> {
    if let Some(v) = fields_map.get(fields::TITLE) {
        entry.title = v.to_string();
    }
    if let Some(v) = fields_map.get(fields::CONTENT) {
        entry.content = v.to_string();
    }
    if let Some(v) = fields_map.get(fields::KIND) {
        entry.kind = v.to_string();
    }
    if let Some(v) = fields_map.get(fields::STATUS) {
        entry.status = v.to_string().parse().map_err(StoreError::InvalidField)?;
    }
    Ok(())
}

impl ContentStore for MemoryStore {
    fn entry_status(&self, id: EntryId) -> StoreResult<Option<EntryStatus>> {
        Ok(self.locked()?.entries.get(&id).map(|e| e.status))
    }

    fn entry(&self, id: EntryId) -> StoreResult<Option<Entry>> {
        Ok(self.locked()?.entries.get(&id).cloned())
    }

    fn insert_entry(&self, fields_map: &FieldMap) -> StoreResult<EntryId> {
        let mut inner = self.locked()?;
        inner.next_id += 1;
        let id = EntryId::new(inner.next_id);

        let mut entry = Entry {
            id,
            title: String::new(),
            content: String::new(),
            status: EntryStatus::Publish,
            kind: "entry".to_string(),
        };
        apply_fields(&mut entry, fields_map)?;

        debug!(%id, kind = %entry.kind, "inserted entry");
        inner.entries.insert(id, entry);
        Ok(id)
    }

    fn update_entry(&self, fields_map: &FieldMap) -> StoreResult<EntryId> {
        let id = match fields_map.get(fields::ID) {
            Some(FieldValue::Int(n)) if *n >= 0 => EntryId::new(*n as u64),
            Some(other) => {
                return Err(StoreError::InvalidField(format!(
                    "update requires an integer {}, got {other}",
                    fields::ID
                )));
            }
            None => {
                return Err(StoreError::InvalidField(format!(
                    "update requires the {} field",
                    fields::ID
                )));
            }
        };

        let mut inner = self.locked()?;
        let Some(entry) = inner.entries.get_mut(&id) else {
            return Err(StoreError::Backend(format!("cannot update missing entry {id}")));
        };
        apply_fields(entry, fields_map)?;
        debug!(%id, "updated entry");
        Ok(id)
    }

    fn attribute(&self, id: EntryId, key: &str) -> StoreResult<String> {
        Ok(self
            .locked()?
            .attributes
            .get(&(id, key.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn set_attribute(&self, id: EntryId, key: &str, value: &str) -> StoreResult<bool> {
        let mut inner = self.locked()?;
        let slot = inner.attributes.entry((id, key.to_string())).or_default();
        if slot == value {
            return Ok(false);
        }
        *slot = value.to_string();
        Ok(true)
    }
}

impl QueryService for MemoryStore {
    fn query(&self, filters: &[AttrFilter]) -> StoreResult<Vec<EntryId>> {
        let inner = self.locked()?;
        let ids = inner
            .entries
            .keys()
            .copied()
            .filter(|id| {
                filters.iter().all(|f| {
                    let stored = inner.attributes.get(&(*id, f.key.clone()));
                    filter_matches(f, stored.map(String::as_str))
                })
            })
            .collect::<Vec<_>>();
        debug!(filters = filters.len(), matched = ids.len(), "executed attribute query");
        Ok(ids)
    }
}

impl TypeRegistrar for MemoryStore {
    fn register_type(&self, name: &str, options: &FieldMap) -> StoreResult<()> {
        let mut inner = self.locked()?;
        debug!(name, "registered entry kind");
        inner.kinds.insert(name.to_string(), options.clone());
        Ok(())
    }
}

/// Evaluates a single filter against a stored attribute value.
///
/// An unset attribute only satisfies `NotEqual`; every other operator
/// needs a stored value to compare against.
fn filter_matches(filter: &AttrFilter, stored: Option<&str>) -> bool {
    let Some(stored) = stored else {
        return filter.compare == Compare::NotEqual;
    };

    match filter.value_type {
        ValueType::Char => {
            compare_ord(filter.compare, Some(stored.cmp(filter.value.as_str())), || {
                stored.contains(filter.value.as_str())
            })
        }
        ValueType::Numeric => {
            let (Ok(lhs), Ok(rhs)) = (stored.parse::<f64>(), filter.value.parse::<f64>()) else {
                return false;
            };
            compare_ord(filter.compare, lhs.partial_cmp(&rhs), || {
                stored.contains(filter.value.as_str())
            })
        }
    }
}

fn compare_ord(
    compare: Compare,
    ordering: Option<std::cmp::Ordering>,
    like: impl Fn() -> bool,
) -> bool {
    use std::cmp::Ordering::{Equal, Greater, Less};
    let Some(ordering) = ordering else {
        return false;
    };
    match compare {
        Compare::Equal => ordering == Equal,
        Compare::NotEqual => ordering != Equal,
        Compare::Like => like(),
        Compare::Greater => ordering == Greater,
        Compare::GreaterOrEqual => ordering != Less,
        Compare::Less => ordering == Less,
        Compare::LessOrEqual => ordering != Greater,
    }
}
