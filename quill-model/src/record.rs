//! The record type: lifecycle, accessors, and the save protocol.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use quill_store::{fields, ContentStore, Entry, EntryId, EntryStatus, FieldMap, FieldValue};
use tracing::debug;

use crate::hook::{self, Hook};
use crate::{Kind, RecordError, RecordResult};

/// The attribute under which a record writes its own id on every save.
/// Its presence marks an entry as owned by this layer, and relation
/// lookups against an id-like local key resolve to it.
pub const SELF_ID_ATTR: &str = "_id";

/// Field names a kind may not declare as attributes. Identity and the
/// first-class fields live outside the attribute map, and `_id`/`_record`
/// are names the layer itself owns.
pub const RESERVED_FIELDS: &[&str] = &["id", "title", "content", SELF_ID_ATTR, "_record"];

/// A typed, mutable view of one store entry.
///
/// Holds identity, the first-class title/content fields, and the declared
/// attribute values, and tracks whether in-memory state has diverged from
/// the store since the last successful [`save`](Record::save).
pub struct Record<K: Kind> {
    id: Option<EntryId>,
    title: String,
    content: String,
    attributes: BTreeMap<String, String>,
    dirty: bool,
    booted: bool,
    _kind: PhantomData<K>,
}

impl<K: Kind> Record<K> {
    fn unbooted() -> Self {
        let attributes = K::ATTRIBUTES
            .iter()
            .map(|attr| (attr.to_string(), String::new()))
            .collect();
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            attributes,
            dirty: false,
            booted: false,
            _kind: PhantomData,
        }
    }

    /// Creates a fresh, unsaved record. Declared attributes start empty;
    /// the first [`save`](Record::save) inserts a new entry.
    #[must_use]
    pub fn new() -> Self {
        let mut record = Self::unbooted();
        hook::dispatch(Hook::Booting, &mut record);
        hook::dispatch(Hook::Booted, &mut record);
        record.booted = true;
        record
    }

    /// Constructs a record from a known id, verifying it resolves in the
    /// store before any field is populated.
    pub fn from_id(store: &impl ContentStore, id: EntryId) -> RecordResult<Self> {
        let mut record = Self::unbooted();
        hook::dispatch(Hook::Booting, &mut record);
        if store.entry_status(id)?.is_none() {
            return Err(RecordError::NotFound {
                id,
                context: "entry does not exist",
            });
        }
        record.id = Some(id);
        record.hydrate(store, id)?;
        hook::dispatch(Hook::Booted, &mut record);
        record.booted = true;
        Ok(record)
    }

    /// Constructs a record from a store-native entry handle, adopting its
    /// id and hydrating from the store's current state.
    pub fn from_entry(store: &impl ContentStore, entry: &Entry) -> RecordResult<Self> {
        let mut record = Self::unbooted();
        hook::dispatch(Hook::Booting, &mut record);
        record.id = Some(entry.id);
        record.hydrate(store, entry.id)?;
        hook::dispatch(Hook::Booted, &mut record);
        record.booted = true;
        Ok(record)
    }

    /// Copies the canonical entry and every declared attribute into memory.
    fn hydrate(&mut self, store: &impl ContentStore, id: EntryId) -> RecordResult<()> {
        let entry = store.entry(id)?.ok_or(RecordError::NotFound {
            id,
            context: "entry does not exist",
        })?;
        self.title = entry.title;
        self.content = entry.content;

        for &attr in K::ATTRIBUTES {
            if RESERVED_FIELDS.contains(&attr) {
                return Err(RecordError::ReservedName(attr.to_string()));
            }
            let value = store.attribute(id, attr)?;
            self.attributes.insert(attr.to_string(), value);
        }
        debug!(%id, kind = K::NAME, "hydrated record");
        Ok(())
    }

    // ── Typed accessors ──────────────────────────────────────────

    /// The store identity, unset until the first successful insert.
    #[must_use]
    pub fn id(&self) -> Option<EntryId> {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when in-memory state has diverged from the last saved state.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True once construction (fresh setup or hydration) has completed.
    #[must_use]
    pub fn is_booted(&self) -> bool {
        self.booted
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    /// Reads one declared attribute. `None` for undeclared names.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Writes one declared attribute; undeclared names are rejected.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> RecordResult<()> {
        if !self.attributes.contains_key(name) {
            return Err(RecordError::UnknownField(name.to_string()));
        }
        self.attributes.insert(name.to_string(), value.into());
        self.touch();
        Ok(())
    }

    // ── Generic accessor ─────────────────────────────────────────

    /// Reads any field by name: `id`, `title`, `content`, the internal
    /// `dirty`/`booted` flags, a declared attribute, or a computed field
    /// supplied by the kind. `None` when nothing answers to the name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => self.id.map(FieldValue::from),
            "title" => Some(FieldValue::Text(self.title.clone())),
            "content" => Some(FieldValue::Text(self.content.clone())),
            "dirty" => Some(FieldValue::Bool(self.dirty)),
            "booted" => Some(FieldValue::Bool(self.booted)),
            _ => match self.attributes.get(field) {
                Some(value) => Some(FieldValue::Text(value.clone())),
                None => K::computed(self, field),
            },
        }
    }

    /// Writes `title`, `content`, or a declared attribute by name.
    /// Identity and internal state are not writable through this path.
    ///
    /// Assignments after boot mark the record dirty; assignments made
    /// while a constructor is still running do not.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> RecordResult<()> {
        match field {
            "title" => self.title = value.into(),
            "content" => self.content = value.into(),
            _ if self.attributes.contains_key(field) => {
                self.attributes.insert(field.to_string(), value.into());
            }
            _ => return Err(RecordError::UnknownField(field.to_string())),
        }
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        if self.booted {
            self.dirty = true;
        }
    }

    // ── Persistence ──────────────────────────────────────────────

    /// Saves with no caller overrides. See [`save_with`](Record::save_with).
    pub fn save(&mut self, store: &impl ContentStore) -> RecordResult<EntryId> {
        self.save_with(store, FieldMap::new())
    }

    /// Reconciles in-memory state back to the store.
    ///
    /// Unsaved records insert (adopting the returned id), saved records
    /// update. The entry field set is built with merge precedence
    /// defaults < `overrides` < forced kind field, so the persisted kind
    /// is always [`K::NAME`](Kind::NAME). After the entry write, every
    /// declared attribute is written, then the id itself under
    /// [`SELF_ID_ATTR`].
    ///
    /// The two phases are not atomic: a failure during the attribute loop
    /// leaves the entry persisted, later attributes unwritten, and the
    /// dirty flag still set.
    pub fn save_with(
        &mut self,
        store: &impl ContentStore,
        overrides: FieldMap,
    ) -> RecordResult<EntryId> {
        hook::dispatch(Hook::Saving, self);

        let id = match self.id {
            Some(id) => {
                let mut entry_fields = FieldMap::new();
                entry_fields.insert(fields::ID.to_string(), FieldValue::from(id));
                entry_fields.insert(fields::TITLE.to_string(), FieldValue::Text(self.title.clone()));
                entry_fields.insert(
                    fields::CONTENT.to_string(),
                    FieldValue::Text(self.content.clone()),
                );
                entry_fields.extend(overrides);
                entry_fields.insert(fields::KIND.to_string(), FieldValue::from(K::NAME));

                debug!(%id, kind = K::NAME, "saving record (update)");
                store.update_entry(&entry_fields)?
            }
            None => {
                hook::dispatch(Hook::Inserting, self);

                let mut entry_fields = FieldMap::new();
                entry_fields.insert(
                    fields::STATUS.to_string(),
                    FieldValue::from(EntryStatus::Publish.as_str()),
                );
                entry_fields.insert(fields::TITLE.to_string(), FieldValue::Text(self.title.clone()));
                entry_fields.insert(
                    fields::CONTENT.to_string(),
                    FieldValue::Text(self.content.clone()),
                );
                entry_fields.extend(overrides);
                entry_fields.insert(fields::KIND.to_string(), FieldValue::from(K::NAME));

                let id = store.insert_entry(&entry_fields)?;
                self.id = Some(id);
                debug!(%id, kind = K::NAME, "saving record (insert)");
                hook::dispatch(Hook::Inserted, self);
                id
            }
        };

        for &attr in K::ATTRIBUTES {
            let value = self.attributes.get(attr).cloned().unwrap_or_default();
            store.set_attribute(id, attr, &value)?;
        }
        store.set_attribute(id, SELF_ID_ATTR, &id.to_string())?;

        hook::dispatch(Hook::Saved, self);
        self.dirty = false;
        Ok(id)
    }

    /// Fetches the current canonical store entry for this record's id.
    pub fn as_entry(&self, store: &impl ContentStore) -> RecordResult<Entry> {
        let id = self.id.ok_or(RecordError::Unsaved)?;
        store.entry(id)?.ok_or(RecordError::NotFound {
            id,
            context: "entry does not exist",
        })
    }
}

impl<K: Kind> Default for Record<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kind> fmt::Debug for Record<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("kind", &K::NAME)
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("attributes", &self.attributes)
            .field("dirty", &self.dirty)
            .field("booted", &self.booted)
            .finish()
    }
}
