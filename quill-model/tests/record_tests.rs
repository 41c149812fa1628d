mod common;

use common::{entry_fields, seed_book, BadBook, Book, Plain};
use pretty_assertions::assert_eq;
use quill_model::{Kind, Record, RecordError};
use quill_store::{ContentStore, EntryId, FieldValue, MemoryStore};

// ── Fresh construction ───────────────────────────────────────────

#[test]
fn fresh_record_is_booted_clean_and_unsaved() {
    let record = Record::<Book>::new();
    assert!(record.id().is_none());
    assert!(record.is_booted());
    assert!(!record.is_dirty());
    assert_eq!(record.title(), "");
    assert_eq!(record.content(), "");
}

#[test]
fn fresh_record_seeds_declared_attributes_empty() {
    let record = Record::<Book>::new();
    assert_eq!(record.attribute("author"), Some(""));
    assert_eq!(record.attribute("color"), Some(""));
    assert_eq!(record.attribute("undeclared"), None);
}

// ── Hydration ────────────────────────────────────────────────────

#[test]
fn from_id_hydrates_entry_and_attributes() {
    let store = MemoryStore::new();
    let id = seed_book(&store, "Dune", "Spice.", "Herbert", "orange");

    let record = Record::<Book>::from_id(&store, id).unwrap();
    assert_eq!(record.id(), Some(id));
    assert_eq!(record.title(), "Dune");
    assert_eq!(record.content(), "Spice.");
    assert_eq!(record.attribute("author"), Some("Herbert"));
    assert_eq!(record.attribute("color"), Some("orange"));
    assert!(!record.is_dirty());
    assert!(record.is_booted());
}

#[test]
fn from_id_rejects_missing_entry_before_hydration() {
    let store = MemoryStore::new();
    let err = Record::<Book>::from_id(&store, EntryId::new(404)).unwrap_err();
    assert!(matches!(err, RecordError::NotFound { id, .. } if id == EntryId::new(404)));
}

#[test]
fn from_entry_adopts_handle_id() {
    let store = MemoryStore::new();
    let id = seed_book(&store, "Dune", "", "Herbert", "orange");
    let entry = store.entry(id).unwrap().unwrap();

    let record = Record::<Book>::from_entry(&store, &entry).unwrap();
    assert_eq!(record.id(), Some(id));
    assert_eq!(record.title(), "Dune");
}

#[test]
fn unset_attributes_hydrate_as_empty_strings() {
    let store = MemoryStore::new();
    let id = store.insert_entry(&entry_fields("bare", "", "book")).unwrap();

    let record = Record::<Book>::from_id(&store, id).unwrap();
    assert_eq!(record.attribute("author"), Some(""));
}

#[test]
fn reserved_attribute_name_is_fatal_at_hydration() {
    let store = MemoryStore::new();
    let id = store.insert_entry(&entry_fields("x", "", "bad_book")).unwrap();

    let err = Record::<BadBook>::from_id(&store, id).unwrap_err();
    assert!(matches!(err, RecordError::ReservedName(name) if name == "title"));
}

#[test]
fn reserved_check_does_not_fire_for_fresh_records() {
    // The check is tied to hydration; a fresh instance never hydrates.
    let record = Record::<BadBook>::new();
    assert!(record.is_booted());
}

// ── Dirty tracking ───────────────────────────────────────────────

#[test]
fn typed_setters_mark_dirty_after_boot() {
    let mut record = Record::<Book>::new();
    assert!(!record.is_dirty());
    record.set_title("changed");
    assert!(record.is_dirty());
}

#[test]
fn generic_set_marks_dirty_after_boot() {
    let store = MemoryStore::new();
    let id = seed_book(&store, "a", "", "b", "c");
    let mut record = Record::<Book>::from_id(&store, id).unwrap();

    record.set("color", "green").unwrap();
    assert!(record.is_dirty());
    assert_eq!(record.attribute("color"), Some("green"));
}

#[test]
fn failed_set_does_not_mark_dirty() {
    let mut record = Record::<Book>::new();
    let err = record.set("publisher", "x").unwrap_err();
    assert!(matches!(err, RecordError::UnknownField(name) if name == "publisher"));
    assert!(!record.is_dirty());
}

#[test]
fn set_attribute_rejects_undeclared_names() {
    let mut record = Record::<Book>::new();
    assert!(matches!(
        record.set_attribute("publisher", "x"),
        Err(RecordError::UnknownField(_))
    ));
}

// ── Generic get ──────────────────────────────────────────────────

#[test]
fn get_reads_first_class_fields_and_attributes() {
    let store = MemoryStore::new();
    let id = seed_book(&store, "Dune", "Spice.", "Herbert", "orange");
    let record = Record::<Book>::from_id(&store, id).unwrap();

    assert_eq!(record.get("id"), Some(FieldValue::from(id)));
    assert_eq!(record.get("title"), Some(FieldValue::from("Dune")));
    assert_eq!(record.get("content"), Some(FieldValue::from("Spice.")));
    assert_eq!(record.get("author"), Some(FieldValue::from("Herbert")));
}

#[test]
fn get_exposes_internal_state_read_only() {
    let mut record = Record::<Book>::new();
    assert_eq!(record.get("booted"), Some(FieldValue::Bool(true)));
    assert_eq!(record.get("dirty"), Some(FieldValue::Bool(false)));

    record.set_title("x");
    assert_eq!(record.get("dirty"), Some(FieldValue::Bool(true)));
    assert!(record.set("dirty", "false").is_err());
    assert!(record.set("id", "9").is_err());
}

#[test]
fn get_returns_none_for_unset_id_and_unknown_names() {
    let record = Record::<Book>::new();
    assert_eq!(record.get("id"), None);
    assert_eq!(record.get("publisher"), None);
}

#[test]
fn get_falls_back_to_computed_accessors() {
    struct Labeled;
    impl Kind for Labeled {
        const NAME: &'static str = "labeled";
        fn computed(record: &Record<Self>, field: &str) -> Option<FieldValue> {
            (field == "headline").then(|| FieldValue::Text(format!("{}!", record.title())))
        }
    }

    let mut record = Record::<Labeled>::new();
    record.set_title("Read this");
    assert_eq!(record.get("headline"), Some(FieldValue::from("Read this!")));
    assert_eq!(record.get("footline"), None);
}

#[test]
fn real_fields_shadow_computed_accessors() {
    struct Shadowed;
    impl Kind for Shadowed {
        const NAME: &'static str = "shadowed";
        const ATTRIBUTES: &'static [&'static str] = &["headline"];
        fn computed(_record: &Record<Self>, _field: &str) -> Option<FieldValue> {
            Some(FieldValue::from("computed"))
        }
    }

    let mut record = Record::<Shadowed>::new();
    record.set("headline", "stored").unwrap();
    assert_eq!(record.get("headline"), Some(FieldValue::from("stored")));
}

// ── as_entry ─────────────────────────────────────────────────────

#[test]
fn as_entry_returns_canonical_store_state() {
    let store = MemoryStore::new();
    let id = seed_book(&store, "Dune", "Spice.", "Herbert", "orange");
    let mut record = Record::<Book>::from_id(&store, id).unwrap();

    // In-memory divergence is not reflected until save.
    record.set_title("Changed");
    let entry = record.as_entry(&store).unwrap();
    assert_eq!(entry.title, "Dune");
    assert_eq!(entry.kind, "book");
}

#[test]
fn as_entry_fails_for_unsaved_records() {
    let store = MemoryStore::new();
    let record = Record::<Plain>::new();
    assert!(matches!(record.as_entry(&store), Err(RecordError::Unsaved)));
}
