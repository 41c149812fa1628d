//! Shared test fixtures for record tests.

#![allow(dead_code)]

use quill_model::Kind;
use quill_store::{fields, ContentStore, EntryId, FieldMap, FieldValue, MemoryStore};

/// A kind with two declared attributes and no hooks.
pub struct Book;

impl Kind for Book {
    const NAME: &'static str = "book";
    const ATTRIBUTES: &'static [&'static str] = &["author", "color"];
}

/// A kind with no declared attributes.
pub struct Plain;

impl Kind for Plain {
    const NAME: &'static str = "plain";
}

/// A kind that (illegally) declares a reserved attribute name.
pub struct BadBook;

impl Kind for BadBook {
    const NAME: &'static str = "bad_book";
    const ATTRIBUTES: &'static [&'static str] = &["author", "title"];
}

/// Builds the entry field set an insert expects.
pub fn entry_fields(title: &str, content: &str, kind: &str) -> FieldMap {
    let mut map = FieldMap::new();
    map.insert(fields::TITLE.to_string(), FieldValue::from(title));
    map.insert(fields::CONTENT.to_string(), FieldValue::from(content));
    map.insert(fields::KIND.to_string(), FieldValue::from(kind));
    map
}

/// Seeds a book entry with both declared attributes set.
pub fn seed_book(
    store: &MemoryStore,
    title: &str,
    content: &str,
    author: &str,
    color: &str,
) -> EntryId {
    let id = store.insert_entry(&entry_fields(title, content, Book::NAME)).unwrap();
    store.set_attribute(id, "author", author).unwrap();
    store.set_attribute(id, "color", color).unwrap();
    id
}
