//! Field sets for entry writes.
//!
//! Insert and update operations take an open mapping of store field names
//! to values. The record layer builds these maps (defaults, caller
//! overrides, forced kind field) and hands them to the adapter; the adapter
//! decides how to persist them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::EntryId;

/// Canonical store field names used by the record layer.
pub mod fields {
    /// The entry's identity field, present on every update.
    pub const ID: &str = "ID";
    pub const TITLE: &str = "post_title";
    pub const CONTENT: &str = "post_content";
    pub const STATUS: &str = "post_status";
    /// The logical entry-type name a record kind maps to.
    pub const KIND: &str = "post_type";
}

/// A single field value in an entry write or registration option set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Bool(bool),
}

impl FieldValue {
    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<EntryId> for FieldValue {
    fn from(id: EntryId) -> Self {
        Self::Int(id.as_u64() as i64)
    }
}

/// An ordered mapping of store field names to values.
///
/// Ordered so that adapters and tests see deterministic field sets.
pub type FieldMap = BTreeMap<String, FieldValue>;
