//! The canonical entry handle and its identifier.
//!
//! An entry is what the backing store actually holds: an integer id, a
//! title, a body, a publication status, and a kind name. Everything richer
//! (typed records, dirty tracking) is layered on top by `quill-model`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for an entry in the backing store.
///
/// Ids are assigned by the store on insert and are never reused by this
/// layer. They are plain integers so any engine with an auto-incrementing
/// key can back the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Creates an entry ID from a raw integer.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u64> for EntryId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Publication status of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Publicly visible (the default for fresh inserts).
    Publish,
    /// Saved but not published.
    Draft,
    /// Awaiting review.
    Pending,
    /// Visible to its owner only.
    Private,
    /// Soft-deleted.
    Trash,
}

impl EntryStatus {
    /// The store-native name for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(Self::Publish),
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "private" => Ok(Self::Private),
            "trash" => Ok(Self::Trash),
            other => Err(format!("unknown entry status: {other}")),
        }
    }
}

/// A snapshot of a single entry as the store currently holds it.
///
/// This is a plain data handle — mutating it does nothing until the fields
/// are written back through [`ContentStore`](crate::ContentStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub status: EntryStatus,
    /// The kind name this entry was saved under (e.g. "book").
    pub kind: String,
}
