//! Attribute filter specs for query execution.
//!
//! A query is an ordered list of [`AttrFilter`]s combined with implicit
//! conjunction. Each filter compares one attribute against one value; the
//! comparison operator and value interpretation default to string equality.

use serde::{Deserialize, Serialize};

/// Comparison operator for a single attribute filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compare {
    #[default]
    Equal,
    NotEqual,
    /// Substring match.
    Like,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

/// How the stored attribute value is interpreted during comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Plain string comparison (the default).
    #[default]
    Char,
    /// Both sides parsed as numbers; non-numeric values never match.
    Numeric,
}

/// One attribute comparison in a query's filter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrFilter {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub compare: Compare,
    #[serde(default)]
    pub value_type: ValueType,
}

impl AttrFilter {
    /// Equality filter with the default string comparison.
    #[must_use]
    pub fn eq(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            compare: Compare::Equal,
            value_type: ValueType::Char,
        }
    }

    /// Filter with an explicit comparison operator.
    #[must_use]
    pub fn cmp(key: impl Into<String>, value: impl Into<String>, compare: Compare) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            compare,
            value_type: ValueType::Char,
        }
    }

    /// Switches the filter to numeric value interpretation.
    #[must_use]
    pub fn numeric(mut self) -> Self {
        self.value_type = ValueType::Numeric;
        self
    }
}
