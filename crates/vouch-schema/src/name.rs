//! Identifier newtypes for fields and predicates.
//!
//! Field names are opaque strings, unique within a record. They key the
//! directive index and appear in every diagnostic, so they support cheap
//! comparison, hashing, and ordering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named field on a record.
///
/// Names are immutable and compare by their raw string. Diagnostics render
/// them through [`FieldName::display_name`], which strips accessor prefixes
/// so messages read as field names rather than accessor names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Create a field name from a raw string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw name as declared.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as it should appear in messages.
    ///
    /// Strips a leading `get`/`is`/`has` accessor prefix when the remainder
    /// starts uppercase, then lower-cases the leading character:
    /// `getPriceRent` becomes `priceRent`, `issue` stays `issue`.
    pub fn display_name(&self) -> String {
        let raw = self.0.as_str();
        let trimmed = ["get", "is", "has"]
            .iter()
            .find_map(|prefix| {
                raw.strip_prefix(prefix)
                    .filter(|rest| rest.chars().next().is_some_and(char::is_uppercase))
            })
            .unwrap_or(raw);

        let mut chars = trimmed.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier for a leaf value predicate, resolved through the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredicateId(String);

impl PredicateId {
    /// Create a predicate id from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PredicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PredicateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PredicateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
