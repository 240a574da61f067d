//! Directive index.
//!
//! Maps field names to their directives, preserving declaration order.
//! Built once per record class, immutable afterwards, and shareable
//! read-only across concurrent evaluations of different records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::directive::Directive;
use crate::error::DirectiveError;
use crate::name::FieldName;

/// Insertion-ordered map from field name to directive.
///
/// Declaration order matters: it is the tie-break order for field
/// visitation, and `alternatives`/`requires` are walked in the order the
/// directive declares them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectiveIndex {
    entries: IndexMap<FieldName, Directive>,
}

impl DirectiveIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `(name, directive)` pairs.
    ///
    /// Fails with [`DirectiveError::DuplicateField`] if a name appears
    /// twice.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (FieldName, Directive)>,
    ) -> Result<Self, DirectiveError> {
        let mut index = Self::new();
        for (name, directive) in entries {
            index.insert(name, directive)?;
        }
        Ok(index)
    }

    /// Register a directive for a field.
    pub fn insert(&mut self, name: FieldName, directive: Directive) -> Result<(), DirectiveError> {
        if self.entries.contains_key(&name) {
            return Err(DirectiveError::DuplicateField { name });
        }
        self.entries.insert(name, directive);
        Ok(())
    }

    /// Look up the directive for a field, if it has one.
    pub fn get(&self, name: &FieldName) -> Option<&Directive> {
        self.entries.get(name)
    }

    /// Whether the field carries a directive.
    pub fn contains(&self, name: &FieldName) -> bool {
        self.entries.contains_key(name)
    }

    /// Directive-bearing fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &Directive)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
