//! Field access for records under evaluation.
//!
//! The engine reads records exclusively through [`FieldSource`], so the
//! record representation stays external: reflective lookup, a generated
//! accessor table, or the plain in-memory [`Record`] below all work.
//!
//! `has_field` is deliberately separate from `read`: a name the source has
//! never heard of is a structural error, while a known field with an absent
//! value is an ordinary validation fact.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::name::FieldName;
use crate::value::FieldValue;

/// Read-only access to a record's named fields.
///
/// Implementations must be deterministic within one evaluation: `fields`
/// order and `read` results may not change while a call is in flight.
pub trait FieldSource {
    /// The record's field names, in enumeration order.
    fn fields(&self) -> Vec<FieldName>;

    /// Whether the record has a field with this name at all.
    fn has_field(&self, name: &FieldName) -> bool;

    /// The field's current value, or `None` when absent.
    fn read(&self, name: &FieldName) -> Option<FieldValue>;
}

/// In-memory record backed by an insertion-ordered map.
///
/// Declared fields with no value read as absent. This is both the test
/// fixture representation and the simplest production [`FieldSource`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<FieldName, Option<FieldValue>>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field with an absent value.
    ///
    /// Declaring an already-present field leaves its value untouched.
    pub fn declare(&mut self, name: impl Into<FieldName>) {
        self.fields.entry(name.into()).or_insert(None);
    }

    /// Set a field's value, declaring the field if needed.
    pub fn set(&mut self, name: impl Into<FieldName>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), Some(value.into()));
    }

    /// Reset a field to absent, keeping it declared.
    pub fn clear(&mut self, name: impl Into<FieldName>) {
        self.fields.insert(name.into(), None);
    }

    /// Chaining variant of [`Record::set`] for fixtures.
    pub fn with(mut self, name: impl Into<FieldName>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Chaining variant of [`Record::declare`] for fixtures.
    pub fn with_absent(mut self, name: impl Into<FieldName>) -> Self {
        self.declare(name);
        self
    }
}

impl FieldSource for Record {
    fn fields(&self) -> Vec<FieldName> {
        self.fields.keys().cloned().collect()
    }

    fn has_field(&self, name: &FieldName) -> bool {
        self.fields.contains_key(name)
    }

    fn read(&self, name: &FieldName) -> Option<FieldValue> {
        self.fields.get(name).cloned().flatten()
    }
}
