//! Per-field validation directives.
//!
//! A directive is the declarative descriptor attached to one field: which
//! leaf predicate checks its value, whether the field is mandatory, and how
//! it relates to sibling fields (alternatives, requirements, conflicts).
//!
//! Directives are built once per record class and never mutated afterwards.
//! Every optional part defaults to empty so a directive table can be
//! declared in data:
//!
//! ```json
//! {
//!     "externalId": { "predicate": "non-empty-text", "mandatory": true },
//!     "priceRent":  { "predicate": "positive-number", "requires": ["rent"] }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::name::{FieldName, PredicateId};

/// Declarative validation descriptor for one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    /// Leaf value check, resolved through the predicate registry.
    ///
    /// Optional: a requirement or alternative child without its own
    /// predicate inherits the parent's during cascade.
    #[serde(default)]
    pub predicate: Option<PredicateId>,

    /// An absent value on a mandatory field is a failure unless an
    /// alternative validates in its place.
    #[serde(default)]
    pub mandatory: bool,

    /// Sibling fields, any one of which may substitute when this mandatory
    /// field is absent. Tried in declaration order, top-level visits only.
    #[serde(default)]
    pub alternatives: Vec<FieldName>,

    /// Fields that must themselves validate whenever this field validates.
    /// Mandatoriness cascades along this relation.
    #[serde(default)]
    pub requires: Vec<FieldName>,

    /// Fields that must not simultaneously validate.
    #[serde(default)]
    pub conflicts: Vec<FieldName>,

    /// Optional context tag for selective evaluation.
    #[serde(default)]
    pub context: Option<String>,
}

impl Directive {
    /// Create an empty directive (no predicate, not mandatory).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leaf predicate.
    pub fn with_predicate(mut self, id: impl Into<PredicateId>) -> Self {
        self.predicate = Some(id.into());
        self
    }

    /// Mark the field mandatory.
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Append an alternative field.
    pub fn alternative(mut self, name: impl Into<FieldName>) -> Self {
        self.alternatives.push(name.into());
        self
    }

    /// Append a required field.
    pub fn requires(mut self, name: impl Into<FieldName>) -> Self {
        self.requires.push(name.into());
        self
    }

    /// Append a conflicting field.
    pub fn conflicts_with(mut self, name: impl Into<FieldName>) -> Self {
        self.conflicts.push(name.into());
        self
    }

    /// Tag the directive with a context.
    pub fn in_context(mut self, tag: impl Into<String>) -> Self {
        self.context = Some(tag.into());
        self
    }

    /// All names this directive refers to, in declaration order.
    pub fn referenced_names(&self) -> impl Iterator<Item = &FieldName> {
        self.alternatives
            .iter()
            .chain(self.requires.iter())
            .chain(self.conflicts.iter())
    }
}
