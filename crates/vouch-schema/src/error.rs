//! Structural directive errors.
//!
//! These are malformed-schema failures, distinct from validation outcomes:
//! a name that resolves nowhere, a predicate id the registry does not know,
//! a duplicate directive. Each is fatal and raised eagerly, before the
//! traversal proceeds past the offending directive.

use thiserror::Error;

use crate::name::{FieldName, PredicateId};

/// Structural error in a directive table or its references.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectiveError {
    /// A directive references a name that is neither directive-bearing nor
    /// a field the source knows.
    #[error("field '{}' references unknown field '{}'", .referrer.display_name(), .name.display_name())]
    UnresolvedField { referrer: FieldName, name: FieldName },

    /// A directive names a predicate the registry cannot resolve.
    #[error("field '{}' names unknown predicate '{}'", .field.display_name(), .id)]
    UnknownPredicate { field: FieldName, id: PredicateId },

    /// Two directives were declared for the same field.
    #[error("duplicate directive for field '{}'", .name.display_name())]
    DuplicateField { name: FieldName },

    /// A directive-bearing field holds a value but has no predicate to run
    /// and none to inherit.
    #[error("field '{}' has no predicate to validate its value", .field.display_name())]
    MissingPredicate { field: FieldName },

    /// An ignore token that is not one of the four known relaxations.
    #[error("unknown ignore token '{token}'")]
    UnknownIgnoreToken { token: String },
}
