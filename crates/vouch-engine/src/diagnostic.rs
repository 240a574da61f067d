//! Validation diagnostics.
//!
//! Exactly four traversal failure kinds, each naming the offending field
//! and the referents involved, plus a wrapper for structural directive
//! errors so one result type surfaces everything. Messages render
//! normalized field names (accessor prefixes stripped).

use thiserror::Error;

use vouch_schema::{DirectiveError, FieldName};

/// Outcome of one evaluation.
pub type EvalResult = Result<(), Diagnostic>;

/// First failure discovered by the traversal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Diagnostic {
    /// The field's value failed its leaf predicate, or the field is
    /// mandatory, absent, and no alternative validated in its place.
    #[error("{}", invalid_field_message(.field, .alternatives, .absent))]
    InvalidField {
        field: FieldName,
        /// Declared alternatives, listed when absence was the failure.
        alternatives: Vec<FieldName>,
        /// Whether the value was absent (as opposed to present but
        /// rejected by the predicate).
        absent: bool,
    },

    /// At least one required field is absent or failed its own checks.
    #[error("{}", requirements_message(.field, .referents, .cause))]
    Requirements {
        field: FieldName,
        referents: Vec<FieldName>,
        /// The child failure that triggered this, when there is one.
        cause: Option<Box<Diagnostic>>,
    },

    /// A declared conflict validates at the same time as the field.
    #[error("field '{}' cannot be valid together with '{}'", .field.display_name(), join_names(.referents))]
    ConflictField {
        field: FieldName,
        referents: Vec<FieldName>,
    },

    /// A `requires` edge closed a cycle on the active path.
    #[error("cyclic requirement: {}", join_path(.path))]
    CyclicRequirement { path: Vec<FieldName> },

    /// Malformed directive or unresolvable reference.
    #[error(transparent)]
    Directive(#[from] DirectiveError),
}

impl Diagnostic {
    /// A present value rejected by its leaf predicate.
    pub fn invalid_value(field: FieldName) -> Self {
        Diagnostic::InvalidField {
            field,
            alternatives: Vec::new(),
            absent: false,
        }
    }

    /// A mandatory absent field with no viable alternative.
    pub fn missing_field(field: FieldName, alternatives: Vec<FieldName>) -> Self {
        Diagnostic::InvalidField {
            field,
            alternatives,
            absent: true,
        }
    }

    /// A requirement failure on one referent, optionally chaining the
    /// child's own failure.
    pub fn requirements(field: FieldName, referent: FieldName, cause: Option<Diagnostic>) -> Self {
        Diagnostic::Requirements {
            field,
            referents: vec![referent],
            cause: cause.map(Box::new),
        }
    }

    /// A conflict on one referent.
    pub fn conflict(field: FieldName, referent: FieldName) -> Self {
        Diagnostic::ConflictField {
            field,
            referents: vec![referent],
        }
    }

    /// A closed requirement cycle.
    pub fn cyclic(path: Vec<FieldName>) -> Self {
        Diagnostic::CyclicRequirement { path }
    }

    /// The field the diagnostic is anchored on, if any.
    pub fn field(&self) -> Option<&FieldName> {
        match self {
            Diagnostic::InvalidField { field, .. }
            | Diagnostic::Requirements { field, .. }
            | Diagnostic::ConflictField { field, .. } => Some(field),
            Diagnostic::CyclicRequirement { path } => path.first(),
            Diagnostic::Directive(_) => None,
        }
    }
}

fn join_names(names: &[FieldName]) -> String {
    names
        .iter()
        .map(FieldName::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_path(path: &[FieldName]) -> String {
    path.iter()
        .map(FieldName::display_name)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn invalid_field_message(field: &FieldName, alternatives: &[FieldName], absent: &bool) -> String {
    if !absent {
        return format!("field '{}' does not hold a valid value", field.display_name());
    }
    if alternatives.is_empty() {
        format!(
            "field '{}' cannot be null and has no viable alternatives",
            field.display_name()
        )
    } else {
        format!(
            "field '{}' cannot be null, viable alternatives: {}",
            field.display_name(),
            join_names(alternatives)
        )
    }
}

fn requirements_message(
    field: &FieldName,
    referents: &[FieldName],
    cause: &Option<Box<Diagnostic>>,
) -> String {
    let mut message = format!(
        "field '{}' requires a valid value for: {}",
        field.display_name(),
        join_names(referents)
    );
    if let Some(cause) = cause {
        message.push_str(&format!(" ({cause})"));
    }
    message
}
