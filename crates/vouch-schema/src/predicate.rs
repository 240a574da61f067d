//! Leaf value predicates and their registry.
//!
//! A predicate decides whether one present value satisfies a named check.
//! The engine constructs nothing itself: embedders register predicates
//! under string ids and directives refer to them by id. Instances may be
//! stateless singletons; the registry stores them boxed and dispatches by
//! id at traversal time.

use indexmap::IndexMap;

use crate::error::DirectiveError;
use crate::name::{FieldName, PredicateId};
use crate::value::FieldValue;

/// A leaf value check.
///
/// `check` returns `true` to accept the value and `false` to reject it as
/// malformed. Predicates never see absent values; absence is handled by
/// the engine before the leaf check runs.
pub trait ValuePredicate: Send + Sync {
    fn check(&self, value: &FieldValue) -> bool;
}

impl<F> ValuePredicate for F
where
    F: Fn(&FieldValue) -> bool + Send + Sync,
{
    fn check(&self, value: &FieldValue) -> bool {
        self(value)
    }
}

/// String-keyed registry of predicate instances.
#[derive(Default)]
pub struct PredicateRegistry {
    entries: IndexMap<PredicateId, Box<dyn ValuePredicate>>,
}

impl PredicateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate under an id, replacing any previous entry.
    pub fn register(&mut self, id: impl Into<PredicateId>, predicate: Box<dyn ValuePredicate>) {
        self.entries.insert(id.into(), predicate);
    }

    /// Register a closure as a predicate.
    pub fn register_fn(
        &mut self,
        id: impl Into<PredicateId>,
        predicate: impl Fn(&FieldValue) -> bool + Send + Sync + 'static,
    ) {
        self.register(id, Box::new(predicate));
    }

    /// Resolve an id to its predicate.
    ///
    /// `field` is the field whose directive named the id; it only feeds the
    /// error message.
    pub fn resolve(
        &self,
        field: &FieldName,
        id: &PredicateId,
    ) -> Result<&dyn ValuePredicate, DirectiveError> {
        self.entries
            .get(id)
            .map(|predicate| predicate.as_ref())
            .ok_or_else(|| DirectiveError::UnknownPredicate {
                field: field.clone(),
                id: id.clone(),
            })
    }
}

impl std::fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateRegistry")
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
