//! # vouch
//!
//! Declarative field validation. Fields carry directives — a leaf
//! predicate, mandatoriness, alternatives, requirements, conflicts — and
//! the engine walks the resulting relation graph to decide whether the
//! record as a whole is valid, reporting the first offending relation.
//!
//! This crate is a facade that re-exports:
//! - `vouch-schema` — names, values, directives, the directive index, and
//!   the `FieldSource` / `ValuePredicate` collaborator traits
//! - `vouch-engine` — the evaluator, ignore tokens, cycle guard, and the
//!   diagnostic taxonomy
//!
//! ## Usage
//!
//! ```
//! use vouch::{Directive, DirectiveIndex, Evaluator, FieldValue, PredicateRegistry, Record};
//!
//! let mut predicates = PredicateRegistry::new();
//! predicates.register_fn("non-empty-text", |v: &FieldValue| {
//!     v.as_text().is_some_and(|s| !s.is_empty())
//! });
//!
//! let index = DirectiveIndex::from_entries([(
//!     "externalId".into(),
//!     Directive::new().with_predicate("non-empty-text").mandatory(),
//! )])
//! .unwrap();
//!
//! let record = Record::new().with("externalId", "ext-ID");
//! assert!(Evaluator::new(&record, &index, &predicates).is_valid());
//! ```

pub use vouch_engine::{
    CycleError, CycleGuard, Diagnostic, EvalResult, Evaluator, Ignore, IgnoreSet,
};
pub use vouch_schema::{
    Directive, DirectiveError, DirectiveIndex, FieldName, FieldSource, FieldValue, PredicateId,
    PredicateRegistry, Record, ValuePredicate,
};

/// Validate a record with default configuration.
///
/// Builds an [`Evaluator`] with no relaxations or context selectors and
/// runs it once.
pub fn validate(
    source: &dyn FieldSource,
    index: &DirectiveIndex,
    predicates: &PredicateRegistry,
) -> EvalResult {
    Evaluator::new(source, index, predicates).evaluate()
}
