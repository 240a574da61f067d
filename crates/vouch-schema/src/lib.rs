//! Data model for the vouch validation engine.
//!
//! This crate defines what a validation schema *is*; the traversal that
//! decides record validity lives in `vouch-engine`.
//!
//! - [`FieldName`] / [`PredicateId`] — identifier newtypes
//! - [`FieldValue`] — values as leaf predicates see them
//! - [`Directive`] — per-field descriptor (mandatory, alternatives,
//!   requires, conflicts, predicate, context)
//! - [`DirectiveIndex`] — declaration-ordered name → directive map
//! - [`FieldSource`] / [`Record`] — record access collaborator
//! - [`ValuePredicate`] / [`PredicateRegistry`] — leaf check collaborator
//! - [`DirectiveError`] — structural (malformed-schema) failures

pub mod directive;
pub mod error;
pub mod index;
pub mod name;
pub mod predicate;
pub mod source;
pub mod value;

pub use directive::Directive;
pub use error::DirectiveError;
pub use index::DirectiveIndex;
pub use name::{FieldName, PredicateId};
pub use predicate::{PredicateRegistry, ValuePredicate};
pub use source::{FieldSource, Record};
pub use value::FieldValue;
