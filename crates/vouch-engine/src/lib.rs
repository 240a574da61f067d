//! Graph traversal and decision core of the vouch validation engine.
//!
//! Given a record (read through `vouch-schema`'s `FieldSource`) and a
//! directive index, the [`Evaluator`] decides whole-record validity:
//! mandatory-first visitation, alternative resolution for absent mandatory
//! fields, mandatoriness cascade along `requires` chains, one-edge-deep
//! conflict checks, and cycle detection on the requirement path.
//!
//! - [`Evaluator`] — the walk itself, with chaining configuration
//! - [`Ignore`] / [`IgnoreSet`] — caller-supplied traversal relaxations
//! - [`CycleGuard`] — in-flight requirement path tracking
//! - [`Diagnostic`] — the four failure kinds plus structural errors

pub mod cycle;
pub mod diagnostic;
pub mod evaluator;
pub mod ignore;

pub use cycle::{CycleError, CycleGuard};
pub use diagnostic::{Diagnostic, EvalResult};
pub use evaluator::Evaluator;
pub use ignore::{Ignore, IgnoreSet};
