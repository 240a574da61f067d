//! The traversal and decision core.
//!
//! One evaluation walks every directive-bearing field of a record,
//! mandatory fields first, and decides validity per field:
//!
//! 1. **Absence** — absent and optional passes vacuously; absent and
//!    mandatory enters alternative resolution.
//! 2. **Leaf predicate** — the directive's named check runs on the value.
//! 3. **Requirements** — every required field must validate *as a required
//!    child*: present regardless of its own mandatory flag, alternatives
//!    discarded, parent predicate inherited when it has none.
//! 4. **Conflicts** — no declared conflict may validate at the same time;
//!    conflict checks are one edge deep and never recurse.
//!
//! The first failure is returned as-is; requirement failures chain the
//! child's cause. Cycles on the requirement path and structural directive
//! errors are fatal and escape any wrapping.

use tracing::{debug, trace};

use vouch_schema::{
    Directive, DirectiveError, DirectiveIndex, FieldName, FieldSource, FieldValue, PredicateId,
    PredicateRegistry,
};

use crate::cycle::CycleGuard;
use crate::diagnostic::{Diagnostic, EvalResult};
use crate::ignore::{Ignore, IgnoreSet};

/// Decides whole-record validity against a directive index.
///
/// The evaluator borrows its collaborators and owns only configuration;
/// traversal state is created per [`Evaluator::evaluate`] call, so one
/// evaluator may be reused and the index and registry shared across
/// concurrent evaluations of different records.
pub struct Evaluator<'a> {
    source: &'a dyn FieldSource,
    index: &'a DirectiveIndex,
    predicates: &'a PredicateRegistry,
    ignored: IgnoreSet,
    only_contexts: Vec<String>,
    ignored_contexts: Vec<String>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over a record.
    pub fn new(
        source: &'a dyn FieldSource,
        index: &'a DirectiveIndex,
        predicates: &'a PredicateRegistry,
    ) -> Self {
        Self {
            source,
            index,
            predicates,
            ignored: IgnoreSet::none(),
            only_contexts: Vec::new(),
            ignored_contexts: Vec::new(),
        }
    }

    /// Replace the set of traversal relaxations.
    pub fn ignoring(mut self, tokens: impl IntoIterator<Item = Ignore>) -> Self {
        self.ignored = tokens.into_iter().collect();
        self
    }

    /// Restrict the walk to directives carrying one of these context tags.
    pub fn only_contexts<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.only_contexts = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Skip directives carrying one of these context tags.
    pub fn ignore_contexts<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ignored_contexts = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the record validates.
    pub fn is_valid(&self) -> bool {
        self.evaluate().is_ok()
    }

    /// Walk every directive-bearing field and return the first failure.
    ///
    /// Visitation order is deterministic: mandatory fields first, ties in
    /// `FieldSource` enumeration order.
    pub fn evaluate(&self) -> EvalResult {
        let mut slots: Vec<(FieldName, &Directive)> = self
            .source
            .fields()
            .into_iter()
            .filter_map(|name| {
                let directive = self.index.get(&name)?;
                self.context_selected(directive)
                    .then_some((name, directive))
            })
            .collect();
        slots.sort_by_key(|(_, directive)| !directive.mandatory);

        for (field, directive) in slots {
            self.check_field(&field, directive)?;
        }
        Ok(())
    }

    /// Context selectors gate which directives seed a top-level walk.
    fn context_selected(&self, directive: &Directive) -> bool {
        match &directive.context {
            Some(tag) => {
                if self.ignored_contexts.iter().any(|t| t == tag) {
                    return false;
                }
                self.only_contexts.is_empty() || self.only_contexts.iter().any(|t| t == tag)
            }
            None => self.only_contexts.is_empty(),
        }
    }

    /// Top-form check for one field.
    fn check_field(&self, field: &FieldName, directive: &Directive) -> EvalResult {
        debug!(field = %field, mandatory = directive.mandatory, "validating field");
        let mut guard = CycleGuard::rooted(field);

        match self.source.read(field) {
            None if !directive.mandatory => {
                trace!(field = %field, "absent and optional, vacuously valid");
                Ok(())
            }
            None => self.resolve_alternatives(field, directive, &mut guard),
            Some(value) => {
                self.check_leaf(field, directive, &value)?;
                self.check_requirements(field, directive, &mut guard)?;
                self.check_conflicts(field, directive)
            }
        }
    }

    /// Leaf predicate for a top-level field, which must name its own check.
    fn check_leaf(&self, field: &FieldName, directive: &Directive, value: &FieldValue) -> EvalResult {
        let id = directive
            .predicate
            .as_ref()
            .ok_or_else(|| DirectiveError::MissingPredicate {
                field: field.clone(),
            })?;
        if self.run_predicate(field, id, value)? {
            Ok(())
        } else {
            Err(Diagnostic::invalid_value(field.clone()))
        }
    }

    /// Rescue a mandatory absent field through its declared alternatives.
    ///
    /// `ALTERNATIVES` in the ignore set fails the field immediately, before
    /// `MANDATORY` gets a chance to excuse it.
    fn resolve_alternatives(
        &self,
        field: &FieldName,
        directive: &Directive,
        guard: &mut CycleGuard,
    ) -> EvalResult {
        if self.ignored.contains(Ignore::Alternatives) {
            return Err(Diagnostic::missing_field(
                field.clone(),
                directive.alternatives.clone(),
            ));
        }
        if self.ignored.contains(Ignore::Mandatory) {
            trace!(field = %field, "mandatory ignored, vacuously valid");
            return Ok(());
        }

        for alternative in &directive.alternatives {
            self.resolve_reference(field, alternative)?;
            let Some(value) = self.source.read(alternative) else {
                continue;
            };
            match self.alternative_candidate(alternative, directive, &value, guard) {
                Ok(()) => {
                    debug!(field = %field, alternative = %alternative, "alternative satisfied mandatory field");
                    return Ok(());
                }
                Err(fatal @ (Diagnostic::Directive(_) | Diagnostic::CyclicRequirement { .. })) => {
                    return Err(fatal);
                }
                Err(_) => continue,
            }
        }

        Err(Diagnostic::missing_field(
            field.clone(),
            directive.alternatives.clone(),
        ))
    }

    /// Child-form check for one alternative candidate: its own requirements,
    /// then the leaf predicate (inherited from the parent when the candidate
    /// has none), then its own conflicts. Nested alternatives are never
    /// consulted.
    fn alternative_candidate(
        &self,
        alternative: &FieldName,
        parent: &Directive,
        value: &FieldValue,
        guard: &mut CycleGuard,
    ) -> EvalResult {
        let own = self.index.get(alternative);

        if let Some(directive) = own {
            self.check_requirements(alternative, directive, guard)?;
        }

        let id = own
            .and_then(|d| d.predicate.as_ref())
            .or(parent.predicate.as_ref());
        if let Some(id) = id {
            if !self.run_predicate(alternative, id, value)? {
                return Err(Diagnostic::invalid_value(alternative.clone()));
            }
        }

        if let Some(directive) = own {
            self.check_conflicts(alternative, directive)?;
        }
        Ok(())
    }

    /// Every required field must validate as a required child.
    fn check_requirements(
        &self,
        field: &FieldName,
        directive: &Directive,
        guard: &mut CycleGuard,
    ) -> EvalResult {
        if self.ignored.contains(Ignore::Requirements) {
            return Ok(());
        }

        for required in &directive.requires {
            self.resolve_reference(field, required)?;
            match self.index.get(required) {
                None => {
                    // Unannotated requirement: presence is the whole contract.
                    if self.source.read(required).is_none() {
                        return Err(Diagnostic::requirements(
                            field.clone(),
                            required.clone(),
                            None,
                        ));
                    }
                }
                Some(child) => {
                    guard
                        .enter(required)
                        .map_err(|cycle| Diagnostic::cyclic(cycle.path))?;
                    let outcome = self.required_child(field, required, child, directive, guard);
                    guard.leave(required);
                    outcome?;
                }
            }
        }
        Ok(())
    }

    /// Cascade into one directive-bearing required field.
    ///
    /// Absence fails regardless of the child's own mandatory flag, and the
    /// child's alternatives are discarded: a required field must be present
    /// in its own right.
    fn required_child(
        &self,
        parent_field: &FieldName,
        field: &FieldName,
        directive: &Directive,
        parent: &Directive,
        guard: &mut CycleGuard,
    ) -> EvalResult {
        trace!(parent = %parent_field, field = %field, "cascading into required field");

        let Some(value) = self.source.read(field) else {
            return Err(Diagnostic::requirements(
                parent_field.clone(),
                field.clone(),
                None,
            ));
        };

        let id = directive.predicate.as_ref().or(parent.predicate.as_ref());
        if let Some(id) = id {
            if !self.run_predicate(field, id, &value)? {
                return Err(Diagnostic::requirements(
                    parent_field.clone(),
                    field.clone(),
                    Some(Diagnostic::invalid_value(field.clone())),
                ));
            }
        }

        self.check_requirements(field, directive, guard)
            .and_then(|()| self.check_conflicts(field, directive))
            .map_err(|failure| match failure {
                fatal @ (Diagnostic::Directive(_) | Diagnostic::CyclicRequirement { .. }) => fatal,
                cause => Diagnostic::requirements(
                    parent_field.clone(),
                    field.clone(),
                    Some(cause),
                ),
            })
    }

    /// No declared conflict may validate under the same record.
    ///
    /// One edge deep: only the conflicting field's leaf predicate is
    /// consulted, never its own requirements or conflicts.
    fn check_conflicts(&self, field: &FieldName, directive: &Directive) -> EvalResult {
        if self.ignored.contains(Ignore::Conflicts) {
            return Ok(());
        }

        for conflict in &directive.conflicts {
            self.resolve_reference(field, conflict)?;
            let Some(value) = self.source.read(conflict) else {
                continue;
            };
            let id = self
                .index
                .get(conflict)
                .and_then(|d| d.predicate.as_ref())
                .or(directive.predicate.as_ref());
            let validates = match id {
                Some(id) => self.run_predicate(conflict, id, &value)?,
                // Present with nothing to check against: it stands.
                None => true,
            };
            if validates {
                return Err(Diagnostic::conflict(field.clone(), conflict.clone()));
            }
        }
        Ok(())
    }

    /// A referenced name must be directive-bearing or at least known to the
    /// source.
    fn resolve_reference(&self, referrer: &FieldName, name: &FieldName) -> EvalResult {
        if self.index.contains(name) || self.source.has_field(name) {
            Ok(())
        } else {
            Err(DirectiveError::UnresolvedField {
                referrer: referrer.clone(),
                name: name.clone(),
            }
            .into())
        }
    }

    fn run_predicate(
        &self,
        field: &FieldName,
        id: &PredicateId,
        value: &FieldValue,
    ) -> Result<bool, Diagnostic> {
        let predicate = self.predicates.resolve(field, id)?;
        let accepted = predicate.check(value);
        trace!(field = %field, predicate = %id, accepted, "leaf predicate");
        Ok(accepted)
    }
}
