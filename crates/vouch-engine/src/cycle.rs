//! Requirement-path cycle detection.
//!
//! The guard tracks the chain of fields currently being descended through
//! `requires` edges. Entering a name already on the path closes a cycle;
//! the guard reports the slice from the first occurrence to the repeat.
//! Guard state is local to one evaluation and never shared.

use vouch_schema::FieldName;

/// Error carrying the closed requirement cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    /// The offending path, first occurrence through the repeated node
    /// inclusive, e.g. `[prop, prop1, prop]`.
    pub path: Vec<FieldName>,
}

/// Stack of field names along the requirement path being explored.
#[derive(Debug, Default)]
pub struct CycleGuard {
    path: Vec<FieldName>,
}

impl CycleGuard {
    /// Create an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a guard with the top-level field as the root of the path, so
    /// a requirement chain leading back to it closes a full cycle.
    pub fn rooted(name: &FieldName) -> Self {
        Self {
            path: vec![name.clone()],
        }
    }

    /// Push a field onto the path.
    ///
    /// Fails when the field is already in flight, returning the closed
    /// cycle.
    pub fn enter(&mut self, name: &FieldName) -> Result<(), CycleError> {
        if let Some(start) = self.path.iter().position(|n| n == name) {
            let mut path = self.path[start..].to_vec();
            path.push(name.clone());
            return Err(CycleError { path });
        }
        self.path.push(name.clone());
        Ok(())
    }

    /// Pop a field off the path.
    ///
    /// Must mirror the matching `enter`.
    pub fn leave(&mut self, name: &FieldName) {
        debug_assert_eq!(self.path.last(), Some(name));
        self.path.pop();
    }
}
