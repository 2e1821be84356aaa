//! A Shape: a target class plus an ordered list of constraints.

use crate::constraint::Constraint;

/// Shapes and constraints grow in small amortized-doubling arenas (per the
/// design notes' memory section) — a plain `Vec` gives exactly that.
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) id: u32,
    pub(crate) target_class: u32,
    pub(crate) constraints: Vec<Constraint>,
}

impl Shape {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn target_class(&self) -> u32 {
        self.target_class
    }

    /// Constraints in registration order — the order the Validator relies
    /// on to attribute a Violation to a zero-based constraint index.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}
