//! The Shape registry: owns Shapes keyed by unique ID. Append-only — shapes
//! and constraints are never removed, matching the Graph's own no-deletion
//! contract.

use std::collections::HashMap;

use crate::constraint::Constraint;
use crate::error::ShaclError;
use crate::shape::Shape;

/// Outcome of [`ShapeRegistry::define_shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineOutcome {
    Defined,
    DuplicateId,
}

/// Outcome of [`ShapeRegistry::add_constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddConstraintOutcome {
    Added,
}

/// Upper bound on constraints per shape. Shapes grow their constraint list
/// by amortized doubling (see the design notes' memory section), but that
/// growth is still bounded — an unbounded constraint list would turn
/// `Validator::validate`'s per-shape loop into an unbounded one too.
pub const MAX_CONSTRAINTS_PER_SHAPE: usize = 4096;

/// Shapes keyed by unique shape ID. Shapes are appended in the order
/// [`ShapeRegistry::define_shape`] is called and iterated in that same
/// order, which is what lets the [`crate::Validator`] attribute a failure
/// to a specific shape deterministically.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
    index_by_id: HashMap<u32, usize>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a new shape with `shape_id` targeting `target_class_id`.
    /// Fails with `DuplicateId` if `shape_id` is already defined; state is
    /// unchanged in that case.
    pub fn define_shape(&mut self, shape_id: u32, target_class_id: u32) -> DefineOutcome {
        if self.index_by_id.contains_key(&shape_id) {
            return DefineOutcome::DuplicateId;
        }
        tracing::info!(shape_id, target_class_id, "latticestore_shacl::ShapeRegistry::define_shape");
        let idx = self.shapes.len();
        self.shapes.push(Shape { id: shape_id, target_class: target_class_id, constraints: Vec::new() });
        self.index_by_id.insert(shape_id, idx);
        DefineOutcome::Defined
    }

    /// Appends `constraint` to `shape_id`'s constraint list, in order.
    /// Fails with `UnknownShape` if no shape with that ID has been defined,
    /// or `OutOfCapacity` if the shape already holds
    /// [`MAX_CONSTRAINTS_PER_SHAPE`] constraints.
    pub fn add_constraint(&mut self, shape_id: u32, constraint: Constraint) -> Result<AddConstraintOutcome, ShaclError> {
        let idx = *self.index_by_id.get(&shape_id).ok_or(ShaclError::UnknownShape(shape_id))?;
        if self.shapes[idx].constraints.len() >= MAX_CONSTRAINTS_PER_SHAPE {
            return Err(ShaclError::OutOfCapacity(shape_id));
        }
        self.shapes[idx].constraints.push(constraint);
        Ok(AddConstraintOutcome::Added)
    }

    pub fn get(&self, shape_id: u32) -> Option<&Shape> {
        let idx = *self.index_by_id.get(&shape_id)?;
        Some(&self.shapes[idx])
    }

    /// All shapes, in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
