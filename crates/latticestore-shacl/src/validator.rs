//! Given a node ID, decide whether it satisfies every constraint of every
//! shape whose target class it belongs to. First-violation semantics: the
//! first shape (in registration order) with a failing constraint, and the
//! zero-based index of that constraint, is reported — the rest are never
//! evaluated.

use latticestore_core::{Graph, RDF_TYPE};

use crate::constraint::Constraint;
use crate::registry::ShapeRegistry;

/// Upper bound on the object-ID range `MinCount`/`MaxCount` scan.
///
/// This is the Open Question the design notes call out by name: counting
/// "at least k distinct objects" over an unbounded ID universe has no
/// constant worst-case cost, so the scan is truncated at this bound instead.
/// Above it, a `MinCount` may under-report and a `MaxCount` may miss objects
/// past the cutoff — a correctness/latency trade made explicit here rather
/// than left as a hidden constant. Callers whose object ID space exceeds
/// this bound, or who need exact counts, should probe an external indexed
/// predicate count instead of this scan.
pub const DEFAULT_SCAN_MAX: u32 = 1 << 16;

/// Result of [`Validator::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Ok,
    /// The first shape (by registration order) and zero-based constraint
    /// index that failed.
    Violation { shape_id: u32, constraint_index: usize },
}

/// Evaluates [`ShapeRegistry`] shapes against a [`Graph`]. Holds no graph or
/// registry state itself — both are passed to `validate` by reference, per
/// the design notes' rejection of global mutable engine state.
pub struct Validator {
    scan_max: u32,
}

impl Default for Validator {
    fn default() -> Self {
        Validator { scan_max: DEFAULT_SCAN_MAX }
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the MinCount/MaxCount scan bound. Intended for callers
    /// whose object ID universe is small enough to validate exactly, or
    /// large enough that the default bound is too permissive.
    pub fn with_scan_max(scan_max: u32) -> Self {
        Validator { scan_max }
    }

    /// Never fails: the validator allocates nothing on this path and every
    /// Graph probe it issues is read-only, so it cannot observe a Graph
    /// error under the single-writer contract (see the concurrency notes).
    pub fn validate(&self, registry: &ShapeRegistry, graph: &Graph, node: u32) -> ValidationOutcome {
        for shape in registry.iter() {
            if !graph.contains(node, RDF_TYPE, shape.target_class()) {
                continue;
            }

            for (constraint_index, constraint) in shape.constraints().iter().enumerate() {
                if !self.evaluate(graph, node, constraint) {
                    return ValidationOutcome::Violation { shape_id: shape.id(), constraint_index };
                }
            }
        }

        ValidationOutcome::Ok
    }

    fn evaluate(&self, graph: &Graph, node: u32, constraint: &Constraint) -> bool {
        match *constraint {
            Constraint::Class(class) => graph.contains(node, RDF_TYPE, class),
            Constraint::MinCount { property, k } => self.count_at_least(graph, node, property, k),
            Constraint::MaxCount { property, k } => !self.count_at_least(graph, node, property, k + 1),
        }
    }

    /// Early-exit scan over `[0, scan_max)`: counts distinct objects `o`
    /// with `(node, property, o)` present, stopping as soon as the count
    /// reaches `k`. Used directly by `MinCount` and, with `k + 1`, to
    /// decide `MaxCount` by its complement.
    fn count_at_least(&self, graph: &Graph, node: u32, property: u32, k: u32) -> bool {
        if k == 0 {
            return true;
        }
        let mut count = 0u32;
        for object in 0..self.scan_max {
            if graph.contains(node, property, object) {
                count += 1;
                if count >= k {
                    return true;
                }
            }
        }
        false
    }
}
