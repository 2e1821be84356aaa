//! The three constraint kinds this subset of SHACL supports.

/// A single constraint attached to a [`crate::Shape`].
///
/// `Class`, `MinCount`, and `MaxCount` are the whole vocabulary here — no
/// paths, no inverse properties, no SPARQL-based shapes. See the design
/// notes' Non-goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// `node` must have class `c`, i.e. the graph contains `(node, rdf_type, c)`.
    Class(u32),
    /// At least `k` distinct objects `o` with `(node, p, o)` in the graph.
    MinCount { property: u32, k: u32 },
    /// At most `k` distinct objects `o` with `(node, p, o)` in the graph.
    MaxCount { property: u32, k: u32 },
}
