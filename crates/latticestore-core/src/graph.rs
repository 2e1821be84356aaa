//! The Graph: owns the triple arena and the Robin-Hood hash index, and
//! exposes insert / contains / pattern-scan. A Graph is meant to be driven
//! by a single logical writer; concurrent readers are safe only while no
//! writer is active (see the crate-level docs for the full concurrency
//! contract).

use crate::arena::TripleArena;
use crate::counters::GraphStats;
use crate::error::GraphError;
use crate::hash::{next_power_of_two_above, triple_hash, InsertResult, RobinHoodTable};
use crate::simd;
use crate::triple::{Pattern, TermKind, Triple, WILDCARD};
use crate::Counters;

/// Outcome of [`Graph::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Duplicate,
    /// Either the triple arena is at capacity, or Robin-Hood probing
    /// exceeded the table's probe bound despite free triple slots.
    Full,
}

pub struct Graph {
    arena: TripleArena,
    index: RobinHoodTable,
    enable_simd: bool,
    counters: Counters,
}

impl Graph {
    /// Creates a Graph with room for exactly `initial_capacity` triples.
    /// The hash table is sized to the next power of two strictly greater
    /// than `2 * initial_capacity`, keeping sustained load factor <= 0.5.
    /// Neither arena nor table ever grows: running out of room is a
    /// first-class `Full` result, not a silent reallocation, so that arena
    /// indices stored in the hash table stay valid for the Graph's life.
    pub fn create(initial_capacity: usize, enable_simd: bool) -> Self {
        let table_size = next_power_of_two_above(2 * initial_capacity).max(2);
        tracing::info!(
            initial_capacity,
            table_size,
            enable_simd,
            "latticestore_core::Graph::create"
        );
        Graph {
            arena: TripleArena::with_capacity(initial_capacity),
            index: RobinHoodTable::with_size(table_size),
            enable_simd,
            counters: Counters::default(),
        }
    }

    /// Inserts `(subject, predicate, object)`. None of the three may equal
    /// [`WILDCARD`] — that is a contract violation, reported as
    /// `Err(GraphError::WildcardAsId)` without touching state.
    pub fn insert(
        &mut self,
        subject: u32,
        predicate: u32,
        object: u32,
        kind: TermKind,
        graph_id: u16,
    ) -> Result<InsertOutcome, GraphError> {
        if subject == WILDCARD || predicate == WILDCARD || object == WILDCARD {
            return Err(GraphError::WildcardAsId);
        }

        let hash = triple_hash(subject, predicate, object);
        if self.index.lookup(hash, subject, predicate, object, self.arena.as_slice()).is_some() {
            self.counters.record_hit();
            return Ok(InsertOutcome::Duplicate);
        }

        if self.arena.is_full() {
            return Ok(InsertOutcome::Full);
        }

        let triple = Triple::new(subject, predicate, object, kind, graph_id);
        let arena_index = self.arena.push(triple);

        match self.index.insert(hash, arena_index) {
            InsertResult::Inserted => {
                self.counters.record_miss();
                Ok(InsertOutcome::Inserted)
            }
            InsertResult::TableFull => {
                // Roll back: nothing else has observed this arena slot yet.
                self.arena.pop();
                Ok(InsertOutcome::Full)
            }
        }
    }

    /// Exact `(subject, predicate, object)` match — no wildcards accepted.
    pub fn contains(&self, subject: u32, predicate: u32, object: u32) -> bool {
        let hash = triple_hash(subject, predicate, object);
        self.index.lookup(hash, subject, predicate, object, self.arena.as_slice()).is_some()
    }

    /// Fills `out` with up to `out.len()` ascending indices of triples
    /// matching `(subject, predicate, object)`, where any field may be
    /// [`WILDCARD`]. Returns the number of indices written. Read-only:
    /// never touches the hash index, only the arena's sequential storage.
    pub fn find_pattern(&self, subject: u32, predicate: u32, object: u32, out: &mut [u32]) -> usize {
        let pattern = Pattern::new(subject, predicate, object);
        let max_results = out.len();
        simd::find_pattern(self.arena.as_slice(), &pattern, out, max_results, self.enable_simd, &self.counters)
    }

    /// Returns the triple stored at `index`, as handed back by
    /// [`Graph::find_pattern`].
    pub fn get(&self, index: u32) -> &Triple {
        self.arena.get(index)
    }

    /// Hint-only software prefetch for `[start, start + count)` in the
    /// triple arena. No semantic effect.
    pub fn prefetch_range(&self, start: usize, count: usize) {
        self.arena.prefetch_range(start, count);
    }

    pub fn stats(&self) -> GraphStats {
        self.counters.snapshot()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }
}
