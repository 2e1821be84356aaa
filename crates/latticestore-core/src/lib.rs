//! # latticestore-core
//!
//! A cache-aligned, in-memory RDF triple store built for latency
//! determinism rather than dataset size: insert, exact lookup, and
//! pattern scan are meant to complete in a handful of CPU cycles on
//! cache-resident data.
//!
//! The three load-bearing pieces are:
//!
//! - [`Triple`] — a 16-byte record, four of which fit a 64-byte cache line.
//! - [`Graph`] — an append-only triple arena plus a Robin-Hood hash index
//!   keyed by `(subject, predicate, object)`.
//! - the batched pattern matcher behind [`Graph::find_pattern`], with a
//!   scalar path and (on x86_64 with AVX2) a SIMD path processing 8
//!   triples per iteration.
//!
//! Identifiers are pre-resolved `u32`s; this crate does not intern
//! strings, parse SPARQL, or persist anything — those are the concern of
//! callers.

mod arena;
mod counters;
mod error;
mod graph;
mod hash;
mod simd;
mod triple;

pub use counters::GraphStats;
pub use error::GraphError;
pub use graph::{Graph, InsertOutcome};
pub use triple::{Pattern, TermKind, Triple, RDF_TYPE, WILDCARD};

#[doc(hidden)]
pub(crate) use counters::Counters;
