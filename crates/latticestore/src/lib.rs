//! # latticestore
//!
//! A cache-aligned, in-memory RDF triple store and a bounded SHACL-lite
//! constraint validator, built for latency determinism on cache-resident
//! data rather than for dataset size. Insert, exact lookup, pattern scan,
//! and shape validation are all meant to complete in a handful of CPU
//! cycles.
//!
//! ## Quick start
//!
//! ```rust
//! use latticestore::prelude::*;
//!
//! let mut graph = Graph::create(64, true);
//! graph.insert(1, RDF_TYPE, 100, TermKind::Iri, 0).unwrap();
//! graph.insert(1, 5, 200, TermKind::Iri, 0).unwrap();
//!
//! let mut registry = ShapeRegistry::new();
//! registry.define_shape(1, 100);
//! registry.add_constraint(1, Constraint::MinCount { property: 5, k: 1 }).unwrap();
//!
//! let validator = Validator::new();
//! assert_eq!(validator.validate(&registry, &graph, 1), ValidationOutcome::Ok);
//! ```
//!
//! ## Crates
//!
//! - [`latticestore-core`](latticestore_core): [`Triple`], [`Graph`], the
//!   Robin-Hood hash index, and the batched/SIMD pattern matcher.
//! - [`latticestore-shacl`](latticestore_shacl): [`Shape`], [`ShapeRegistry`],
//!   and [`Validator`].
//!
//! ## Feature flags
//!
//! - `full` (default): both crates.
//! - `core`: just the triple store.
//! - `shacl`: the validator (pulls in `core` as well, since it validates
//!   against a Graph).

#[cfg(feature = "latticestore-core")]
pub use latticestore_core as core;

#[cfg(feature = "latticestore-shacl")]
pub use latticestore_shacl as shacl;

#[cfg(feature = "latticestore-core")]
pub use latticestore_core::{Graph, GraphError, GraphStats, InsertOutcome, Pattern, TermKind, Triple, RDF_TYPE, WILDCARD};

#[cfg(feature = "latticestore-shacl")]
pub use latticestore_shacl::{
    AddConstraintOutcome, Constraint, DefineOutcome, ShaclError, Shape, ShapeRegistry, ValidationOutcome, Validator,
    DEFAULT_SCAN_MAX, MAX_CONSTRAINTS_PER_SHAPE,
};

/// Convenient glob import of the commonly used types from both crates.
///
/// ```rust
/// use latticestore::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "latticestore-core")]
    pub use crate::{Graph, GraphError, GraphStats, InsertOutcome, Pattern, TermKind, Triple, RDF_TYPE, WILDCARD};

    #[cfg(feature = "latticestore-shacl")]
    pub use crate::{
        AddConstraintOutcome, Constraint, DefineOutcome, ShaclError, Shape, ShapeRegistry, ValidationOutcome, Validator,
        DEFAULT_SCAN_MAX, MAX_CONSTRAINTS_PER_SHAPE,
    };
}

/// Current version of this crate, exposed for embedders that want to log
/// or report it without depending on `CARGO_PKG_VERSION` themselves.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
