//! # latticestore-shacl
//!
//! A bounded SHACL-lite validator over [`latticestore_core::Graph`]s: a
//! [`Shape`] is a target class plus an ordered list of [`Constraint`]s
//! (`Class`, `MinCount`, `MaxCount`); a [`ShapeRegistry`] owns Shapes keyed
//! by unique ID; a [`Validator`] checks a node against every shape whose
//! target class it belongs to and reports the first failing constraint.
//!
//! This is a deliberate subset of SHACL Core — no paths, no inverse
//! properties, no SPARQL-based shapes — traded for a validator whose
//! `MinCount`/`MaxCount` evaluation has a documented worst-case bound
//! ([`DEFAULT_SCAN_MAX`]) instead of scanning an unbounded object ID space.

mod constraint;
mod error;
mod registry;
mod shape;
mod validator;

pub use constraint::Constraint;
pub use error::ShaclError;
pub use registry::{AddConstraintOutcome, DefineOutcome, ShapeRegistry, MAX_CONSTRAINTS_PER_SHAPE};
pub use shape::Shape;
pub use validator::{ValidationOutcome, Validator, DEFAULT_SCAN_MAX};
