//! Schema node subsystem
//!
//! A schema node owns an ordered list of constraints plus two independent
//! flags, `optional` and `nullable`, and implements the evaluation
//! algorithm over a three-state candidate (missing, null, or a value).
//!
//! # Design Principles
//!
//! - Constraints run in insertion order; the first failure wins
//! - Absence is tolerated only through the optional/nullable flags
//! - Evaluation never mutates the node and is deterministic
//! - Build first, freeze, then share read-only across threads

mod candidate;
mod errors;
mod node;

pub use candidate::Candidate;
pub use errors::{ValidationError, ValidationResult};
pub use node::Schema;
