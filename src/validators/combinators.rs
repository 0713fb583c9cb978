//! Schema combinators
//!
//! Combinators wrap whole sub-schemas and run them against the same
//! candidate. Individual sub-schema failure reasons are discarded: the
//! owning constraint's single message is the only signal surfaced, so a
//! combinator presents one logical constraint to the caller.

use crate::schema::{Candidate, Schema};

use super::Validate;

/// Disjunction: valid when at least one sub-schema accepts the candidate.
pub struct AnyOf<T: ?Sized> {
    alternatives: Vec<Schema<T>>,
}

impl<T: ?Sized> AnyOf<T> {
    pub fn new(alternatives: Vec<Schema<T>>) -> Self {
        Self { alternatives }
    }
}

impl<T: ?Sized> Validate<T> for AnyOf<T> {
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        // An empty disjunction has no alternative that could accept.
        if self.alternatives.is_empty() {
            return false;
        }
        self.alternatives
            .iter()
            .any(|schema| schema.evaluate(candidate).is_none())
    }
}

/// Conjunction: valid when every sub-schema accepts the candidate.
pub struct EveryOf<T: ?Sized> {
    requirements: Vec<Schema<T>>,
}

impl<T: ?Sized> EveryOf<T> {
    pub fn new(requirements: Vec<Schema<T>>) -> Self {
        Self { requirements }
    }
}

impl<T: ?Sized> Validate<T> for EveryOf<T> {
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        // An empty conjunction is vacuously satisfied.
        if self.requirements.is_empty() {
            return true;
        }
        self.requirements
            .iter()
            .all(|schema| schema.evaluate(candidate).is_none())
    }
}
