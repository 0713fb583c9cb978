//! Schema node and evaluation algorithm
//!
//! Evaluation order:
//! 1. A null candidate on a nullable node is valid before any constraint runs
//! 2. Constraints run in insertion order; the first failure wins
//! 3. A failing presence requirement on an optional node is suppressed
//!    (the one failure that does not propagate its message)

use crate::validators::{Constraint, Validate};

use super::candidate::Candidate;
use super::errors::{ValidationError, ValidationResult};

/// A configured set of constraints plus optional/nullable flags for one
/// value category, reusable across evaluations.
///
/// Constraints are append-only; repeated constraints of the same kind are
/// all kept and all run. Chaining methods consume and return the node, so
/// construction reads as one fluent expression. Once built, a node is
/// evaluated read-only and may be shared across threads; construction and
/// evaluation must not be interleaved on the same instance.
pub struct Schema<T: ?Sized> {
    /// Insertion order is evaluation order.
    constraints: Vec<Constraint<T>>,
    optional: bool,
    nullable: bool,
}

impl<T: ?Sized> Schema<T> {
    /// Creates an empty node: no constraints, required, non-nullable.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            optional: false,
            nullable: false,
        }
    }

    /// Creates a node with the presence requirement already attached.
    ///
    /// Every typed factory starts from this, so a schema rejects absent
    /// values unless later marked optional or nullable.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new().add(Constraint::required(message))
    }

    /// Appends a constraint and returns the node for chaining.
    pub fn add(mut self, constraint: Constraint<T>) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Appends an ordinary rule with its failure message.
    pub fn rule(self, validator: impl Validate<T> + 'static, message: impl Into<String>) -> Self {
        self.add(Constraint::rule(validator, message))
    }

    /// Tolerates absence: a failing presence requirement is suppressed
    /// instead of reported.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Tolerates null: a null candidate is valid before any constraint runs.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Returns true when absence is tolerated.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns true when null is tolerated.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Number of configured constraints, the presence requirement included.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Replaces the message of the most recently appended constraint.
    pub(crate) fn override_last_message(&mut self, message: String) {
        if let Some(last) = self.constraints.last_mut() {
            last.set_message(message);
        }
    }

    /// Evaluates a candidate, returning the first failure message.
    pub fn evaluate(&self, candidate: Candidate<'_, T>) -> Option<&str> {
        // Null bypasses every constraint on a nullable node.
        if candidate.is_null() && self.nullable {
            return None;
        }

        for constraint in &self.constraints {
            if let Some(message) = constraint.evaluate(candidate) {
                if constraint.is_required() && self.optional {
                    return None;
                }
                return Some(message);
            }
        }

        None
    }

    /// Evaluates a present value.
    pub fn evaluate_value(&self, value: &T) -> Option<&str> {
        self.evaluate(Candidate::Value(value))
    }

    /// Evaluates `Some` as a present value and `None` as a missing one.
    pub fn evaluate_opt(&self, value: Option<&T>) -> Option<&str> {
        self.evaluate(Candidate::from_option(value))
    }

    /// Returns true when the candidate evaluates without failure.
    ///
    /// Derived strictly from [`Schema::evaluate`]; the two never diverge.
    pub fn validate(&self, candidate: Candidate<'_, T>) -> bool {
        self.evaluate(candidate).is_none()
    }

    /// Result-shaped evaluation for `?`-style call sites.
    pub fn check(&self, candidate: Candidate<'_, T>) -> ValidationResult {
        match self.evaluate(candidate) {
            Some(message) => Err(ValidationError::new(message)),
            None => Ok(()),
        }
    }
}

impl<T: ?Sized> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}
