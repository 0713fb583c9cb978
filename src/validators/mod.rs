//! Constraint rules
//!
//! A rule is configured once at construction and evaluated as a pure
//! function of the candidate; no rule holds state across evaluations.
//! Rules are stored on a schema node as [`Constraint`] entries together
//! with their resolved failure message, so message precedence is handled
//! in exactly one place.

mod combinators;
mod compare;
mod number;
mod predicate;
mod string;

pub use combinators::{AnyOf, EveryOf};
pub use compare::{Between, EqualsValue, GreaterThan, LessThan, Max, Min};
pub use number::{MultipleOf, Negative, Numeric, Positive};
pub use predicate::Predicate;
pub use string::{
    CaseSensitivity, Contains, EmailFormat, EndsWith, Equals, ExactLength, Matches, MaxLength,
    MinLength, NotEmpty, OneOf, StartsWith, UrlFormat, UuidFormat,
};

use crate::schema::Candidate;

/// A single constraint check.
///
/// Configuration (threshold, pattern, expected value) is captured at
/// construction and immutable thereafter. `Send + Sync` so a frozen schema
/// can be shared across threads.
pub trait Validate<T: ?Sized>: Send + Sync {
    /// Returns true when the candidate satisfies the constraint.
    ///
    /// Leaf rules fail on an absent candidate, since only a concrete value
    /// can satisfy them; combinators pass the candidate through to their
    /// sub-schemas unchanged.
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool;
}

/// A configured entry in a schema node's constraint list.
///
/// The presence requirement is a distinguished variant rather than a
/// runtime type check: the node's evaluator matches on it exhaustively to
/// apply the optional-value rule.
pub enum Constraint<T: ?Sized> {
    /// The implicit "value must be present" requirement.
    Required {
        /// Message returned when the value is absent.
        message: String,
    },
    /// Any other configured rule, with its resolved message.
    Rule {
        validator: Box<dyn Validate<T>>,
        message: String,
    },
}

impl<T: ?Sized> Constraint<T> {
    /// Creates the presence requirement.
    pub fn required(message: impl Into<String>) -> Self {
        Constraint::Required {
            message: message.into(),
        }
    }

    /// Creates an ordinary rule entry.
    pub fn rule(validator: impl Validate<T> + 'static, message: impl Into<String>) -> Self {
        Constraint::Rule {
            validator: Box::new(validator),
            message: message.into(),
        }
    }

    /// Returns true for the presence requirement.
    pub fn is_required(&self) -> bool {
        matches!(self, Constraint::Required { .. })
    }

    /// Runs the constraint, returning the failure message on violation.
    ///
    /// The presence requirement fails on both missing and null candidates.
    pub fn evaluate(&self, candidate: Candidate<'_, T>) -> Option<&str> {
        match self {
            Constraint::Required { message } => {
                if candidate.is_absent() {
                    Some(message)
                } else {
                    None
                }
            }
            Constraint::Rule { validator, message } => {
                if validator.is_valid(candidate) {
                    None
                } else {
                    Some(message)
                }
            }
        }
    }

    /// Returns the configured failure message.
    pub fn message(&self) -> &str {
        match self {
            Constraint::Required { message } => message,
            Constraint::Rule { message, .. } => message,
        }
    }

    /// Replaces the failure message in place.
    pub(crate) fn set_message(&mut self, new_message: String) {
        match self {
            Constraint::Required { message } => *message = new_message,
            Constraint::Rule { message, .. } => *message = new_message,
        }
    }
}
