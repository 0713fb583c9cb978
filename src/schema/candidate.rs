//! Candidate values presented for evaluation
//!
//! Evaluation distinguishes two representations of absence: a value slot
//! that holds null, and a value that was never supplied at all. The
//! `nullable` flag guards the former, the `optional` flag the latter.

use std::fmt;

/// A candidate value handed to a schema for evaluation.
pub enum Candidate<'a, T: ?Sized> {
    /// No value was supplied at all.
    Missing,
    /// A value slot exists but holds null.
    Null,
    /// A concrete value.
    Value(&'a T),
}

impl<'a, T: ?Sized> Candidate<'a, T> {
    /// Maps `Some` to a concrete value and `None` to a missing one.
    pub fn from_option(value: Option<&'a T>) -> Self {
        match value {
            Some(v) => Candidate::Value(v),
            None => Candidate::Missing,
        }
    }

    /// Returns the concrete value, if one is present.
    pub fn value(&self) -> Option<&'a T> {
        match self {
            Candidate::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true when no concrete value is present.
    pub fn is_absent(&self) -> bool {
        !matches!(self, Candidate::Value(_))
    }

    /// Returns true for a present-but-null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Candidate::Null)
    }
}

impl<'a, T: ?Sized> From<Option<&'a T>> for Candidate<'a, T> {
    fn from(value: Option<&'a T>) -> Self {
        Candidate::from_option(value)
    }
}

impl<'a, T: ?Sized> From<&'a T> for Candidate<'a, T> {
    fn from(value: &'a T) -> Self {
        Candidate::Value(value)
    }
}

impl<T: ?Sized> Clone for Candidate<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Candidate<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Candidate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Missing => write!(f, "Missing"),
            Candidate::Null => write!(f, "Null"),
            Candidate::Value(v) => write!(f, "Value({:?})", v),
        }
    }
}
