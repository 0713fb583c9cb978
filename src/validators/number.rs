//! Numeric-only rules
//!
//! Sign and divisibility checks shared by the integer and floating-point
//! categories.

use crate::schema::Candidate;

use super::Validate;

/// Numeric behavior needed by the sign and divisibility rules.
pub trait Numeric: Copy + PartialOrd + Send + Sync {
    /// Additive identity.
    const ZERO: Self;

    /// Returns true when `self` is an exact multiple of `step`.
    fn is_multiple_of(self, step: Self) -> bool;
}

impl Numeric for i64 {
    const ZERO: Self = 0;

    fn is_multiple_of(self, step: Self) -> bool {
        // checked_rem rejects a zero step and the i64::MIN % -1 overflow.
        self.checked_rem(step).map_or(false, |r| r == 0)
    }
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;

    fn is_multiple_of(self, step: Self) -> bool {
        if step == 0.0 {
            return false;
        }
        let remainder = (self % step).abs();
        // Tolerate float rounding on either side of the step boundary.
        remainder < 1e-9 || (step.abs() - remainder) < 1e-9
    }
}

/// Strictly greater than zero.
pub struct Positive;

impl<T: Numeric> Validate<T> for Positive {
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate.value().map_or(false, |v| *v > T::ZERO)
    }
}

/// Strictly less than zero.
pub struct Negative;

impl<T: Numeric> Validate<T> for Negative {
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate.value().map_or(false, |v| *v < T::ZERO)
    }
}

/// Exact divisibility by a fixed step.
pub struct MultipleOf<T> {
    step: T,
}

impl<T> MultipleOf<T> {
    pub fn new(step: T) -> Self {
        Self { step }
    }
}

impl<T: Numeric> Validate<T> for MultipleOf<T> {
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate.value().map_or(false, |v| v.is_multiple_of(self.step))
    }
}
