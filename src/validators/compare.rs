//! Ordering and equality rules
//!
//! Generic over any ordered value category; the numeric and date builders
//! all chain these.

use crate::schema::Candidate;

use super::Validate;

/// Inclusive lower bound.
pub struct Min<T> {
    limit: T,
}

impl<T> Min<T> {
    pub fn new(limit: T) -> Self {
        Self { limit }
    }
}

impl<T> Validate<T> for Min<T>
where
    T: PartialOrd + Send + Sync,
{
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate.value().map_or(false, |v| *v >= self.limit)
    }
}

/// Inclusive upper bound.
pub struct Max<T> {
    limit: T,
}

impl<T> Max<T> {
    pub fn new(limit: T) -> Self {
        Self { limit }
    }
}

impl<T> Validate<T> for Max<T>
where
    T: PartialOrd + Send + Sync,
{
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate.value().map_or(false, |v| *v <= self.limit)
    }
}

/// Strict upper bound.
pub struct LessThan<T> {
    limit: T,
}

impl<T> LessThan<T> {
    pub fn new(limit: T) -> Self {
        Self { limit }
    }
}

impl<T> Validate<T> for LessThan<T>
where
    T: PartialOrd + Send + Sync,
{
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate.value().map_or(false, |v| *v < self.limit)
    }
}

/// Strict lower bound.
pub struct GreaterThan<T> {
    limit: T,
}

impl<T> GreaterThan<T> {
    pub fn new(limit: T) -> Self {
        Self { limit }
    }
}

impl<T> Validate<T> for GreaterThan<T>
where
    T: PartialOrd + Send + Sync,
{
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate.value().map_or(false, |v| *v > self.limit)
    }
}

/// Inclusive range on both ends.
///
/// A range with `min > max` is unsatisfiable; constructing one is a caller
/// error, not an engine fault.
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T> Between<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T> Validate<T> for Between<T>
where
    T: PartialOrd + Send + Sync,
{
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate
            .value()
            .map_or(false, |v| *v >= self.min && *v <= self.max)
    }
}

/// Equality against an expected value.
pub struct EqualsValue<T> {
    expected: T,
}

impl<T> EqualsValue<T> {
    pub fn new(expected: T) -> Self {
        Self { expected }
    }
}

impl<T> Validate<T> for EqualsValue<T>
where
    T: PartialEq + Send + Sync,
{
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate.value().map_or(false, |v| *v == self.expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_is_inclusive() {
        let rule = Min::new(5i64);
        assert!(rule.is_valid(Candidate::Value(&5)));
        assert!(rule.is_valid(Candidate::Value(&6)));
        assert!(!rule.is_valid(Candidate::Value(&4)));
        assert!(!rule.is_valid(Candidate::Missing));
    }

    #[test]
    fn test_max_is_inclusive() {
        let rule = Max::new(10i64);
        assert!(rule.is_valid(Candidate::Value(&10)));
        assert!(!rule.is_valid(Candidate::Value(&11)));
    }

    #[test]
    fn test_strict_bounds() {
        assert!(!LessThan::new(5i64).is_valid(Candidate::Value(&5)));
        assert!(LessThan::new(5i64).is_valid(Candidate::Value(&4)));
        assert!(!GreaterThan::new(5i64).is_valid(Candidate::Value(&5)));
        assert!(GreaterThan::new(5i64).is_valid(Candidate::Value(&6)));
    }

    #[test]
    fn test_between_includes_both_ends() {
        let rule = Between::new(5i64, 10);
        assert!(rule.is_valid(Candidate::Value(&5)));
        assert!(rule.is_valid(Candidate::Value(&10)));
        assert!(!rule.is_valid(Candidate::Value(&4)));
        assert!(!rule.is_valid(Candidate::Value(&11)));
    }

    #[test]
    fn test_inverted_between_is_unsatisfiable() {
        let rule = Between::new(10i64, 5);
        assert!(!rule.is_valid(Candidate::Value(&7)));
    }

    #[test]
    fn test_equals_value() {
        let rule = EqualsValue::new(true);
        assert!(rule.is_valid(Candidate::Value(&true)));
        assert!(!rule.is_valid(Candidate::Value(&false)));
        assert!(!rule.is_valid(Candidate::Null));
    }
}
