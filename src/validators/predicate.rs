//! Custom predicate rule
//!
//! The escape hatch for constraints the built-in vocabulary does not
//! cover. The predicate only ever sees a concrete value; absent candidates
//! fail like any other leaf rule.

use crate::schema::Candidate;

use super::Validate;

/// Wraps a caller-supplied check.
pub struct Predicate<F> {
    check: F,
}

impl<F> Predicate<F> {
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<T, F> Validate<T> for Predicate<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    fn is_valid(&self, candidate: Candidate<'_, T>) -> bool {
        candidate.value().map_or(false, |v| (self.check)(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_runs_against_the_value() {
        let even = Predicate::new(|v: &i64| v % 2 == 0);
        assert!(even.is_valid(Candidate::Value(&4)));
        assert!(!even.is_valid(Candidate::Value(&5)));
    }

    #[test]
    fn test_predicate_fails_on_absence() {
        let always = Predicate::new(|_: &i64| true);
        assert!(!always.is_valid(Candidate::Missing));
        assert!(!always.is_valid(Candidate::Null));
    }

    #[test]
    fn test_predicate_over_unsized_str() {
        let shouty = Predicate::new(|v: &str| v.chars().all(char::is_uppercase));
        assert!(shouty.is_valid(Candidate::Value("ABC")));
        assert!(!shouty.is_valid(Candidate::Value("abc")));
    }
}
