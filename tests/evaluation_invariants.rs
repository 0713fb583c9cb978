//! Evaluation Invariant Tests
//!
//! Tests for the schema node's evaluation algorithm:
//! - Evaluation is deterministic and non-mutating
//! - Constraints run in insertion order; the first failure wins
//! - optional suppresses only the presence requirement
//! - nullable short-circuits before any constraint runs
//! - Explicit messages win over container defaults

use verity::{Candidate, CaseSensitivity};

// =============================================================================
// Determinism
// =============================================================================

/// Repeated evaluation of the same schema and value never changes result.
#[test]
fn test_evaluation_is_deterministic() {
    let schema = verity::integer().min(5).max(10);

    for _ in 0..10 {
        assert_eq!(schema.evaluate(3), Some("must be at least 5"));
        assert_eq!(schema.evaluate(7), None);
        assert_eq!(schema.evaluate(12), Some("must be at most 10"));
    }
}

/// A frozen schema is shareable across threads for read-only evaluation.
#[test]
fn test_frozen_schema_evaluates_concurrently() {
    let schema = verity::integer().min(5).max(10);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for v in 0..20 {
                    assert_eq!(schema.validate(v), (5..=10).contains(&v));
                }
            });
        }
    });
}

// =============================================================================
// Ordering
// =============================================================================

/// Two always-failing constraints surface the first one's message.
#[test]
fn test_first_failure_wins() {
    let schema = verity::integer()
        .refine(|_| false, "A")
        .refine(|_| false, "B");
    assert_eq!(schema.evaluate(1), Some("A"));

    let reversed = verity::integer()
        .refine(|_| false, "B")
        .refine(|_| false, "A");
    assert_eq!(reversed.evaluate(1), Some("B"));
}

/// The documented end-to-end chain: required, min(5), max(10), multiple_of(2).
#[test]
fn test_numeric_chain_end_to_end() {
    let schema = verity::integer().min(5).max(10).multiple_of(2);

    assert_eq!(schema.evaluate(4), Some("must be at least 5"));
    assert_eq!(schema.evaluate(6), None);
    assert_eq!(schema.evaluate(7), Some("must be a multiple of 2"));
}

// =============================================================================
// Required / optional / nullable
// =============================================================================

/// An optional schema tolerates absence but still checks present values.
#[test]
fn test_optional_suppresses_only_required() {
    let schema = verity::string().min_length(5).optional();

    assert_eq!(schema.evaluate_opt(None), None);
    assert_eq!(
        schema.evaluate("ab"),
        Some("must be at least 5 characters long")
    );
}

/// Absence is rejected by default with the required message.
#[test]
fn test_required_by_default() {
    let schema = verity::string().min_length(5);
    assert_eq!(schema.evaluate_opt(None), Some("is required"));
}

/// A nullable schema accepts null before any other constraint runs.
#[test]
fn test_nullable_short_circuits_before_constraints() {
    // The refine rule would panic if it ever saw the null candidate.
    let schema = verity::integer()
        .refine(|_| panic!("constraint ran against null"), "unused")
        .nullable();

    assert_eq!(schema.evaluate_candidate(Candidate::Null), None);
}

/// nullable alone accepts null but not a missing value.
#[test]
fn test_nullable_does_not_imply_optional() {
    let schema = verity::integer().min(5).nullable();

    assert_eq!(schema.evaluate_candidate(Candidate::Null), None);
    assert_eq!(
        schema.evaluate_candidate(Candidate::Missing),
        Some("is required")
    );
}

/// optional alone accepts both absence representations.
#[test]
fn test_optional_accepts_null_and_missing() {
    let schema = verity::integer().min(5).optional();

    assert_eq!(schema.evaluate_candidate(Candidate::Missing), None);
    assert_eq!(schema.evaluate_candidate(Candidate::Null), None);
}

// =============================================================================
// Messages
// =============================================================================

/// An explicit per-call message always beats the container default.
#[test]
fn test_explicit_message_precedence() {
    let schema = verity::integer().min(5).with_message("need at least five");
    assert_eq!(schema.evaluate(4), Some("need at least five"));

    // The default still applies to constraints without an override.
    let partly = verity::integer()
        .min(5)
        .with_message("need at least five")
        .max(10);
    assert_eq!(partly.evaluate(12), Some("must be at most 10"));
}

/// Case-insensitive equality folds both operands.
#[test]
fn test_case_insensitive_equality() {
    let schema = verity::string().equals("password123", CaseSensitivity::Insensitive);

    assert!(schema.validate("PASSWORD123"));
    assert!(!schema.validate("password124"));
}

/// validate and check never diverge from evaluate.
#[test]
fn test_validate_and_check_follow_evaluate() {
    let schema = verity::integer().min(5);

    assert_eq!(schema.validate(4), schema.evaluate(4).is_none());
    assert_eq!(schema.validate(6), schema.evaluate(6).is_none());

    let err = schema.check(4).unwrap_err();
    assert_eq!(Some(err.message()), schema.evaluate(4));
    assert!(schema.check(6).is_ok());
}
