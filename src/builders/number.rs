//! Floating-point schema builder

use crate::messages::NumberMessages;
use crate::schema::{Candidate, Schema, ValidationResult};
use crate::validators::{
    AnyOf, Between, Constraint, EqualsValue, EveryOf, GreaterThan, LessThan, Max, Min, MultipleOf,
    Negative, Positive, Predicate, Validate,
};

/// Fluent builder for floating-point schemas.
pub struct NumberSchema {
    node: Schema<f64>,
    messages: NumberMessages,
}

impl NumberSchema {
    /// Creates a schema with the built-in default messages.
    pub fn new() -> Self {
        Self::with_messages(NumberMessages::default())
    }

    /// Creates a schema resolving default messages from the given
    /// container.
    pub fn with_messages(messages: NumberMessages) -> Self {
        let node = Schema::required(messages.required.clone());
        Self { node, messages }
    }

    fn rule(mut self, validator: impl Validate<f64> + 'static, message: String) -> Self {
        self.node = self.node.add(Constraint::rule(validator, message));
        self
    }

    /// Tolerates an absent value.
    pub fn optional(mut self) -> Self {
        self.node = self.node.optional();
        self
    }

    /// Tolerates a null value.
    pub fn nullable(mut self) -> Self {
        self.node = self.node.nullable();
        self
    }

    /// Replaces the message of the most recently added constraint.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.node.override_last_message(message.into());
        self
    }

    /// Inclusive lower bound.
    pub fn min(self, limit: f64) -> Self {
        let message = (self.messages.min)(limit);
        self.rule(Min::new(limit), message)
    }

    /// Inclusive upper bound.
    pub fn max(self, limit: f64) -> Self {
        let message = (self.messages.max)(limit);
        self.rule(Max::new(limit), message)
    }

    /// Strict upper bound.
    pub fn less_than(self, limit: f64) -> Self {
        let message = (self.messages.less_than)(limit);
        self.rule(LessThan::new(limit), message)
    }

    /// Strict lower bound.
    pub fn greater_than(self, limit: f64) -> Self {
        let message = (self.messages.greater_than)(limit);
        self.rule(GreaterThan::new(limit), message)
    }

    /// Inclusive range on both ends.
    pub fn between(self, min: f64, max: f64) -> Self {
        let message = (self.messages.between)(min, max);
        self.rule(Between::new(min, max), message)
    }

    /// Equality against an expected value.
    pub fn equals(self, expected: f64) -> Self {
        let message = (self.messages.equals)(expected);
        self.rule(EqualsValue::new(expected), message)
    }

    /// Strictly greater than zero.
    pub fn positive(self) -> Self {
        let message = self.messages.positive.clone();
        self.rule(Positive, message)
    }

    /// Strictly less than zero.
    pub fn negative(self) -> Self {
        let message = self.messages.negative.clone();
        self.rule(Negative, message)
    }

    /// Divisibility by a fixed step, within float tolerance.
    pub fn multiple_of(self, step: f64) -> Self {
        let message = (self.messages.multiple_of)(step);
        self.rule(MultipleOf::new(step), message)
    }

    /// Custom predicate with an explicit message.
    pub fn refine(
        self,
        check: impl Fn(&f64) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        self.rule(Predicate::new(check), message)
    }

    /// At least one of the alternatives must accept the value.
    pub fn any(self, alternatives: Vec<NumberSchema>) -> Self {
        let message = self.messages.any_of.clone();
        let nodes = alternatives.into_iter().map(NumberSchema::into_node).collect();
        self.rule(AnyOf::new(nodes), message)
    }

    /// Every one of the requirements must accept the value.
    pub fn every(self, requirements: Vec<NumberSchema>) -> Self {
        let message = self.messages.every_of.clone();
        let nodes = requirements.into_iter().map(NumberSchema::into_node).collect();
        self.rule(EveryOf::new(nodes), message)
    }

    /// Evaluates a present value, returning the first failure message.
    pub fn evaluate(&self, value: f64) -> Option<&str> {
        self.node.evaluate_value(&value)
    }

    /// Evaluates `Some` as a present value and `None` as a missing one.
    pub fn evaluate_opt(&self, value: Option<f64>) -> Option<&str> {
        match value {
            Some(v) => self.node.evaluate_value(&v),
            None => self.node.evaluate(Candidate::Missing),
        }
    }

    /// Evaluates an explicit three-state candidate.
    pub fn evaluate_candidate(&self, candidate: Candidate<'_, f64>) -> Option<&str> {
        self.node.evaluate(candidate)
    }

    /// Returns true when the value evaluates without failure.
    pub fn validate(&self, value: f64) -> bool {
        self.node.validate(Candidate::Value(&value))
    }

    /// Result-shaped evaluation for `?`-style call sites.
    pub fn check(&self, value: f64) -> ValidationResult {
        self.node.check(Candidate::Value(&value))
    }

    /// Consumes the builder, yielding the underlying node.
    pub fn into_node(self) -> Schema<f64> {
        self.node
    }

    /// The underlying node.
    pub fn node(&self) -> &Schema<f64> {
        &self.node
    }

    /// The container this builder resolves default messages from.
    pub fn messages(&self) -> &NumberMessages {
        &self.messages
    }
}

impl Default for NumberSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl From<NumberSchema> for Schema<f64> {
    fn from(schema: NumberSchema) -> Self {
        schema.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let schema = NumberSchema::new().min(0.5).max(1.5);
        assert_eq!(schema.evaluate(0.4), Some("must be at least 0.5"));
        assert_eq!(schema.evaluate(1.0), None);
        assert_eq!(schema.evaluate(1.6), Some("must be at most 1.5"));
    }

    #[test]
    fn test_strict_bounds() {
        let schema = NumberSchema::new().greater_than(0.0).less_than(1.0);
        assert!(!schema.validate(0.0));
        assert!(schema.validate(0.5));
        assert!(!schema.validate(1.0));
    }

    #[test]
    fn test_multiple_of_within_tolerance() {
        let schema = NumberSchema::new().multiple_of(0.1);
        assert!(schema.validate(0.3));
        assert!(!schema.validate(0.35));
    }

    #[test]
    fn test_refine() {
        let schema = NumberSchema::new().refine(|v| v.is_finite(), "must be finite");
        assert_eq!(schema.evaluate(f64::INFINITY), Some("must be finite"));
        assert_eq!(schema.evaluate(1.0), None);
    }
}
