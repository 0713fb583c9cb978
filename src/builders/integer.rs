//! Integer schema builder

use crate::messages::IntMessages;
use crate::schema::{Candidate, Schema, ValidationResult};
use crate::validators::{
    AnyOf, Between, Constraint, EqualsValue, EveryOf, GreaterThan, LessThan, Max, Min, MultipleOf,
    Negative, Positive, Predicate, Validate,
};

/// Fluent builder for 64-bit integer schemas.
pub struct IntSchema {
    node: Schema<i64>,
    messages: IntMessages,
}

impl IntSchema {
    /// Creates a schema with the built-in default messages.
    pub fn new() -> Self {
        Self::with_messages(IntMessages::default())
    }

    /// Creates a schema resolving default messages from the given
    /// container.
    pub fn with_messages(messages: IntMessages) -> Self {
        let node = Schema::required(messages.required.clone());
        Self { node, messages }
    }

    fn rule(mut self, validator: impl Validate<i64> + 'static, message: String) -> Self {
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
    pub fn min(self, limit: i64) -> Self {
        let message = (self.messages.min)(limit);
        self.rule(Min::new(limit), message)
    }

    /// Inclusive upper bound.
    pub fn max(self, limit: i64) -> Self {
        let message = (self.messages.max)(limit);
        self.rule(Max::new(limit), message)
    }

    /// Strict upper bound.
    pub fn less_than(self, limit: i64) -> Self {
        let message = (self.messages.less_than)(limit);
        self.rule(LessThan::new(limit), message)
    }

    /// Strict lower bound.
    pub fn greater_than(self, limit: i64) -> Self {
        let message = (self.messages.greater_than)(limit);
        self.rule(GreaterThan::new(limit), message)
    }

    /// Inclusive range on both ends.
    pub fn between(self, min: i64, max: i64) -> Self {
        let message = (self.messages.between)(min, max);
        self.rule(Between::new(min, max), message)
    }

    /// Equality against an expected value.
    pub fn equals(self, expected: i64) -> Self {
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

    /// Exact divisibility by a fixed step.
    pub fn multiple_of(self, step: i64) -> Self {
        let message = (self.messages.multiple_of)(step);
        self.rule(MultipleOf::new(step), message)
    }

    /// Custom predicate with an explicit message.
    pub fn refine(
        self,
        check: impl Fn(&i64) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        self.rule(Predicate::new(check), message)
    }

    /// At least one of the alternatives must accept the value.
    pub fn any(self, alternatives: Vec<IntSchema>) -> Self {
        let message = self.messages.any_of.clone();
        let nodes = alternatives.into_iter().map(IntSchema::into_node).collect();
        self.rule(AnyOf::new(nodes), message)
    }

    /// Every one of the requirements must accept the value.
    pub fn every(self, requirements: Vec<IntSchema>) -> Self {
        let message = self.messages.every_of.clone();
        let nodes = requirements.into_iter().map(IntSchema::into_node).collect();
        self.rule(EveryOf::new(nodes), message)
    }

    /// Evaluates a present value, returning the first failure message.
    pub fn evaluate(&self, value: i64) -> Option<&str> {
        self.node.evaluate_value(&value)
    }

    /// Evaluates `Some` as a present value and `None` as a missing one.
    pub fn evaluate_opt(&self, value: Option<i64>) -> Option<&str> {
        match value {
            Some(v) => self.node.evaluate_value(&v),
            None => self.node.evaluate(Candidate::Missing),
        }
    }

    /// Evaluates an explicit three-state candidate.
    pub fn evaluate_candidate(&self, candidate: Candidate<'_, i64>) -> Option<&str> {
        self.node.evaluate(candidate)
    }

    /// Returns true when the value evaluates without failure.
    pub fn validate(&self, value: i64) -> bool {
        self.node.validate(Candidate::Value(&value))
    }

    /// Result-shaped evaluation for `?`-style call sites.
    pub fn check(&self, value: i64) -> ValidationResult {
        self.node.check(Candidate::Value(&value))
    }

    /// Consumes the builder, yielding the underlying node.
    pub fn into_node(self) -> Schema<i64> {
        self.node
    }

    /// The underlying node.
    pub fn node(&self) -> &Schema<i64> {
        &self.node
    }

    /// The container this builder resolves default messages from.
    pub fn messages(&self) -> &IntMessages {
        &self.messages
    }
}

impl Default for IntSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl From<IntSchema> for Schema<i64> {
    fn from(schema: IntSchema) -> Self {
        schema.into_node()
    }
}
