//! Boolean schema builder

use crate::messages::BoolMessages;
use crate::schema::{Candidate, Schema, ValidationResult};
use crate::validators::{AnyOf, Constraint, EqualsValue, EveryOf, Predicate, Validate};

/// Fluent builder for boolean schemas.
pub struct BoolSchema {
    node: Schema<bool>,
    messages: BoolMessages,
}

impl BoolSchema {
    /// Creates a schema with the built-in default messages.
    pub fn new() -> Self {
        Self::with_messages(BoolMessages::default())
    }

    /// Creates a schema resolving default messages from the given
    /// container.
    pub fn with_messages(messages: BoolMessages) -> Self {
        let node = Schema::required(messages.required.clone());
        Self { node, messages }
    }

    fn rule(mut self, validator: impl Validate<bool> + 'static, message: String) -> Self {
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

    /// The value must be true.
    pub fn is_true(self) -> Self {
        let message = self.messages.is_true.clone();
        self.rule(EqualsValue::new(true), message)
    }

    /// The value must be false.
    pub fn is_false(self) -> Self {
        let message = self.messages.is_false.clone();
        self.rule(EqualsValue::new(false), message)
    }

    /// Equality against an expected value.
    pub fn equals(self, expected: bool) -> Self {
        let message = (self.messages.equals)(expected);
        self.rule(EqualsValue::new(expected), message)
    }

    /// Custom predicate with an explicit message.
    pub fn refine(
        self,
        check: impl Fn(&bool) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        self.rule(Predicate::new(check), message)
    }

    /// At least one of the alternatives must accept the value.
    pub fn any(self, alternatives: Vec<BoolSchema>) -> Self {
        let message = self.messages.any_of.clone();
        let nodes = alternatives.into_iter().map(BoolSchema::into_node).collect();
        self.rule(AnyOf::new(nodes), message)
    }

    /// Every one of the requirements must accept the value.
    pub fn every(self, requirements: Vec<BoolSchema>) -> Self {
        let message = self.messages.every_of.clone();
        let nodes = requirements.into_iter().map(BoolSchema::into_node).collect();
        self.rule(EveryOf::new(nodes), message)
    }

    /// Evaluates a present value, returning the first failure message.
    pub fn evaluate(&self, value: bool) -> Option<&str> {
        self.node.evaluate_value(&value)
    }

    /// Evaluates `Some` as a present value and `None` as a missing one.
    pub fn evaluate_opt(&self, value: Option<bool>) -> Option<&str> {
        match value {
            Some(v) => self.node.evaluate_value(&v),
            None => self.node.evaluate(Candidate::Missing),
        }
    }

    /// Evaluates an explicit three-state candidate.
    pub fn evaluate_candidate(&self, candidate: Candidate<'_, bool>) -> Option<&str> {
        self.node.evaluate(candidate)
    }

    /// Returns true when the value evaluates without failure.
    pub fn validate(&self, value: bool) -> bool {
        self.node.validate(Candidate::Value(&value))
    }

    /// Result-shaped evaluation for `?`-style call sites.
    pub fn check(&self, value: bool) -> ValidationResult {
        self.node.check(Candidate::Value(&value))
    }

    /// Consumes the builder, yielding the underlying node.
    pub fn into_node(self) -> Schema<bool> {
        self.node
    }

    /// The underlying node.
    pub fn node(&self) -> &Schema<bool> {
        &self.node
    }

    /// The container this builder resolves default messages from.
    pub fn messages(&self) -> &BoolMessages {
        &self.messages
    }
}

impl Default for BoolSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BoolSchema> for Schema<bool> {
    fn from(schema: BoolSchema) -> Self {
        schema.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true_and_is_false() {
        assert!(BoolSchema::new().is_true().validate(true));
        assert_eq!(
            BoolSchema::new().is_true().evaluate(false),
            Some("must be true")
        );
        assert!(BoolSchema::new().is_false().validate(false));
    }

    #[test]
    fn test_required_by_default() {
        let schema = BoolSchema::new();
        assert_eq!(schema.evaluate_opt(None), Some("is required"));
        assert_eq!(schema.evaluate_opt(Some(true)), None);
    }

    #[test]
    fn test_equals() {
        assert_eq!(
            BoolSchema::new().equals(true).evaluate(false),
            Some("must equal true")
        );
    }
}
