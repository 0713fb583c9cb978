//! Calendar-date schema builder

use chrono::NaiveDate;

use crate::messages::DateMessages;
use crate::schema::{Candidate, Schema, ValidationResult};
use crate::validators::{
    AnyOf, Between, Constraint, EqualsValue, EveryOf, GreaterThan, LessThan, Predicate, Validate,
};

/// Fluent builder for calendar-date schemas.
pub struct DateSchema {
    node: Schema<NaiveDate>,
    messages: DateMessages,
}

impl DateSchema {
    /// Creates a schema with the built-in default messages.
    pub fn new() -> Self {
        Self::with_messages(DateMessages::default())
    }

    /// Creates a schema resolving default messages from the given
    /// container.
    pub fn with_messages(messages: DateMessages) -> Self {
        let node = Schema::required(messages.required.clone());
        Self { node, messages }
    }

    fn rule(mut self, validator: impl Validate<NaiveDate> + 'static, message: String) -> Self {
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

    /// Strictly before the given date.
    pub fn before(self, limit: NaiveDate) -> Self {
        let message = (self.messages.before)(limit);
        self.rule(LessThan::new(limit), message)
    }

    /// Strictly after the given date.
    pub fn after(self, limit: NaiveDate) -> Self {
        let message = (self.messages.after)(limit);
        self.rule(GreaterThan::new(limit), message)
    }

    /// Inclusive range on both ends.
    pub fn between(self, min: NaiveDate, max: NaiveDate) -> Self {
        let message = (self.messages.between)(min, max);
        self.rule(Between::new(min, max), message)
    }

    /// Equality against an expected date.
    pub fn equals(self, expected: NaiveDate) -> Self {
        let message = (self.messages.equals)(expected);
        self.rule(EqualsValue::new(expected), message)
    }

    /// Custom predicate with an explicit message.
    pub fn refine(
        self,
        check: impl Fn(&NaiveDate) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        self.rule(Predicate::new(check), message)
    }

    /// At least one of the alternatives must accept the value.
    pub fn any(self, alternatives: Vec<DateSchema>) -> Self {
        let message = self.messages.any_of.clone();
        let nodes = alternatives.into_iter().map(DateSchema::into_node).collect();
        self.rule(AnyOf::new(nodes), message)
    }

    /// Every one of the requirements must accept the value.
    pub fn every(self, requirements: Vec<DateSchema>) -> Self {
        let message = self.messages.every_of.clone();
        let nodes = requirements.into_iter().map(DateSchema::into_node).collect();
        self.rule(EveryOf::new(nodes), message)
    }

    /// Evaluates a present value, returning the first failure message.
    pub fn evaluate(&self, value: NaiveDate) -> Option<&str> {
        self.node.evaluate_value(&value)
    }

    /// Evaluates `Some` as a present value and `None` as a missing one.
    pub fn evaluate_opt(&self, value: Option<NaiveDate>) -> Option<&str> {
        match value {
            Some(v) => self.node.evaluate_value(&v),
            None => self.node.evaluate(Candidate::Missing),
        }
    }

    /// Evaluates an explicit three-state candidate.
    pub fn evaluate_candidate(&self, candidate: Candidate<'_, NaiveDate>) -> Option<&str> {
        self.node.evaluate(candidate)
    }

    /// Returns true when the value evaluates without failure.
    pub fn validate(&self, value: NaiveDate) -> bool {
        self.node.validate(Candidate::Value(&value))
    }

    /// Result-shaped evaluation for `?`-style call sites.
    pub fn check(&self, value: NaiveDate) -> ValidationResult {
        self.node.check(Candidate::Value(&value))
    }

    /// Consumes the builder, yielding the underlying node.
    pub fn into_node(self) -> Schema<NaiveDate> {
        self.node
    }

    /// The underlying node.
    pub fn node(&self) -> &Schema<NaiveDate> {
        &self.node
    }

    /// The container this builder resolves default messages from.
    pub fn messages(&self) -> &DateMessages {
        &self.messages
    }
}

impl Default for DateSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl From<DateSchema> for Schema<NaiveDate> {
    fn from(schema: DateSchema) -> Self {
        schema.into_node()
    }
}
