//! String schema builder

use regex::Regex;

use crate::messages::StringMessages;
use crate::schema::{Candidate, Schema, ValidationResult};
use crate::validators::{
    AnyOf, CaseSensitivity, Constraint, Contains, EmailFormat, EndsWith, Equals, EveryOf,
    ExactLength, Matches, MaxLength, MinLength, NotEmpty, OneOf, Predicate, StartsWith, UrlFormat,
    UuidFormat, Validate,
};

/// Fluent builder for string schemas.
///
/// Evaluates borrowed `str` values; the underlying node is `Schema<str>`.
pub struct StringSchema {
    node: Schema<str>,
    messages: StringMessages,
}

impl StringSchema {
    /// Creates a schema with the built-in default messages.
    pub fn new() -> Self {
        Self::with_messages(StringMessages::default())
    }

    /// Creates a schema resolving default messages from the given
    /// container.
    pub fn with_messages(messages: StringMessages) -> Self {
        let node = Schema::required(messages.required.clone());
        Self { node, messages }
    }

    fn rule(mut self, validator: impl Validate<str> + 'static, message: String) -> Self {
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

    /// Rejects the empty string.
    pub fn not_empty(self) -> Self {
        let message = self.messages.not_empty.clone();
        self.rule(NotEmpty, message)
    }

    /// Minimum length, counted in characters.
    pub fn min_length(self, limit: usize) -> Self {
        let message = (self.messages.min_length)(limit);
        self.rule(MinLength::new(limit), message)
    }

    /// Maximum length, counted in characters.
    pub fn max_length(self, limit: usize) -> Self {
        let message = (self.messages.max_length)(limit);
        self.rule(MaxLength::new(limit), message)
    }

    /// Exact length, counted in characters.
    pub fn length(self, limit: usize) -> Self {
        let message = (self.messages.exact_length)(limit);
        self.rule(ExactLength::new(limit), message)
    }

    /// Equality against an expected string under the given case mode.
    pub fn equals(self, expected: impl Into<String>, case: CaseSensitivity) -> Self {
        let expected = expected.into();
        let message = (self.messages.equals)(&expected);
        self.rule(Equals::new(expected, case), message)
    }

    /// The value must match a caller-compiled pattern.
    pub fn matches(self, pattern: Regex) -> Self {
        let message = self.messages.matches.clone();
        self.rule(Matches::new(pattern), message)
    }

    /// The value must contain the given substring.
    pub fn contains(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let message = (self.messages.contains)(&needle);
        self.rule(Contains::new(needle), message)
    }

    /// The value must start with the given prefix.
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let message = (self.messages.starts_with)(&prefix);
        self.rule(StartsWith::new(prefix), message)
    }

    /// The value must end with the given suffix.
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let message = (self.messages.ends_with)(&suffix);
        self.rule(EndsWith::new(suffix), message)
    }

    /// Membership in a fixed set of allowed values.
    pub fn one_of<I, S>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let message = (self.messages.one_of)(&allowed.join(", "));
        self.rule(OneOf::new(allowed), message)
    }

    /// The value must look like an email address.
    pub fn email(self) -> Self {
        let message = self.messages.email.clone();
        self.rule(EmailFormat::new(), message)
    }

    /// The value must parse as an absolute URL.
    pub fn url(self) -> Self {
        let message = self.messages.url.clone();
        self.rule(UrlFormat, message)
    }

    /// The value must parse as a UUID.
    pub fn uuid(self) -> Self {
        let message = self.messages.uuid.clone();
        self.rule(UuidFormat, message)
    }

    /// Custom predicate with an explicit message.
    pub fn refine(
        self,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        self.rule(Predicate::new(check), message)
    }

    /// At least one of the alternatives must accept the value.
    pub fn any(self, alternatives: Vec<StringSchema>) -> Self {
        let message = self.messages.any_of.clone();
        let nodes = alternatives.into_iter().map(StringSchema::into_node).collect();
        self.rule(AnyOf::new(nodes), message)
    }

    /// Every one of the requirements must accept the value.
    pub fn every(self, requirements: Vec<StringSchema>) -> Self {
        let message = self.messages.every_of.clone();
        let nodes = requirements.into_iter().map(StringSchema::into_node).collect();
        self.rule(EveryOf::new(nodes), message)
    }

    /// Evaluates a present value, returning the first failure message.
    pub fn evaluate(&self, value: &str) -> Option<&str> {
        self.node.evaluate_value(value)
    }

    /// Evaluates `Some` as a present value and `None` as a missing one.
    pub fn evaluate_opt(&self, value: Option<&str>) -> Option<&str> {
        self.node.evaluate_opt(value)
    }

    /// Evaluates an explicit three-state candidate.
    pub fn evaluate_candidate(&self, candidate: Candidate<'_, str>) -> Option<&str> {
        self.node.evaluate(candidate)
    }

    /// Returns true when the value evaluates without failure.
    pub fn validate(&self, value: &str) -> bool {
        self.node.validate(Candidate::Value(value))
    }

    /// Result-shaped evaluation for `?`-style call sites.
    pub fn check(&self, value: &str) -> ValidationResult {
        self.node.check(Candidate::Value(value))
    }

    /// Consumes the builder, yielding the underlying node.
    pub fn into_node(self) -> Schema<str> {
        self.node
    }

    /// The underlying node.
    pub fn node(&self) -> &Schema<str> {
        &self.node
    }

    /// The container this builder resolves default messages from.
    pub fn messages(&self) -> &StringMessages {
        &self.messages
    }
}

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl From<StringSchema> for Schema<str> {
    fn from(schema: StringSchema) -> Self {
        schema.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_constraints_run_in_declaration_order() {
        let schema = StringSchema::new().min_length(3).max_length(5);
        assert_eq!(schema.evaluate("ab"), Some("must be at least 3 characters long"));
        assert_eq!(schema.evaluate("abcdef"), Some("must be at most 5 characters long"));
        assert_eq!(schema.evaluate("abcd"), None);
    }

    #[test]
    fn test_explicit_message_wins_over_container_default() {
        let schema = StringSchema::new()
            .min_length(3)
            .with_message("too short, sorry");
        assert_eq!(schema.evaluate("ab"), Some("too short, sorry"));
    }

    #[test]
    fn test_case_insensitive_equality() {
        let schema = StringSchema::new().equals("password123", CaseSensitivity::Insensitive);
        assert!(schema.validate("PASSWORD123"));
        assert!(!schema.validate("password124"));
    }

    #[test]
    fn test_optional_string_accepts_absence_but_still_checks_values() {
        let schema = StringSchema::new().min_length(5).optional();
        assert_eq!(schema.evaluate_opt(None), None);
        assert_eq!(schema.evaluate("ab"), Some("must be at least 5 characters long"));
    }

    #[test]
    fn test_format_rules() {
        assert!(StringSchema::new().email().validate("alice@example.com"));
        assert!(!StringSchema::new().email().validate("nope"));
        assert!(StringSchema::new().url().validate("https://example.com"));
        assert!(StringSchema::new()
            .uuid()
            .validate("67e55044-10b1-426f-9247-bb680e5fe0c8"));
    }

    #[test]
    fn test_refine_uses_the_callers_message() {
        let schema = StringSchema::new().refine(|v| v.len() % 2 == 0, "must have even length");
        assert_eq!(schema.evaluate("abc"), Some("must have even length"));
        assert_eq!(schema.evaluate("abcd"), None);
    }

    #[test]
    fn test_check_round_trips_the_message() {
        let schema = StringSchema::new().not_empty();
        let err = schema.check("").unwrap_err();
        assert_eq!(err.message(), "must not be empty");
        assert!(schema.check("x").is_ok());
    }
}
