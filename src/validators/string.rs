//! String rules
//!
//! All rules operate on `str`, so schemas evaluate borrowed strings
//! without allocation. Lengths are counted in characters, not bytes.

use regex::Regex;
use url::Url;
use uuid::Uuid;

use crate::schema::Candidate;

use super::Validate;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Comparison mode for string equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    /// Operands are compared exactly.
    Sensitive,
    /// Both operands are case-folded through the same function before
    /// comparison.
    Insensitive,
}

/// Equality against an expected string under a case mode.
pub struct Equals {
    expected: String,
    case: CaseSensitivity,
}

impl Equals {
    pub fn new(expected: impl Into<String>, case: CaseSensitivity) -> Self {
        Self {
            expected: expected.into(),
            case,
        }
    }
}

impl Validate<str> for Equals {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        let Some(value) = candidate.value() else {
            return false;
        };
        match self.case {
            CaseSensitivity::Sensitive => value == self.expected,
            CaseSensitivity::Insensitive => {
                value.to_lowercase() == self.expected.to_lowercase()
            }
        }
    }
}

/// Rejects the empty string.
pub struct NotEmpty;

impl Validate<str> for NotEmpty {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| !v.is_empty())
    }
}

/// Minimum length in characters.
pub struct MinLength {
    limit: usize,
}

impl MinLength {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Validate<str> for MinLength {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| v.chars().count() >= self.limit)
    }
}

/// Maximum length in characters.
pub struct MaxLength {
    limit: usize,
}

impl MaxLength {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Validate<str> for MaxLength {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| v.chars().count() <= self.limit)
    }
}

/// Exact length in characters.
pub struct ExactLength {
    limit: usize,
}

impl ExactLength {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Validate<str> for ExactLength {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| v.chars().count() == self.limit)
    }
}

/// Match against a caller-compiled pattern.
pub struct Matches {
    pattern: Regex,
}

impl Matches {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Validate<str> for Matches {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| self.pattern.is_match(v))
    }
}

/// Substring containment.
pub struct Contains {
    needle: String,
}

impl Contains {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }
}

impl Validate<str> for Contains {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| v.contains(&self.needle))
    }
}

/// Fixed prefix.
pub struct StartsWith {
    prefix: String,
}

impl StartsWith {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Validate<str> for StartsWith {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| v.starts_with(&self.prefix))
    }
}

/// Fixed suffix.
pub struct EndsWith {
    suffix: String,
}

impl EndsWith {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Validate<str> for EndsWith {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| v.ends_with(&self.suffix))
    }
}

/// Membership in a fixed set of allowed values.
pub struct OneOf {
    allowed: Vec<String>,
}

impl OneOf {
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }
}

impl Validate<str> for OneOf {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate
            .value()
            .map_or(false, |v| self.allowed.iter().any(|a| a.as_str() == v))
    }
}

/// Email address shape.
pub struct EmailFormat {
    pattern: Regex,
}

impl EmailFormat {
    pub fn new() -> Self {
        Self {
            // The pattern is a compile-time literal.
            pattern: Regex::new(EMAIL_PATTERN).expect("email pattern compiles"),
        }
    }
}

impl Default for EmailFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate<str> for EmailFormat {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| self.pattern.is_match(v))
    }
}

/// Absolute URL shape.
pub struct UrlFormat;

impl Validate<str> for UrlFormat {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| Url::parse(v).is_ok())
    }
}

/// UUID shape, any variant.
pub struct UuidFormat;

impl Validate<str> for UuidFormat {
    fn is_valid(&self, candidate: Candidate<'_, str>) -> bool {
        candidate.value().map_or(false, |v| Uuid::parse_str(v).is_ok())
    }
}
