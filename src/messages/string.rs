//! Default messages for string schemas

use std::sync::Arc;

use super::{Formatter, StrFormatter};

/// Default failure messages for string constraints.
#[derive(Clone)]
pub struct StringMessages {
    pub required: String,
    pub not_empty: String,
    pub min_length: Formatter<usize>,
    pub max_length: Formatter<usize>,
    pub exact_length: Formatter<usize>,
    pub equals: StrFormatter,
    pub contains: StrFormatter,
    pub starts_with: StrFormatter,
    pub ends_with: StrFormatter,
    /// Receives the allowed values joined with ", ".
    pub one_of: StrFormatter,
    pub matches: String,
    pub email: String,
    pub url: String,
    pub uuid: String,
    /// No alternative in an `any` chain accepted the value.
    pub any_of: String,
    /// A requirement in an `every` chain rejected the value.
    pub every_of: String,
}

impl Default for StringMessages {
    fn default() -> Self {
        Self {
            required: "is required".into(),
            not_empty: "must not be empty".into(),
            min_length: Arc::new(|limit| format!("must be at least {} characters long", limit)),
            max_length: Arc::new(|limit| format!("must be at most {} characters long", limit)),
            exact_length: Arc::new(|limit| format!("must be exactly {} characters long", limit)),
            equals: Arc::new(|expected| format!("must equal '{}'", expected)),
            contains: Arc::new(|needle| format!("must contain '{}'", needle)),
            starts_with: Arc::new(|prefix| format!("must start with '{}'", prefix)),
            ends_with: Arc::new(|suffix| format!("must end with '{}'", suffix)),
            one_of: Arc::new(|allowed| format!("must be one of: {}", allowed)),
            matches: "has an invalid format".into(),
            email: "must be a valid email address".into(),
            url: "must be a valid URL".into(),
            uuid: "must be a valid UUID".into(),
            any_of: "does not match any accepted alternative".into(),
            every_of: "does not satisfy every requirement".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_kind() {
        let messages = StringMessages::default();
        assert_eq!(messages.required, "is required");
        assert_eq!(
            (messages.min_length)(3),
            "must be at least 3 characters long"
        );
        assert_eq!((messages.equals)("x"), "must equal 'x'");
    }

    #[test]
    fn test_copy_with_overrides_leaves_the_original_untouched() {
        let base = StringMessages::default();
        let mut derived = base.clone();
        derived.required = "requis".into();
        derived.min_length = Arc::new(|limit| format!("au moins {} caractères", limit));

        assert_eq!(base.required, "is required");
        assert_eq!(derived.required, "requis");
        assert_eq!((derived.min_length)(2), "au moins 2 caractères");
        assert_eq!((base.min_length)(2), "must be at least 2 characters long");
    }
}
