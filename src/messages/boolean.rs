//! Default messages for boolean schemas

use std::sync::Arc;

use super::Formatter;

/// Default failure messages for boolean constraints.
#[derive(Clone)]
pub struct BoolMessages {
    pub required: String,
    pub is_true: String,
    pub is_false: String,
    pub equals: Formatter<bool>,
    pub any_of: String,
    pub every_of: String,
}

impl Default for BoolMessages {
    fn default() -> Self {
        Self {
            required: "is required".into(),
            is_true: "must be true".into(),
            is_false: "must be false".into(),
            equals: Arc::new(|expected| format!("must equal {}", expected)),
            any_of: "does not match any accepted alternative".into(),
            every_of: "does not satisfy every requirement".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let messages = BoolMessages::default();
        assert_eq!(messages.is_true, "must be true");
        assert_eq!((messages.equals)(false), "must equal false");
    }
}
