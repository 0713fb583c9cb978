//! Default messages for calendar-date schemas

use std::sync::Arc;

use chrono::NaiveDate;

use super::{Formatter, PairFormatter};

/// Default failure messages for date constraints.
///
/// Dates render in ISO 8601 (`YYYY-MM-DD`).
#[derive(Clone)]
pub struct DateMessages {
    pub required: String,
    pub before: Formatter<NaiveDate>,
    pub after: Formatter<NaiveDate>,
    pub between: PairFormatter<NaiveDate>,
    pub equals: Formatter<NaiveDate>,
    pub any_of: String,
    pub every_of: String,
}

impl Default for DateMessages {
    fn default() -> Self {
        Self {
            required: "is required".into(),
            before: Arc::new(|limit| format!("must be before {}", limit)),
            after: Arc::new(|limit| format!("must be after {}", limit)),
            between: Arc::new(|min, max| format!("must be between {} and {}", min, max)),
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
    fn test_defaults_render_iso_dates() {
        let messages = DateMessages::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!((messages.before)(date), "must be before 2024-03-01");
    }
}
