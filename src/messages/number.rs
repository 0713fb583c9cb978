//! Default messages for numeric schemas
//!
//! The integer and floating-point categories share one container shape,
//! instantiated per parameter type.

use std::fmt;
use std::sync::Arc;

use super::{Formatter, PairFormatter};

/// Default failure messages for numeric constraints.
#[derive(Clone)]
pub struct NumericMessages<N> {
    pub required: String,
    pub min: Formatter<N>,
    pub max: Formatter<N>,
    pub less_than: Formatter<N>,
    pub greater_than: Formatter<N>,
    pub equals: Formatter<N>,
    pub between: PairFormatter<N>,
    pub multiple_of: Formatter<N>,
    pub positive: String,
    pub negative: String,
    pub any_of: String,
    pub every_of: String,
}

/// Messages for 64-bit integer schemas.
pub type IntMessages = NumericMessages<i64>;

/// Messages for floating-point schemas.
pub type NumberMessages = NumericMessages<f64>;

impl<N> Default for NumericMessages<N>
where
    N: fmt::Display + Send + Sync + 'static,
{
    fn default() -> Self {
        Self {
            required: "is required".into(),
            min: Arc::new(|limit| format!("must be at least {}", limit)),
            max: Arc::new(|limit| format!("must be at most {}", limit)),
            less_than: Arc::new(|limit| format!("must be less than {}", limit)),
            greater_than: Arc::new(|limit| format!("must be greater than {}", limit)),
            equals: Arc::new(|expected| format!("must equal {}", expected)),
            between: Arc::new(|min, max| format!("must be between {} and {}", min, max)),
            multiple_of: Arc::new(|step| format!("must be a multiple of {}", step)),
            positive: "must be positive".into(),
            negative: "must be negative".into(),
            any_of: "does not match any accepted alternative".into(),
            every_of: "does not satisfy every requirement".into(),
        }
    }
}
