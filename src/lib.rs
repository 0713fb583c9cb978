//! verity - A strict, composable value-validation library
//!
//! Schemas are built once through fluent constraint chains and then
//! evaluated any number of times against candidate values. Evaluation is
//! synchronous, deterministic and side-effect free: it returns the first
//! failing constraint's message, or nothing when the value is accepted.
//!
//! ```
//! use verity::CaseSensitivity;
//!
//! let quantity = verity::integer().min(5).max(10).multiple_of(2);
//! assert!(quantity.validate(6));
//! assert_eq!(quantity.evaluate(4), Some("must be at least 5"));
//!
//! let role = verity::string().equals("admin", CaseSensitivity::Insensitive);
//! assert!(role.validate("ADMIN"));
//! ```

pub mod builders;
pub mod messages;
pub mod schema;
pub mod validators;

pub use builders::{BoolSchema, DateSchema, IntSchema, NumberSchema, StringSchema};
pub use schema::{Candidate, Schema, ValidationError, ValidationResult};
pub use validators::CaseSensitivity;

/// Creates a string schema with the default message set.
pub fn string() -> StringSchema {
    StringSchema::new()
}

/// Creates a 64-bit integer schema with the default message set.
pub fn integer() -> IntSchema {
    IntSchema::new()
}

/// Creates a floating-point schema with the default message set.
pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// Creates a boolean schema with the default message set.
pub fn boolean() -> BoolSchema {
    BoolSchema::new()
}

/// Creates a calendar-date schema with the default message set.
pub fn date() -> DateSchema {
    DateSchema::new()
}
