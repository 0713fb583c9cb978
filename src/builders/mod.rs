//! Typed schema builders
//!
//! One fluent builder per value category. Every chaining method follows
//! the same pattern: build the rule from the caller's parameters, resolve
//! its default message from the builder's container, append to the
//! underlying node, and hand the builder back for further chaining.
//! `.with_message` replaces the last resolved message with an explicit
//! one; explicit always wins over the container default.

mod boolean;
mod date;
mod integer;
mod number;
mod string;

pub use boolean::BoolSchema;
pub use date::DateSchema;
pub use integer::IntSchema;
pub use number::NumberSchema;
pub use string::StringSchema;
