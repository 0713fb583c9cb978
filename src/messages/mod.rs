//! Default failure-message containers
//!
//! One container per value category. Builders resolve every default
//! message from these; no message text lives in builder code. Containers
//! are plain `Clone` data with public fields: copy one and reassign fields
//! to derive a locale- or context-specific set, or load overrides from a
//! catalog file. A container can always produce a default for every
//! constraint kind it exposes; there is no global fallback.

mod boolean;
mod catalog;
mod date;
mod errors;
mod number;
mod string;

pub use boolean::BoolMessages;
pub use catalog::{
    BoolOverrides, DateOverrides, MessageCatalog, NumericOverrides, StringOverrides,
};
pub use date::DateMessages;
pub use errors::{CatalogError, CatalogResult};
pub use number::{IntMessages, NumberMessages, NumericMessages};
pub use string::StringMessages;

use std::sync::Arc;

/// A default message computed from one constraint parameter.
pub type Formatter<P> = Arc<dyn Fn(P) -> String + Send + Sync>;

/// A default message computed from two constraint parameters.
pub type PairFormatter<P> = Arc<dyn Fn(P, P) -> String + Send + Sync>;

/// A default message computed from a string constraint parameter.
pub type StrFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;
