//! Message catalog loading
//!
//! A catalog is a JSON file of per-category message overrides, applied on
//! top of the built-in defaults to derive locale- or context-specific
//! containers. Override templates may reference the constraint parameters
//! through `{value}`, `{min}` and `{max}` placeholders. Kinds left unset
//! keep their defaults; the originals are never mutated.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::{CatalogError, CatalogResult};
use super::{
    BoolMessages, DateMessages, Formatter, IntMessages, NumberMessages, NumericMessages,
    PairFormatter, StrFormatter, StringMessages,
};

/// Per-category message overrides loaded from a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageCatalog {
    pub string: StringOverrides,
    pub int: NumericOverrides,
    pub number: NumericOverrides,
    pub boolean: BoolOverrides,
    pub date: DateOverrides,
}

impl MessageCatalog {
    /// Loads a catalog from a JSON file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Derives a string container: defaults overlaid with this catalog.
    pub fn string_messages(&self) -> StringMessages {
        self.string.apply(StringMessages::default())
    }

    /// Derives an integer container.
    pub fn int_messages(&self) -> IntMessages {
        self.int.apply(IntMessages::default())
    }

    /// Derives a floating-point container.
    pub fn number_messages(&self) -> NumberMessages {
        self.number.apply(NumberMessages::default())
    }

    /// Derives a boolean container.
    pub fn boolean_messages(&self) -> BoolMessages {
        self.boolean.apply(BoolMessages::default())
    }

    /// Derives a date container.
    pub fn date_messages(&self) -> DateMessages {
        self.date.apply(DateMessages::default())
    }
}

/// Renders a `{value}` template against one parameter.
fn template<P>(text: String) -> Formatter<P>
where
    P: fmt::Display + 'static,
{
    Arc::new(move |value| text.replace("{value}", &value.to_string()))
}

/// Renders a `{min}`/`{max}` template against two parameters.
fn pair_template<P>(text: String) -> PairFormatter<P>
where
    P: fmt::Display + 'static,
{
    Arc::new(move |min, max| {
        text.replace("{min}", &min.to_string())
            .replace("{max}", &max.to_string())
    })
}

/// Renders a `{value}` template against a string parameter.
fn str_template(text: String) -> StrFormatter {
    Arc::new(move |value| text.replace("{value}", value))
}

/// String-category overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StringOverrides {
    pub required: Option<String>,
    pub not_empty: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub exact_length: Option<String>,
    pub equals: Option<String>,
    pub contains: Option<String>,
    pub starts_with: Option<String>,
    pub ends_with: Option<String>,
    pub one_of: Option<String>,
    pub matches: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub uuid: Option<String>,
    pub any_of: Option<String>,
    pub every_of: Option<String>,
}

impl StringOverrides {
    /// Overlays the overrides on a base container.
    pub fn apply(&self, mut base: StringMessages) -> StringMessages {
        if let Some(m) = &self.required {
            base.required = m.clone();
        }
        if let Some(m) = &self.not_empty {
            base.not_empty = m.clone();
        }
        if let Some(m) = &self.min_length {
            base.min_length = template(m.clone());
        }
        if let Some(m) = &self.max_length {
            base.max_length = template(m.clone());
        }
        if let Some(m) = &self.exact_length {
            base.exact_length = template(m.clone());
        }
        if let Some(m) = &self.equals {
            base.equals = str_template(m.clone());
        }
        if let Some(m) = &self.contains {
            base.contains = str_template(m.clone());
        }
        if let Some(m) = &self.starts_with {
            base.starts_with = str_template(m.clone());
        }
        if let Some(m) = &self.ends_with {
            base.ends_with = str_template(m.clone());
        }
        if let Some(m) = &self.one_of {
            base.one_of = str_template(m.clone());
        }
        if let Some(m) = &self.matches {
            base.matches = m.clone();
        }
        if let Some(m) = &self.email {
            base.email = m.clone();
        }
        if let Some(m) = &self.url {
            base.url = m.clone();
        }
        if let Some(m) = &self.uuid {
            base.uuid = m.clone();
        }
        if let Some(m) = &self.any_of {
            base.any_of = m.clone();
        }
        if let Some(m) = &self.every_of {
            base.every_of = m.clone();
        }
        base
    }
}

/// Numeric-category overrides, shared by the integer and floating-point
/// categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericOverrides {
    pub required: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub less_than: Option<String>,
    pub greater_than: Option<String>,
    pub equals: Option<String>,
    pub between: Option<String>,
    pub multiple_of: Option<String>,
    pub positive: Option<String>,
    pub negative: Option<String>,
    pub any_of: Option<String>,
    pub every_of: Option<String>,
}

impl NumericOverrides {
    /// Overlays the overrides on a base container.
    pub fn apply<N>(&self, mut base: NumericMessages<N>) -> NumericMessages<N>
    where
        N: fmt::Display + Send + Sync + 'static,
    {
        if let Some(m) = &self.required {
            base.required = m.clone();
        }
        if let Some(m) = &self.min {
            base.min = template(m.clone());
        }
        if let Some(m) = &self.max {
            base.max = template(m.clone());
        }
        if let Some(m) = &self.less_than {
            base.less_than = template(m.clone());
        }
        if let Some(m) = &self.greater_than {
            base.greater_than = template(m.clone());
        }
        if let Some(m) = &self.equals {
            base.equals = template(m.clone());
        }
        if let Some(m) = &self.between {
            base.between = pair_template(m.clone());
        }
        if let Some(m) = &self.multiple_of {
            base.multiple_of = template(m.clone());
        }
        if let Some(m) = &self.positive {
            base.positive = m.clone();
        }
        if let Some(m) = &self.negative {
            base.negative = m.clone();
        }
        if let Some(m) = &self.any_of {
            base.any_of = m.clone();
        }
        if let Some(m) = &self.every_of {
            base.every_of = m.clone();
        }
        base
    }
}

/// Boolean-category overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolOverrides {
    pub required: Option<String>,
    pub is_true: Option<String>,
    pub is_false: Option<String>,
    pub equals: Option<String>,
    pub any_of: Option<String>,
    pub every_of: Option<String>,
}

impl BoolOverrides {
    /// Overlays the overrides on a base container.
    pub fn apply(&self, mut base: BoolMessages) -> BoolMessages {
        if let Some(m) = &self.required {
            base.required = m.clone();
        }
        if let Some(m) = &self.is_true {
            base.is_true = m.clone();
        }
        if let Some(m) = &self.is_false {
            base.is_false = m.clone();
        }
        if let Some(m) = &self.equals {
            base.equals = template(m.clone());
        }
        if let Some(m) = &self.any_of {
            base.any_of = m.clone();
        }
        if let Some(m) = &self.every_of {
            base.every_of = m.clone();
        }
        base
    }
}

/// Date-category overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOverrides {
    pub required: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub between: Option<String>,
    pub equals: Option<String>,
    pub any_of: Option<String>,
    pub every_of: Option<String>,
}

impl DateOverrides {
    /// Overlays the overrides on a base container.
    pub fn apply(&self, mut base: DateMessages) -> DateMessages {
        if let Some(m) = &self.required {
            base.required = m.clone();
        }
        if let Some(m) = &self.before {
            base.before = template::<NaiveDate>(m.clone());
        }
        if let Some(m) = &self.after {
            base.after = template::<NaiveDate>(m.clone());
        }
        if let Some(m) = &self.between {
            base.between = pair_template::<NaiveDate>(m.clone());
        }
        if let Some(m) = &self.equals {
            base.equals = template::<NaiveDate>(m.clone());
        }
        if let Some(m) = &self.any_of {
            base.any_of = m.clone();
        }
        if let Some(m) = &self.every_of {
            base.every_of = m.clone();
        }
        base
    }
}
