//! Category label observed for a series

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::FeatureValue;

/// Discrete label describing the character of a series, e.g. `"smooth"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Numeric cells such as cluster ids become labels through their display form.
impl From<&FeatureValue> for Category {
    fn from(value: &FeatureValue) -> Self {
        Self(value.to_string())
    }
}
