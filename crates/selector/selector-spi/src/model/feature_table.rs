//! Tabular output produced by series classifiers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectorError};

/// A single cell of a [`FeatureTable`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Label(String),
    Number(f64),
}

impl FeatureValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(value) => Some(*value),
            FeatureValue::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            FeatureValue::Label(label) => Some(label),
            FeatureValue::Number(_) => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Label(label) => f.write_str(label),
            // 2.0 prints as "2"
            FeatureValue::Number(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.0}", value)
            }
            FeatureValue::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(label: &str) -> Self {
        FeatureValue::Label(label.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(label: String) -> Self {
        FeatureValue::Label(label)
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

/// Row-major table of named feature columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<Vec<FeatureValue>>,
}

impl FeatureTable {
    /// Create an empty table with the given column names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// One-cell table, the usual output of a labelling transform
    pub fn single(column: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        Self {
            columns: vec![column.into()],
            rows: vec![vec![value.into()]],
        }
    }

    /// Append a row; its width must match the number of columns
    pub fn push_row(&mut self, row: Vec<FeatureValue>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(SelectorError::InvalidParameter {
                name: "row".to_string(),
                reason: format!(
                    "expected {} values, got {}",
                    self.columns.len(),
                    row.len()
                ),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<FeatureValue>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<&FeatureValue> {
        self.rows.get(row).and_then(|values| values.get(col))
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}
