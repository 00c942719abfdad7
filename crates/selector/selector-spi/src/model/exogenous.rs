//! Exogenous regressors

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectorError};

/// Named exogenous columns, all of the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExogenousColumns")]
pub struct Exogenous {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

/// Unchecked wire form of [`Exogenous`]
#[derive(Deserialize)]
struct ExogenousColumns {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl TryFrom<ExogenousColumns> for Exogenous {
    type Error = SelectorError;

    fn try_from(raw: ExogenousColumns) -> Result<Self> {
        if raw.names.len() != raw.columns.len() {
            return Err(SelectorError::InvalidParameter {
                name: "x".to_string(),
                reason: format!(
                    "{} column names for {} columns",
                    raw.names.len(),
                    raw.columns.len()
                ),
            });
        }
        raw.names
            .into_iter()
            .zip(raw.columns)
            .try_fold(Exogenous::new(), |x, (name, values)| x.with_column(name, values))
    }
}

impl Exogenous {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column; its length must match the columns already present
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(SelectorError::InvalidParameter {
                name,
                reason: "duplicate exogenous column".to_string(),
            });
        }
        if let Some(first) = self.columns.first() {
            if first.len() != values.len() {
                return Err(SelectorError::InvalidParameter {
                    name,
                    reason: format!("expected {} values, got {}", first.len(), values.len()),
                });
            }
        }
        self.names.push(name);
        self.columns.push(values);
        Ok(self)
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.columns.get(i))
            .map(Vec::as_slice)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows (time points)
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns (variables)
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_column() {
        let x = Exogenous::new()
            .with_column("price", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_column("promo", vec![0.0, 1.0, 0.0])
            .unwrap();

        assert_eq!(x.len(), 3);
        assert_eq!(x.width(), 2);
        assert_eq!(x.column("promo"), Some(&[0.0, 1.0, 0.0][..]));
        assert!(x.column("missing").is_none());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = Exogenous::new()
            .with_column("price", vec![1.0, 2.0])
            .unwrap()
            .with_column("promo", vec![0.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = Exogenous::new()
            .with_column("price", vec![1.0])
            .unwrap()
            .with_column("price", vec![2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_valid() {
        let x: Exogenous =
            serde_json::from_str(r#"{"names":["a","b"],"columns":[[1.0,2.0],[3.0,4.0]]}"#)
                .unwrap();
        assert_eq!(x.width(), 2);
        assert_eq!(x.column("b"), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn test_deserialize_rejects_missing_column() {
        let result =
            serde_json::from_str::<Exogenous>(r#"{"names":["a","b"],"columns":[[1.0]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_ragged_columns() {
        let result = serde_json::from_str::<Exogenous>(
            r#"{"names":["a","b"],"columns":[[1.0,2.0],[3.0]]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let x = Exogenous::new().with_column("price", vec![1.0, 2.0]).unwrap();
        let json = serde_json::to_string(&x).unwrap();
        let parsed: Exogenous = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, x);
    }
}
