//! Series classifier trait

use crate::error::Result;
use crate::model::{Exogenous, FeatureTable};

/// Transform that maps a whole series to a table of features.
///
/// A classifier used for forecaster selection stores the category in the
/// first column of the first row of its output.
pub trait SeriesClassifier: Send + Sync {
    /// Fit to `y` and return the features of `y`.
    ///
    /// Every call fits from scratch; no state from a previous call may
    /// influence the result.
    fn fit_transform(&mut self, y: &[f64], x: Option<&Exogenous>) -> Result<FeatureTable>;

    /// Create a boxed copy configured identically to `self` but with no
    /// fitted state.
    fn clone_box(&self) -> Box<dyn SeriesClassifier>;

    /// Human readable name of the classifier
    fn name(&self) -> &str {
        "classifier"
    }
}

impl Clone for Box<dyn SeriesClassifier> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
