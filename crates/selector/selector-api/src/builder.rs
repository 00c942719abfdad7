//! Transform-select forecaster builder.

use selector_core::TransformSelectForecaster;
use selector_spi::{Forecaster, Result, SeriesClassifier};
use tracing::debug;

use crate::SelectorConfig;

/// Builder for a [`TransformSelectForecaster`].
#[derive(Default)]
pub struct TransformSelectBuilder {
    candidates: Vec<(String, Box<dyn Forecaster>)>,
    classifier: Option<Box<dyn SeriesClassifier>>,
    fallback: Option<Box<dyn Forecaster>>,
    config: SelectorConfig,
}

impl TransformSelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Constituent Methods ==========

    /// Register a candidate for a category.
    pub fn candidate(
        self,
        label: impl Into<String>,
        forecaster: impl Forecaster + 'static,
    ) -> Self {
        self.candidate_boxed(label, Box::new(forecaster))
    }

    /// Register an already boxed candidate.
    pub fn candidate_boxed(
        mut self,
        label: impl Into<String>,
        forecaster: Box<dyn Forecaster>,
    ) -> Self {
        self.candidates.push((label.into(), forecaster));
        self
    }

    /// Set the series classifier.
    pub fn classifier(mut self, classifier: impl SeriesClassifier + 'static) -> Self {
        self.classifier = Some(Box::new(classifier));
        self
    }

    /// Set the fallback forecaster.
    pub fn fallback(mut self, forecaster: impl Forecaster + 'static) -> Self {
        self.fallback = Some(Box::new(forecaster));
        self
    }

    // ========== Configuration Methods ==========

    /// Set the configuration of the default classifier.
    pub fn config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    // ========== Build ==========

    /// Labels registered so far, in registration order.
    pub fn labels(&self) -> Vec<&str> {
        self.candidates.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// Build the forecaster.
    ///
    /// Without an explicit classifier the configured ADI/CV² classifier is
    /// used. Duplicate or blank labels fail with `Configuration`.
    pub fn build(self) -> Result<TransformSelectForecaster> {
        let classifier: Box<dyn SeriesClassifier> = match self.classifier {
            Some(classifier) => classifier,
            None => Box::new(self.config.classifier.build()?),
        };
        debug!(
            candidates = self.candidates.len(),
            classifier = classifier.name(),
            "building transform-select forecaster"
        );
        TransformSelectForecaster::new(self.candidates, Some(classifier), self.fallback)
    }
}
