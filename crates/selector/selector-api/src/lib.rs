//! Selector Consumer API
//!
//! Consumer configurations and builder APIs for transform-select forecasting.
//!
//! This crate provides:
//! - Configuration types for the default ADI/CV² classifier
//! - A builder for assembling a transform-select forecaster
//! - Re-exports from SPI and core for convenience

mod builder;

pub use builder::TransformSelectBuilder;

// Re-export from core
pub use selector_core::{
    aggregate_capabilities, aggregation_rule, AdiCvClassifier, AdiCvFeature, AggregationRule,
    ClassifierAdapter, DemandClass, DemandStatistics, ModelSlot, Router, Selection, Step,
    TransformSelectForecaster, ALL_REQUIRED, ANY_TRIGGERS, DEFAULT_ADI_THRESHOLD,
    DEFAULT_CV2_THRESHOLD,
};

// Re-export traits from SPI
pub use selector_spi::{
    Capability, CapabilitySet, Category, Exogenous, FeatureTable, FeatureValue, ForecastHorizon,
    Forecaster, IntervalForecast, PredictionInterval, PredictiveDistribution, Result,
    SelectorError, SeriesClassifier, VarianceForecast,
};

use serde::{Deserialize, Serialize};

/// Configuration for the ADI/CV² demand classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdiCvConfig {
    /// Average demand interval above which demand is intermittent
    pub adi_threshold: f64,
    /// Squared coefficient of variation above which demand sizes are variable
    pub cv2_threshold: f64,
    /// Features emitted, in column order
    pub features: Vec<AdiCvFeature>,
}

impl Default for AdiCvConfig {
    fn default() -> Self {
        Self {
            adi_threshold: DEFAULT_ADI_THRESHOLD,
            cv2_threshold: DEFAULT_CV2_THRESHOLD,
            features: vec![AdiCvFeature::Class],
        }
    }
}

impl AdiCvConfig {
    /// Create a configuration with the given thresholds
    pub fn with_thresholds(adi_threshold: f64, cv2_threshold: f64) -> Self {
        Self::default()
            .adi_threshold(adi_threshold)
            .cv2_threshold(cv2_threshold)
    }

    /// Set the ADI threshold (an ADI is never below 1)
    pub fn adi_threshold(mut self, threshold: f64) -> Self {
        self.adi_threshold = threshold.max(1.0);
        self
    }

    /// Set the CV² threshold
    pub fn cv2_threshold(mut self, threshold: f64) -> Self {
        self.cv2_threshold = threshold.max(0.0);
        self
    }

    /// Set the emitted features
    pub fn features(mut self, features: Vec<AdiCvFeature>) -> Self {
        self.features = features;
        self
    }

    /// Build the classifier described by this configuration.
    ///
    /// Values loaded from JSON bypass the setters, so they are validated here.
    pub fn build(&self) -> Result<AdiCvClassifier> {
        AdiCvClassifier::new(self.adi_threshold, self.cv2_threshold)?
            .with_features(self.features.clone())
    }
}

/// Configuration for a transform-select forecaster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Classifier used when no classifier is supplied
    pub classifier: AdiCvConfig,
}

impl SelectorConfig {
    pub fn with_classifier(classifier: AdiCvConfig) -> Self {
        Self { classifier }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AdiCvConfig, SelectorConfig, TransformSelectBuilder};
    pub use selector_core::{
        AdiCvClassifier, AdiCvFeature, DemandClass, ModelSlot, Step, TransformSelectForecaster,
    };
    pub use selector_spi::{
        Capability, CapabilitySet, Category, Exogenous, FeatureTable, ForecastHorizon, Forecaster,
        IntervalForecast, PredictiveDistribution, Result, SelectorError, SeriesClassifier,
        VarianceForecast,
    };
}
