//! Selector Core
//!
//! Core implementations for category-routed forecasting:
//! - ADI/CV² demand classification
//! - Capability aggregation across candidate forecasters
//! - Category routing with an optional fallback
//! - The transform-select forecaster that ties them together

mod adi_cv;
mod capability;
mod classifier;
mod router;
mod transform_select;

#[cfg(test)]
mod testing;

pub use adi_cv::{
    AdiCvClassifier, AdiCvFeature, DemandClass, DemandStatistics, DEFAULT_ADI_THRESHOLD,
    DEFAULT_CV2_THRESHOLD,
};
pub use capability::{
    aggregate_capabilities, aggregation_rule, AggregationRule, ALL_REQUIRED, ANY_TRIGGERS,
};
pub use classifier::ClassifierAdapter;
pub use router::{ModelSlot, Router};
pub use transform_select::{Selection, Step, TransformSelectForecaster};

// Re-export SPI types
pub use selector_spi::{
    Capability, CapabilitySet, Category, Exogenous, FeatureTable, FeatureValue, ForecastHorizon,
    Forecaster, IntervalForecast, PredictionInterval, PredictiveDistribution, Result,
    SelectorError, SeriesClassifier, VarianceForecast,
};
