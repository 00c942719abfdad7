//! Selector Service Provider Interface
//!
//! Defines the contracts, data structures and error type shared by every
//! participant of a transform-select forecaster:
//!
//! - [`Forecaster`]: fit/predict/update contract, including the optional
//!   probabilistic forecasts
//! - [`SeriesClassifier`]: transform that labels a series with a category
//! - [`CapabilitySet`]: capability flags declared by a forecaster
//! - [`SelectorError`]: standardized error type for all selector operations

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Forecaster, SeriesClassifier};
pub use error::{Result, SelectorError};
pub use model::{
    Capability, CapabilitySet, Category, Exogenous, FeatureTable, FeatureValue, ForecastHorizon,
    IntervalForecast, PredictionInterval, PredictiveDistribution, VarianceForecast,
};
