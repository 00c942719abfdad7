//! Model module containing data structures
//!
//! - [`Capability`] / [`CapabilitySet`] - Flags a forecaster declares about itself
//! - [`ForecastHorizon`] - Relative steps to forecast
//! - [`Exogenous`] - Exogenous regressors aligned with the target series
//! - [`FeatureTable`] - Tabular classifier output
//! - [`Category`] - Label observed for a series
//! - [`IntervalForecast`], [`VarianceForecast`], [`PredictiveDistribution`] -
//!   Probabilistic forecast results

mod capability;
mod category;
mod exogenous;
mod feature_table;
mod horizon;
mod probabilistic;

pub use capability::{Capability, CapabilitySet};
pub use category::Category;
pub use exogenous::Exogenous;
pub use feature_table::{FeatureTable, FeatureValue};
pub use horizon::ForecastHorizon;
pub use probabilistic::{
    IntervalForecast, PredictionInterval, PredictiveDistribution, VarianceForecast,
};
