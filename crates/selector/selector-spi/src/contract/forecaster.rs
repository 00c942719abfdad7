//! Forecaster trait
//!
//! Defines the fit/predict/update contract shared by candidate forecasters,
//! the fallback forecaster and the transform-select composite itself.

use crate::error::{Result, SelectorError};
use crate::model::{
    CapabilitySet, Exogenous, ForecastHorizon, IntervalForecast, PredictiveDistribution,
    VarianceForecast,
};

/// Common trait for all forecasters
///
/// Point forecasts, updates and capability declarations are required. The
/// probabilistic forecasts default to [`SelectorError::Unsupported`];
/// implementors that override them should declare
/// [`Capability::PredictionIntervals`](crate::Capability::PredictionIntervals).
///
/// # Example
///
/// ```rust,ignore
/// use selector_spi::{Forecaster, ForecastHorizon};
///
/// fn forecast(model: &mut dyn Forecaster, y: &[f64]) -> selector_spi::Result<Vec<f64>> {
///     model.fit(y, None, None)?;
///     model.predict(&ForecastHorizon::ahead(5), None)
/// }
/// ```
pub trait Forecaster: Send + Sync {
    /// Fit the forecaster to a training series
    ///
    /// # Arguments
    ///
    /// * `y` - Target series
    /// * `x` - Optional exogenous regressors aligned with `y`
    /// * `fh` - Forecasting horizon, if already known at fit time
    fn fit(&mut self, y: &[f64], x: Option<&Exogenous>, fh: Option<&ForecastHorizon>)
        -> Result<()>;

    /// Point forecast for every step of `fh`
    fn predict(&self, fh: &ForecastHorizon, x: Option<&Exogenous>) -> Result<Vec<f64>>;

    /// Incorporate new observations into a fitted forecaster
    ///
    /// When `update_params` is false only the cutoff moves; fitted parameters
    /// stay as they are.
    fn update(&mut self, y: &[f64], x: Option<&Exogenous>, update_params: bool) -> Result<()>;

    /// Check if the forecaster has been fitted
    fn is_fitted(&self) -> bool;

    /// Capabilities this forecaster declares
    fn capabilities(&self) -> CapabilitySet;

    /// Create a boxed copy configured identically to `self` but with no
    /// fitted state.
    fn clone_box(&self) -> Box<dyn Forecaster>;

    /// Human readable name of the forecaster
    fn name(&self) -> &str {
        "forecaster"
    }

    /// Prediction intervals, one per requested coverage
    fn predict_interval(
        &self,
        _fh: &ForecastHorizon,
        _x: Option<&Exogenous>,
        _coverage: &[f64],
    ) -> Result<IntervalForecast> {
        Err(SelectorError::unsupported("predict_interval"))
    }

    /// Variance forecast; a full covariance over the horizon when `cov` is true
    fn predict_var(
        &self,
        _fh: &ForecastHorizon,
        _x: Option<&Exogenous>,
        _cov: bool,
    ) -> Result<VarianceForecast> {
        Err(SelectorError::unsupported("predict_var"))
    }

    /// Full predictive distribution
    fn predict_proba(
        &self,
        _fh: &ForecastHorizon,
        _x: Option<&Exogenous>,
        _marginal: bool,
    ) -> Result<PredictiveDistribution> {
        Err(SelectorError::unsupported("predict_proba"))
    }
}

impl Clone for Box<dyn Forecaster> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
