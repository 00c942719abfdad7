//! Shared fixtures for the facade tests

#![allow(dead_code)]

use selector_facade::{
    Capability, CapabilitySet, Exogenous, FeatureTable, ForecastHorizon, Forecaster,
    IntervalForecast, PredictionInterval, PredictiveDistribution, Result, SelectorError,
    SeriesClassifier, TransformSelectForecaster, VarianceForecast,
};

pub const SMOOTH: [f64; 8] = [10.0, 11.0, 9.0, 10.0, 12.0, 10.0, 11.0, 9.0];
pub const ERRATIC: [f64; 8] = [1.0, 20.0, 2.0, 30.0, 1.0, 25.0, 3.0, 40.0];
pub const INTERMITTENT: [f64; 12] = [0.0, 0.0, 5.0, 0.0, 0.0, 6.0, 0.0, 0.0, 5.0, 0.0, 0.0, 6.0];
pub const LUMPY: [f64; 12] = [0.0, 0.0, 1.0, 0.0, 0.0, 30.0, 0.0, 0.0, 2.0, 0.0, 0.0, 40.0];

/// Naive forecaster: repeats the last observation
#[derive(Clone)]
pub struct Naive {
    id: String,
    last: Option<f64>,
}

impl Naive {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            last: None,
        }
    }
}

impl Forecaster for Naive {
    fn fit(
        &mut self,
        y: &[f64],
        _x: Option<&Exogenous>,
        _fh: Option<&ForecastHorizon>,
    ) -> Result<()> {
        let last = y.last().copied().ok_or(SelectorError::InsufficientData {
            required: 1,
            actual: 0,
        })?;
        self.last = Some(last);
        Ok(())
    }

    fn predict(&self, fh: &ForecastHorizon, _x: Option<&Exogenous>) -> Result<Vec<f64>> {
        let last = self.last.ok_or(SelectorError::NotFitted)?;
        Ok(vec![last; fh.len()])
    }

    fn update(&mut self, y: &[f64], _x: Option<&Exogenous>, update_params: bool) -> Result<()> {
        if self.last.is_none() {
            return Err(SelectorError::NotFitted);
        }
        if update_params {
            if let Some(&last) = y.last() {
                self.last = Some(last);
            }
        }
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.last.is_some()
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::new()
            .with(Capability::HandlesMissingData, false)
            .with(Capability::PredictionIntervals, false)
    }

    fn clone_box(&self) -> Box<dyn Forecaster> {
        Box::new(Naive::new(&self.id))
    }

    fn name(&self) -> &str {
        &self.id
    }
}

/// Mean forecaster with Gaussian intervals from the sample spread
#[derive(Clone)]
pub struct Mean {
    id: String,
    stats: Option<(f64, f64)>,
}

impl Mean {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            stats: None,
        }
    }

    fn stats(&self) -> Result<(f64, f64)> {
        self.stats.ok_or(SelectorError::NotFitted)
    }
}

impl Forecaster for Mean {
    fn fit(
        &mut self,
        y: &[f64],
        _x: Option<&Exogenous>,
        _fh: Option<&ForecastHorizon>,
    ) -> Result<()> {
        if y.is_empty() {
            return Err(SelectorError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        let n = y.len() as f64;
        let mean = y.iter().sum::<f64>() / n;
        let var = y.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        self.stats = Some((mean, var.sqrt()));
        Ok(())
    }

    fn predict(&self, fh: &ForecastHorizon, _x: Option<&Exogenous>) -> Result<Vec<f64>> {
        let (mean, _) = self.stats()?;
        Ok(vec![mean; fh.len()])
    }

    fn update(&mut self, _y: &[f64], _x: Option<&Exogenous>, _update_params: bool) -> Result<()> {
        self.stats().map(|_| ())
    }

    fn is_fitted(&self) -> bool {
        self.stats.is_some()
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::new()
            .with(Capability::HandlesMissingData, true)
            .with(Capability::PredictionIntervals, true)
    }

    fn clone_box(&self) -> Box<dyn Forecaster> {
        Box::new(Mean::new(&self.id))
    }

    fn name(&self) -> &str {
        &self.id
    }

    fn predict_interval(
        &self,
        fh: &ForecastHorizon,
        _x: Option<&Exogenous>,
        coverage: &[f64],
    ) -> Result<IntervalForecast> {
        let (mean, std_dev) = self.stats()?;
        Ok(IntervalForecast {
            steps: fh.steps().to_vec(),
            intervals: coverage
                .iter()
                .map(|&c| PredictionInterval {
                    coverage: c,
                    lower: vec![mean - c * std_dev; fh.len()],
                    upper: vec![mean + c * std_dev; fh.len()],
                })
                .collect(),
        })
    }

    fn predict_var(
        &self,
        fh: &ForecastHorizon,
        _x: Option<&Exogenous>,
        _cov: bool,
    ) -> Result<VarianceForecast> {
        let (_, std_dev) = self.stats()?;
        Ok(VarianceForecast::Marginal(vec![std_dev * std_dev; fh.len()]))
    }

    fn predict_proba(
        &self,
        fh: &ForecastHorizon,
        _x: Option<&Exogenous>,
        marginal: bool,
    ) -> Result<PredictiveDistribution> {
        let (mean, std_dev) = self.stats()?;
        Ok(PredictiveDistribution {
            mean: vec![mean; fh.len()],
            std_dev: vec![std_dev; fh.len()],
            marginal,
        })
    }
}

/// Assigns a numeric cluster id: 0 for series with a non-negative first
/// difference sum, 1 otherwise
#[derive(Clone)]
pub struct TrendCluster;

impl SeriesClassifier for TrendCluster {
    fn fit_transform(&mut self, y: &[f64], _x: Option<&Exogenous>) -> Result<FeatureTable> {
        let (first, last) = match (y.first(), y.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                return Err(SelectorError::InsufficientData {
                    required: 1,
                    actual: 0,
                })
            }
        };
        let cluster = if last >= first { 0.0 } else { 1.0 };
        Ok(FeatureTable::single("cluster", cluster))
    }

    fn clone_box(&self) -> Box<dyn SeriesClassifier> {
        Box::new(TrendCluster)
    }

    fn name(&self) -> &str {
        "trend_cluster"
    }
}

pub fn boxed(forecaster: impl Forecaster + 'static) -> Box<dyn Forecaster> {
    Box::new(forecaster)
}

/// Candidates for all four demand classes
pub fn full_candidate_map() -> TransformSelectForecaster {
    TransformSelectForecaster::new(
        vec![
            ("smooth", boxed(Naive::new("smooth_naive"))),
            ("erratic", boxed(Mean::new("erratic_mean"))),
            ("intermittent", boxed(Mean::new("intermittent_mean"))),
            ("lumpy", boxed(Naive::new("lumpy_naive"))),
        ],
        None,
        None,
    )
    .expect("valid candidate map")
}

/// No candidates; every series goes to the fallback
pub fn fallback_only() -> TransformSelectForecaster {
    TransformSelectForecaster::new(
        Vec::<(String, Box<dyn Forecaster>)>::new(),
        None,
        Some(boxed(Mean::new("fallback_mean"))),
    )
    .expect("valid fallback configuration")
}

/// Numeric cluster ids as categories, with a fallback for unknown clusters
pub fn clustered() -> TransformSelectForecaster {
    TransformSelectForecaster::new(
        vec![("0", boxed(Naive::new("rising_naive")))],
        Some(Box::new(TrendCluster)),
        Some(boxed(Mean::new("fallback_mean"))),
    )
    .expect("valid clustered configuration")
}
