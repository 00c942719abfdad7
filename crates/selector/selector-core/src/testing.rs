//! Test doubles shared by the unit tests of this crate

use selector_spi::{
    Capability, CapabilitySet, Exogenous, FeatureTable, ForecastHorizon, Forecaster,
    IntervalForecast, PredictionInterval, PredictiveDistribution, Result, SelectorError,
    SeriesClassifier, VarianceForecast,
};

/// Returns the same table (or the same error) on every call
pub struct FixedClassifier {
    table: FeatureTable,
    error: Option<String>,
    calls: usize,
}

impl FixedClassifier {
    pub fn new(table: FeatureTable) -> Self {
        Self {
            table,
            error: None,
            calls: 0,
        }
    }

    pub fn label(label: &str) -> Self {
        Self::new(FeatureTable::single("class", label))
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            table: FeatureTable::default(),
            error: Some(reason.to_string()),
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl SeriesClassifier for FixedClassifier {
    fn fit_transform(&mut self, _y: &[f64], _x: Option<&Exogenous>) -> Result<FeatureTable> {
        self.calls += 1;
        match &self.error {
            Some(reason) => Err(SelectorError::InvalidParameter {
                name: "y".to_string(),
                reason: reason.clone(),
            }),
            None => Ok(self.table.clone()),
        }
    }

    fn clone_box(&self) -> Box<dyn SeriesClassifier> {
        Box::new(Self {
            table: self.table.clone(),
            error: self.error.clone(),
            calls: 0,
        })
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Labels a series "high" when its mean reaches the threshold, else "low"
#[derive(Clone)]
pub struct LevelClassifier {
    pub threshold: f64,
}

impl SeriesClassifier for LevelClassifier {
    fn fit_transform(&mut self, y: &[f64], _x: Option<&Exogenous>) -> Result<FeatureTable> {
        if y.is_empty() {
            return Err(SelectorError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        let mean = y.iter().sum::<f64>() / y.len() as f64;
        let label = if mean >= self.threshold { "high" } else { "low" };
        Ok(FeatureTable::single("level", label))
    }

    fn clone_box(&self) -> Box<dyn SeriesClassifier> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "level"
    }
}

/// Forecasts `last observation + offset`; its name identifies which
/// prototype a fitted copy came from.
pub struct StubForecaster {
    id: String,
    offset: f64,
    capabilities: CapabilitySet,
    fail_fit: bool,
    last: Option<f64>,
}

impl StubForecaster {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            offset: 0.0,
            capabilities: CapabilitySet::new(),
            fail_fit: false,
            last: None,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_capability(mut self, capability: Capability, value: bool) -> Self {
        self.capabilities.set(capability, value);
        self
    }

    pub fn failing_fit(mut self) -> Self {
        self.fail_fit = true;
        self
    }

    fn point(&self, fh: &ForecastHorizon) -> Result<Vec<f64>> {
        let last = self.last.ok_or(SelectorError::NotFitted)?;
        Ok(vec![last + self.offset; fh.len()])
    }

    fn check_intervals(&self, operation: &str) -> Result<()> {
        if self.capabilities.get(Capability::PredictionIntervals) {
            Ok(())
        } else {
            Err(SelectorError::unsupported(operation))
        }
    }
}

impl Forecaster for StubForecaster {
    fn fit(
        &mut self,
        y: &[f64],
        _x: Option<&Exogenous>,
        _fh: Option<&ForecastHorizon>,
    ) -> Result<()> {
        if self.fail_fit {
            return Err(SelectorError::Forecaster(format!("{} failed to fit", self.id)));
        }
        let last = y.last().copied().ok_or(SelectorError::InsufficientData {
            required: 1,
            actual: 0,
        })?;
        self.last = Some(last);
        Ok(())
    }

    fn predict(&self, fh: &ForecastHorizon, _x: Option<&Exogenous>) -> Result<Vec<f64>> {
        self.point(fh)
    }

    fn update(&mut self, y: &[f64], _x: Option<&Exogenous>, update_params: bool) -> Result<()> {
        if self.last.is_none() {
            return Err(SelectorError::NotFitted);
        }
        if update_params {
            if let Some(last) = y.last() {
                self.last = Some(*last);
            }
        }
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.last.is_some()
    }

    fn capabilities(&self) -> CapabilitySet {
        self.capabilities.clone()
    }

    fn clone_box(&self) -> Box<dyn Forecaster> {
        Box::new(Self {
            id: self.id.clone(),
            offset: self.offset,
            capabilities: self.capabilities.clone(),
            fail_fit: self.fail_fit,
            last: None,
        })
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
        self.check_intervals("predict_interval")?;
        let point = self.point(fh)?;
        Ok(IntervalForecast {
            steps: fh.steps().to_vec(),
            intervals: coverage
                .iter()
                .map(|&c| PredictionInterval {
                    coverage: c,
                    lower: point.iter().map(|p| p - c).collect(),
                    upper: point.iter().map(|p| p + c).collect(),
                })
                .collect(),
        })
    }

    fn predict_var(
        &self,
        fh: &ForecastHorizon,
        _x: Option<&Exogenous>,
        cov: bool,
    ) -> Result<VarianceForecast> {
        self.check_intervals("predict_var")?;
        self.point(fh)?;
        let n = fh.len();
        if cov {
            let matrix = (0..n)
                .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
                .collect();
            Ok(VarianceForecast::Joint(matrix))
        } else {
            Ok(VarianceForecast::Marginal(vec![1.0; n]))
        }
    }

    fn predict_proba(
        &self,
        fh: &ForecastHorizon,
        _x: Option<&Exogenous>,
        marginal: bool,
    ) -> Result<PredictiveDistribution> {
        self.check_intervals("predict_proba")?;
        let mean = self.point(fh)?;
        Ok(PredictiveDistribution {
            std_dev: vec![1.0; mean.len()],
            mean,
            marginal,
        })
    }
}
