//! Probabilistic forecast results

use serde::{Deserialize, Serialize};

/// Lower and upper bounds at one nominal coverage, one value per horizon step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInterval {
    /// Nominal coverage in `[0, 1]`
    pub coverage: f64,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// Interval forecast over a horizon, one [`PredictionInterval`] per coverage
/// in the order the coverages were requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalForecast {
    pub steps: Vec<i64>,
    pub intervals: Vec<PredictionInterval>,
}

impl IntervalForecast {
    pub fn coverage(&self, coverage: f64) -> Option<&PredictionInterval> {
        self.intervals
            .iter()
            .find(|interval| (interval.coverage - coverage).abs() < f64::EPSILON)
    }
}

/// Variance forecast over a horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VarianceForecast {
    /// One variance per horizon step
    Marginal(Vec<f64>),
    /// Covariance between every pair of horizon steps
    Joint(Vec<Vec<f64>>),
}

/// Normal predictive distribution over a horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveDistribution {
    pub mean: Vec<f64>,
    pub std_dev: Vec<f64>,
    /// Whether the distribution is marginal by time point
    pub marginal: bool,
}
