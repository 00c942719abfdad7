//! Forecasting horizon

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectorError};

/// Relative steps to forecast, measured from the end of the training series.
///
/// Step `1` is the first point after the last observation; steps `<= 0`
/// are in-sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HorizonSteps")]
pub struct ForecastHorizon {
    steps: Vec<i64>,
}

/// Unchecked wire form of [`ForecastHorizon`]
#[derive(Deserialize)]
struct HorizonSteps {
    steps: Vec<i64>,
}

impl TryFrom<HorizonSteps> for ForecastHorizon {
    type Error = SelectorError;

    fn try_from(raw: HorizonSteps) -> Result<Self> {
        Self::from_steps(raw.steps)
    }
}

impl ForecastHorizon {
    /// Steps `1..=steps`
    pub fn ahead(steps: usize) -> Self {
        Self {
            steps: (1..=steps as i64).collect(),
        }
    }

    /// Arbitrary relative steps; sorted, must be non-empty and unique
    pub fn from_steps(mut steps: Vec<i64>) -> Result<Self> {
        if steps.is_empty() {
            return Err(SelectorError::InvalidParameter {
                name: "fh".to_string(),
                reason: "horizon must contain at least one step".to_string(),
            });
        }
        steps.sort_unstable();
        if steps.windows(2).any(|w| w[0] == w[1]) {
            return Err(SelectorError::InvalidParameter {
                name: "fh".to_string(),
                reason: "horizon steps must be unique".to_string(),
            });
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[i64] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True if any step lies inside the training window
    pub fn is_in_sample(&self) -> bool {
        self.steps.iter().any(|&step| step <= 0)
    }

    pub fn max_step(&self) -> Option<i64> {
        self.steps.last().copied()
    }
}

impl From<usize> for ForecastHorizon {
    fn from(steps: usize) -> Self {
        Self::ahead(steps)
    }
}
