//! ADI/CV² demand classification
//!
//! Classifies a demand series by its average demand interval (ADI) and the
//! squared coefficient of variation (CV²) of its non-zero observations:
//!
//! | ADI            | CV²            | class          |
//! |----------------|----------------|----------------|
//! | <= threshold   | <= threshold   | `smooth`       |
//! | <= threshold   | > threshold    | `erratic`      |
//! | > threshold    | <= threshold   | `intermittent` |
//! | > threshold    | > threshold    | `lumpy`        |
//!
//! This is the default classifier of a transform-select forecaster.

use std::fmt;

use selector_spi::{Exogenous, FeatureTable, FeatureValue, Result, SelectorError, SeriesClassifier};
use serde::{Deserialize, Serialize};

/// Default ADI threshold separating regular from intermittent demand
pub const DEFAULT_ADI_THRESHOLD: f64 = 1.32;

/// Default CV² threshold separating stable from variable demand sizes
pub const DEFAULT_CV2_THRESHOLD: f64 = 0.49;

/// Feature emitted by [`AdiCvClassifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdiCvFeature {
    Adi,
    Cv2,
    Class,
}

impl AdiCvFeature {
    pub fn column_name(&self) -> &'static str {
        match self {
            AdiCvFeature::Adi => "adi",
            AdiCvFeature::Cv2 => "cv2",
            AdiCvFeature::Class => "class",
        }
    }
}

/// Demand pattern class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandClass {
    Smooth,
    Erratic,
    Intermittent,
    Lumpy,
}

impl DemandClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandClass::Smooth => "smooth",
            DemandClass::Erratic => "erratic",
            DemandClass::Intermittent => "intermittent",
            DemandClass::Lumpy => "lumpy",
        }
    }

    /// Classify statistics against the given thresholds (both inclusive on the low side)
    pub fn from_statistics(
        stats: &DemandStatistics,
        adi_threshold: f64,
        cv2_threshold: f64,
    ) -> Self {
        match (stats.adi <= adi_threshold, stats.cv2 <= cv2_threshold) {
            (true, true) => DemandClass::Smooth,
            (true, false) => DemandClass::Erratic,
            (false, true) => DemandClass::Intermittent,
            (false, false) => DemandClass::Lumpy,
        }
    }
}

impl fmt::Display for DemandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ADI and CV² of a demand series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandStatistics {
    /// Number of periods per non-zero demand
    pub adi: f64,
    /// Squared coefficient of variation of the non-zero demands
    pub cv2: f64,
}

impl DemandStatistics {
    /// Compute ADI and CV² of `y`.
    ///
    /// CV² uses the population variance of the non-zero observations.
    pub fn compute(y: &[f64]) -> Result<Self> {
        if y.is_empty() {
            return Err(SelectorError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if y.iter().any(|v| !v.is_finite()) {
            return Err(SelectorError::InvalidParameter {
                name: "y".to_string(),
                reason: "series contains non-finite values".to_string(),
            });
        }

        let demands: Vec<f64> = y.iter().copied().filter(|v| *v != 0.0).collect();
        if demands.is_empty() {
            return Err(SelectorError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let k = demands.len() as f64;
        let mean = demands.iter().sum::<f64>() / k;
        if mean == 0.0 {
            return Err(SelectorError::InvalidParameter {
                name: "y".to_string(),
                reason: "non-zero demands average to zero".to_string(),
            });
        }
        let variance = demands.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / k;

        Ok(Self {
            adi: y.len() as f64 / k,
            cv2: variance / (mean * mean),
        })
    }
}

/// Series classifier emitting ADI, CV² and/or the demand class
#[derive(Debug, Clone)]
pub struct AdiCvClassifier {
    adi_threshold: f64,
    cv2_threshold: f64,
    features: Vec<AdiCvFeature>,
    statistics: Option<DemandStatistics>,
}

impl AdiCvClassifier {
    /// Create a classifier with custom thresholds, emitting only the class
    pub fn new(adi_threshold: f64, cv2_threshold: f64) -> Result<Self> {
        if !adi_threshold.is_finite() || adi_threshold <= 0.0 {
            return Err(SelectorError::InvalidParameter {
                name: "adi_threshold".to_string(),
                reason: "must be finite and positive".to_string(),
            });
        }
        if !cv2_threshold.is_finite() || cv2_threshold < 0.0 {
            return Err(SelectorError::InvalidParameter {
                name: "cv2_threshold".to_string(),
                reason: "must be finite and non-negative".to_string(),
            });
        }
        Ok(Self {
            adi_threshold,
            cv2_threshold,
            features: vec![AdiCvFeature::Class],
            statistics: None,
        })
    }

    /// Choose the emitted features, in output column order
    pub fn with_features(mut self, features: Vec<AdiCvFeature>) -> Result<Self> {
        if features.is_empty() {
            return Err(SelectorError::InvalidParameter {
                name: "features".to_string(),
                reason: "at least one feature is required".to_string(),
            });
        }
        for (i, feature) in features.iter().enumerate() {
            if features[..i].contains(feature) {
                return Err(SelectorError::InvalidParameter {
                    name: "features".to_string(),
                    reason: format!("'{}' is listed twice", feature.column_name()),
                });
            }
        }
        self.features = features;
        Ok(self)
    }

    pub fn adi_threshold(&self) -> f64 {
        self.adi_threshold
    }

    pub fn cv2_threshold(&self) -> f64 {
        self.cv2_threshold
    }

    pub fn features(&self) -> &[AdiCvFeature] {
        &self.features
    }

    /// Statistics of the series seen by the last `fit_transform`
    pub fn statistics(&self) -> Option<&DemandStatistics> {
        self.statistics.as_ref()
    }

    /// Class of the series seen by the last `fit_transform`
    pub fn demand_class(&self) -> Option<DemandClass> {
        self.statistics
            .as_ref()
            .map(|stats| {
                DemandClass::from_statistics(stats, self.adi_threshold, self.cv2_threshold)
            })
    }
}

impl Default for AdiCvClassifier {
    fn default() -> Self {
        Self {
            adi_threshold: DEFAULT_ADI_THRESHOLD,
            cv2_threshold: DEFAULT_CV2_THRESHOLD,
            features: vec![AdiCvFeature::Class],
            statistics: None,
        }
    }
}

impl SeriesClassifier for AdiCvClassifier {
    fn fit_transform(&mut self, y: &[f64], _x: Option<&Exogenous>) -> Result<FeatureTable> {
        self.statistics = None;
        let stats = DemandStatistics::compute(y)?;
        let class = DemandClass::from_statistics(&stats, self.adi_threshold, self.cv2_threshold);

        let row = self
            .features
            .iter()
            .map(|feature| match feature {
                AdiCvFeature::Adi => FeatureValue::Number(stats.adi),
                AdiCvFeature::Cv2 => FeatureValue::Number(stats.cv2),
                AdiCvFeature::Class => FeatureValue::from(class.as_str()),
            })
            .collect();

        let mut table = FeatureTable::new(self.features.iter().map(AdiCvFeature::column_name));
        table.push_row(row)?;
        self.statistics = Some(stats);
        Ok(table)
    }

    fn clone_box(&self) -> Box<dyn SeriesClassifier> {
        Box::new(Self {
            statistics: None,
            ..self.clone()
        })
    }

    fn name(&self) -> &str {
        "adi_cv"
    }
}
