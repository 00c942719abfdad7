//! Capability flags declared by forecasters

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectorError;

/// A capability a forecaster may declare.
///
/// Serialized form uses the conventional tag names, e.g. `"capability:pred_int"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Exogenous input is accepted but not used
    #[serde(rename = "ignores-exogeneous-X")]
    IgnoresExogenous,
    /// Missing values in the target are tolerated
    #[serde(rename = "handles-missing-data")]
    HandlesMissingData,
    /// In-sample point predictions are supported
    #[serde(rename = "capability:insample")]
    Insample,
    /// Interval, variance and distribution forecasts are supported
    #[serde(rename = "capability:pred_int")]
    PredictionIntervals,
    /// In-sample probabilistic forecasts are supported
    #[serde(rename = "capability:pred_int:insample")]
    InsamplePredictionIntervals,
    /// The index type of the input is enforced
    #[serde(rename = "enforce_index_type")]
    EnforceIndexType,
    /// The forecast horizon must already be known at fit time
    #[serde(rename = "requires-fh-in-fit")]
    RequiresHorizonInFit,
    /// Exogenous input must share the target's index
    #[serde(rename = "X-y-must-have-same-index")]
    MatchingIndices,
}

impl Capability {
    /// Every known capability, in declaration order.
    pub const ALL: [Capability; 8] = [
        Capability::IgnoresExogenous,
        Capability::HandlesMissingData,
        Capability::Insample,
        Capability::PredictionIntervals,
        Capability::InsamplePredictionIntervals,
        Capability::EnforceIndexType,
        Capability::RequiresHorizonInFit,
        Capability::MatchingIndices,
    ];

    /// Conventional tag name of this capability.
    pub fn tag(&self) -> &'static str {
        match self {
            Capability::IgnoresExogenous => "ignores-exogeneous-X",
            Capability::HandlesMissingData => "handles-missing-data",
            Capability::Insample => "capability:insample",
            Capability::PredictionIntervals => "capability:pred_int",
            Capability::InsamplePredictionIntervals => "capability:pred_int:insample",
            Capability::EnforceIndexType => "enforce_index_type",
            Capability::RequiresHorizonInFit => "requires-fh-in-fit",
            Capability::MatchingIndices => "X-y-must-have-same-index",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Capability {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .iter()
            .copied()
            .find(|capability| capability.tag() == s)
            .ok_or_else(|| SelectorError::InvalidParameter {
                name: "capability".to_string(),
                reason: format!("unknown capability tag '{}'", s),
            })
    }
}

/// Capability flags declared by a forecaster.
///
/// A capability that was never declared reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    flags: BTreeMap<Capability, bool>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, capability: Capability, value: bool) -> Self {
        self.flags.insert(capability, value);
        self
    }

    pub fn set(&mut self, capability: Capability, value: bool) {
        self.flags.insert(capability, value);
    }

    /// Value of a capability, `false` when undeclared
    pub fn get(&self, capability: Capability) -> bool {
        self.flags.get(&capability).copied().unwrap_or(false)
    }

    /// Value of a capability only if it was declared
    pub fn declared(&self, capability: Capability) -> Option<bool> {
        self.flags.get(&capability).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Capability, bool)> + '_ {
        self.flags.iter().map(|(capability, value)| (*capability, *value))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FromIterator<(Capability, bool)> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = (Capability, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}
