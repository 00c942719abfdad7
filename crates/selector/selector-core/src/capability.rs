//! Capability aggregation
//!
//! Derives the capabilities a composite declares from the capabilities of
//! its constituents. Each [`Capability`] is aggregated with exactly one
//! [`AggregationRule`].

use selector_spi::{Capability, CapabilitySet};
use tracing::trace;

/// How a capability combines across constituents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationRule {
    /// True only if every constituent declares it; vacuously true when there
    /// are no constituents
    AllRequired,
    /// True if any constituent declares it
    AnyTriggers,
}

/// Capabilities the composite offers only if every constituent does
pub const ALL_REQUIRED: [Capability; 6] = [
    Capability::IgnoresExogenous,
    Capability::HandlesMissingData,
    Capability::Insample,
    Capability::PredictionIntervals,
    Capability::InsamplePredictionIntervals,
    Capability::EnforceIndexType,
];

/// Requirements the composite inherits from any single constituent
pub const ANY_TRIGGERS: [Capability; 2] = [
    Capability::RequiresHorizonInFit,
    Capability::MatchingIndices,
];

/// Rule used for `capability`.
///
/// `MatchingIndices` is a requirement: whichever constituent gets routed to
/// may be the one that needs aligned indices, so it aggregates with
/// [`AggregationRule::AnyTriggers`] and is not part of [`ALL_REQUIRED`].
pub fn aggregation_rule(capability: Capability) -> AggregationRule {
    match capability {
        Capability::RequiresHorizonInFit | Capability::MatchingIndices => {
            AggregationRule::AnyTriggers
        }
        Capability::IgnoresExogenous
        | Capability::HandlesMissingData
        | Capability::Insample
        | Capability::PredictionIntervals
        | Capability::InsamplePredictionIntervals
        | Capability::EnforceIndexType => AggregationRule::AllRequired,
    }
}

/// Aggregate the capabilities of every candidate and the optional fallback.
///
/// The fallback takes part exactly like a candidate. The result declares a
/// value for every known capability.
pub fn aggregate_capabilities<I>(candidates: I, fallback: Option<CapabilitySet>) -> CapabilitySet
where
    I: IntoIterator<Item = CapabilitySet>,
{
    let declared: Vec<CapabilitySet> = candidates.into_iter().chain(fallback).collect();

    let aggregated: CapabilitySet = Capability::ALL
        .iter()
        .map(|&capability| {
            let value = match aggregation_rule(capability) {
                AggregationRule::AllRequired => declared.iter().all(|set| set.get(capability)),
                AggregationRule::AnyTriggers => declared.iter().any(|set| set.get(capability)),
            };
            (capability, value)
        })
        .collect();

    trace!(
        constituents = declared.len(),
        pred_int = aggregated.get(Capability::PredictionIntervals),
        "aggregated capabilities"
    );

    aggregated
}
