//! Selector error types

use thiserror::Error;

use crate::model::Capability;

/// Errors that can occur while configuring, fitting or querying forecasters.
///
/// The composite forecaster never wraps errors raised by its collaborators:
/// a classifier or forecaster failure reaches the caller as the exact variant
/// the collaborator returned.
#[derive(Error, Debug)]
pub enum SelectorError {
    /// A candidate could not be registered
    #[error("Invalid candidate '{label}': {reason}")]
    Configuration { label: String, reason: String },

    /// The observed category has no candidate and no fallback is configured
    #[error(
        "No forecaster registered for category '{category}' and no fallback forecaster configured"
    )]
    MissingCandidate { category: String },

    /// The operation is gated on a capability the forecaster does not declare
    #[error("Operation '{operation}' is not supported: capability '{capability}' is not declared")]
    Unsupported {
        operation: String,
        capability: Capability,
    },

    /// Predict or update was called before a successful fit
    #[error("Forecaster must be fitted before calling this method")]
    NotFitted,

    /// The classifier returned output that does not carry a category
    #[error("Invalid classification: {0}")]
    InvalidClassification(String),

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A forecaster failed with a plain message
    #[error("Forecaster failed: {0}")]
    Forecaster(String),

    /// Error raised by a collaborator with its own error type
    #[error(transparent)]
    Collaborator(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl SelectorError {
    /// Error for a probabilistic operation that requires prediction intervals.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
            capability: Capability::PredictionIntervals,
        }
    }
}
