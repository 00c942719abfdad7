//! Contract traits for selector participants
//!
//! - [`Forecaster`]: fit/predict/update contract shared by candidates, the
//!   fallback and the composite itself
//! - [`SeriesClassifier`]: transform that assigns a category to a series

mod forecaster;
mod series_classifier;

pub use forecaster::Forecaster;
pub use series_classifier::SeriesClassifier;
