//! Selector Facade
//!
//! High-level API for transform-select forecasting. Re-exports all public
//! types from the selector stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use selector_facade::prelude::*;
//!
//! let mut forecaster = TransformSelectBuilder::new()
//!     .candidate("smooth", naive)
//!     .candidate("intermittent", croston)
//!     .fallback(naive)
//!     .build()?;
//! forecaster.fit(&demand, None, None)?;
//! let forecast = forecaster.predict(&ForecastHorizon::ahead(6), None)?;
//! ```

// Re-export everything from API (which includes SPI and core)
pub use selector_api::*;

// Explicit re-exports for documentation
pub use selector_api::prelude;

// Re-export SPI traits
pub use selector_spi::{Forecaster, SeriesClassifier};
