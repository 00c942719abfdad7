//! Error module containing error types and result aliases

mod selector_error;

pub use selector_error::SelectorError;

/// Result type for selector operations
pub type Result<T> = std::result::Result<T, SelectorError>;
