//! Error type shared by every host.

use thiserror::Error;

/// Errors produced by the toolkit.
///
/// Routing problems are logged and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A numeric configuration value is outside its accepted range.
    #[error("value {value} is outside the range {min}..={max}")]
    OutOfRange {
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// The element factory received something the document cannot apply,
    /// such as an invalid tag or attribute name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A document operation failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
    /// A required part of the document is missing.
    #[error("{0} is not available")]
    Unavailable(&'static str),
    /// The application manifest could not be parsed.
    #[error("malformed application manifest: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}
