//! Error types for the footfall_forecast crate

use thiserror::Error;

/// Custom error types for the footfall_forecast crate
///
/// Every variant is a recoverable condition; the `Display` text is what a
/// front end shows the user as a blocking notice.
#[derive(Debug, Error)]
pub enum FootfallError {
    /// No observations are available where at least one is required
    #[error("No data loaded: the dataset is empty")]
    EmptyDataset,

    /// Fewer observations than the caller's minimum for training
    #[error("Not enough data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation or construction
    #[error("Data error: {0}")]
    InvalidData(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV writing
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, FootfallError>;

impl From<csv::Error> for FootfallError {
    fn from(err: csv::Error) -> Self {
        FootfallError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for FootfallError {
    fn from(err: serde_json::Error) -> Self {
        FootfallError::Json(err.to_string())
    }
}
