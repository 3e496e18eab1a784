//! Analytics error types.

use thiserror::Error;

/// Errors that can occur during analytics calculations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Insufficient data to perform calculation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Calculation failed.
    #[error("Calculation failed: {0}")]
    CalculationFailed(String),
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
