//! Analysis error types.

use crate::indicators::IndicatorError;
use thiserror::Error;

/// Errors raised while evaluating models and symbols
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("{model}: insufficient data, need at least {required} price points, got {available}")]
    InsufficientData {
        model: String,
        required: usize,
        available: usize,
    },

    #[error("Price series is empty")]
    EmptySeries,

    #[error("Invalid close price at index {index}: {value}")]
    InvalidPrice { index: usize, value: f64 },

    #[error("No model could analyze {symbol}: {details}")]
    NoValidModels { symbol: String, details: String },

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Price data provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalysisError {
    /// Minimum series length carried by an insufficient-data error
    pub fn required_length(&self) -> Option<usize> {
        match self {
            AnalysisError::InsufficientData { required, .. } => Some(*required),
            AnalysisError::Indicator(IndicatorError::InsufficientData { required, .. }) => {
                Some(*required)
            }
            _ => None,
        }
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
