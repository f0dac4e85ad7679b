use thiserror::Error;

/// Errors raised by the indicator library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("Invalid period: {period} (must be greater than zero)")]
    InvalidPeriod { period: usize },

    #[error("Insufficient data: required {required}, got {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Input series length mismatch: highs={highs}, lows={lows}, closes={closes}")]
    LengthMismatch {
        highs: usize,
        lows: usize,
        closes: usize,
    },
}

pub(crate) fn check_period(period: usize, available: usize) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }
    if available < period {
        return Err(IndicatorError::InsufficientData {
            required: period,
            available,
        });
    }
    Ok(())
}
