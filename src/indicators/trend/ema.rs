//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::indicators::error::IndicatorError;

/// Calculate the EMA series
///
/// Seeded with the first input value, then
/// `ema[i] = value[i] * k + ema[i - 1] * (1 - k)` with `k = 2 / (period + 1)`.
/// Unlike the SMA the output is full length: one value per input point.
pub fn calculate_ema(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }
    let Some(&first) = values.first() else {
        return Err(IndicatorError::InsufficientData {
            required: 1,
            available: 0,
        });
    };

    let mut result = Vec::with_capacity(values.len());
    result.push(first);
    for &value in &values[1..] {
        let previous = result[result.len() - 1];
        result.push(math::ema_from_previous(value, previous, period));
    }

    Ok(result)
}
