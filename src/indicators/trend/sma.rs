//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::indicators::error::{check_period, IndicatorError};

/// Calculate the SMA series
///
/// One value per full trailing window: the output has `len - period + 1` values and
/// value `i` belongs to input index `i + period - 1`.
pub fn calculate_sma(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    check_period(period, values.len())?;

    Ok(values
        .windows(period)
        .filter_map(math::mean)
        .collect())
}

/// Latest SMA value only
pub fn latest_sma(values: &[f64], period: usize) -> Result<f64, IndicatorError> {
    check_period(period, values.len())?;
    let window = math::tail(values, period);
    Ok(window.iter().sum::<f64>() / period as f64)
}
