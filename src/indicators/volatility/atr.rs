//! ATR (Average True Range) indicator

use crate::common::math;
use crate::indicators::error::{check_period, IndicatorError};
use crate::indicators::trend::calculate_sma;

/// Calculate the ATR series
///
/// True range needs a previous close, so it starts at the second bar. The ATR is an
/// SMA of the true-range sequence: `len - period` values, value `j` belonging to input
/// index `j + period`.
pub fn calculate_atr(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Result<Vec<f64>, IndicatorError> {
    if highs.len() != closes.len() || lows.len() != closes.len() {
        return Err(IndicatorError::LengthMismatch {
            highs: highs.len(),
            lows: lows.len(),
            closes: closes.len(),
        });
    }
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }
    check_period(period + 1, closes.len())?;

    let true_ranges: Vec<f64> = (1..closes.len())
        .map(|i| math::true_range(highs[i], lows[i], closes[i - 1]))
        .collect();

    calculate_sma(&true_ranges, period)
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
) -> Result<Vec<f64>, IndicatorError> {
    calculate_atr(highs, lows, closes, 14)
}
