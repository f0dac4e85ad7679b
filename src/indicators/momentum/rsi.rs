//! RSI (Relative Strength Index) indicator

use crate::indicators::error::{check_period, IndicatorError};
use crate::indicators::trend::calculate_sma;

/// Calculate the RSI series
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses come from consecutive close differences and are averaged with an
/// SMA of `period`, so the output has `len - period` values and value `j` belongs to
/// input index `j + period`. A window with no losses saturates at 100.
pub fn calculate_rsi(values: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }
    check_period(period + 1, values.len())?;

    let (gains, losses): (Vec<f64>, Vec<f64>) = values
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let avg_gains = calculate_sma(&gains, period)?;
    let avg_losses = calculate_sma(&losses, period)?;

    Ok(avg_gains
        .iter()
        .zip(&avg_losses)
        .map(|(&avg_gain, &avg_loss)| rsi_from_averages(avg_gain, avg_loss))
        .collect())
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
