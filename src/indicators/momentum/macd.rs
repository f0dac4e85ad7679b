//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::error::IndicatorError;
use crate::indicators::trend::calculate_ema;
use serde::{Deserialize, Serialize};

/// MACD line, signal line and histogram, aligned index by index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl MacdSeries {
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }
}

/// Calculate the MACD series
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// Component series are intersected to the shorter length at every step.
pub fn calculate_macd(
    values: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdSeries, IndicatorError> {
    if signal_period == 0 {
        return Err(IndicatorError::InvalidPeriod {
            period: signal_period,
        });
    }

    let fast_ema = calculate_ema(values, fast_period)?;
    let slow_ema = calculate_ema(values, slow_period)?;

    let macd: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(fast, slow)| fast - slow)
        .collect();

    let signal = calculate_ema(&macd, signal_period)?;

    let histogram: Vec<f64> = macd
        .iter()
        .zip(&signal)
        .map(|(m, s)| m - s)
        .collect();

    Ok(MacdSeries {
        macd,
        signal,
        histogram,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(values: &[f64]) -> Result<MacdSeries, IndicatorError> {
    calculate_macd(values, 12, 26, 9)
}
