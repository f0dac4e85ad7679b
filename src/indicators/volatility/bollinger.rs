//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::error::{check_period, IndicatorError};
use serde::{Deserialize, Serialize};

/// Upper, middle and lower bands, aligned index by index
///
/// Value `i` belongs to input index `i + period - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

impl BollingerSeries {
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    /// Band width as a percentage of the middle band, per point
    pub fn band_widths_pct(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(&self.lower)
            .zip(&self.middle)
            .map(|((upper, lower), middle)| {
                if *middle == 0.0 {
                    0.0
                } else {
                    (upper - lower) / middle * 100.0
                }
            })
            .collect()
    }
}

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The standard deviation is the population one (divides by `period`).
pub fn calculate_bollinger_bands(
    values: &[f64],
    period: usize,
    std_dev: f64,
) -> Result<BollingerSeries, IndicatorError> {
    check_period(period, values.len())?;

    let count = values.len() - period + 1;
    let mut upper = Vec::with_capacity(count);
    let mut middle = Vec::with_capacity(count);
    let mut lower = Vec::with_capacity(count);

    for window in values.windows(period) {
        let (Some(mid), Some(std)) = (math::mean(window), math::population_std_dev(window)) else {
            continue;
        };
        let offset = std_dev * std;
        upper.push(mid + offset);
        middle.push(mid);
        lower.push(mid - offset);
    }

    Ok(BollingerSeries {
        upper,
        middle,
        lower,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(
    values: &[f64],
) -> Result<BollingerSeries, IndicatorError> {
    calculate_bollinger_bands(values, 20, 2.0)
}
