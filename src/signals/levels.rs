//! Symbol-level support and resistance

use crate::common::math;
use crate::indicators::trend::latest_sma;
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::models::analysis::SymbolKeyLevels;
use crate::models::price::PriceSeries;

const RECENT_LOOKBACK: usize = 20;

/// Nearest indicator levels around the current close.
///
/// Support is the highest of {Bollinger(20, 2) lower band, SMA(50), SMA(200)} at or
/// below the close; resistance the lowest of {upper band, SMA(50), SMA(200)} at or
/// above it. Candidates without enough history are skipped. With no candidate on a
/// side, the whole-series low/high is used.
pub fn derive_key_levels(series: &PriceSeries) -> Option<SymbolKeyLevels> {
    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();
    let price = *closes.last()?;

    let bands = calculate_bollinger_bands(&closes, 20, 2.0).ok();
    let sma50 = latest_sma(&closes, 50).ok();
    let sma200 = latest_sma(&closes, 200).ok();

    let band_lower = bands.as_ref().and_then(|b| b.lower.last().copied());
    let band_upper = bands.as_ref().and_then(|b| b.upper.last().copied());

    let overall_high = highs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let overall_low = lows.iter().copied().fold(f64::INFINITY, f64::min);

    let support = [band_lower, sma50, sma200]
        .into_iter()
        .flatten()
        .filter(|level| *level <= price)
        .fold(None, |best: Option<f64>, level| Some(best.map_or(level, |b| b.max(level))))
        .unwrap_or(overall_low);
    let resistance = [band_upper, sma50, sma200]
        .into_iter()
        .flatten()
        .filter(|level| *level >= price)
        .fold(None, |best: Option<f64>, level| Some(best.map_or(level, |b| b.min(level))))
        .unwrap_or(overall_high);

    let recent_high = math::tail(&highs, RECENT_LOOKBACK)
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let recent_low = math::tail(&lows, RECENT_LOOKBACK)
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);

    let range = if overall_low > 0.0 {
        (overall_high - overall_low) / overall_low * 100.0
    } else {
        0.0
    };

    Some(SymbolKeyLevels {
        current_price: price,
        support,
        resistance,
        recent_high,
        recent_low,
        range,
    })
}
