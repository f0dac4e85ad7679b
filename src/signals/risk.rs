//! Volatility-based risk assessment

use crate::indicators::volatility::calculate_atr;
use crate::models::analysis::{RiskAssessment, RiskLevel};
use crate::models::price::PriceSeries;

/// Classify risk from the latest ATR as a percentage of the current close.
///
/// Returns `None` when the series is shorter than `atr_period + 1` or the
/// current close is not positive.
pub fn assess_risk(series: &PriceSeries, atr_period: usize) -> Option<RiskAssessment> {
    let closes = series.closes();
    let atr = calculate_atr(&series.highs(), &series.lows(), &closes, atr_period).ok()?;
    let latest_atr = *atr.last()?;
    let price = *closes.last()?;
    if price <= 0.0 {
        return None;
    }

    let atr_percent = latest_atr / price * 100.0;
    let level = RiskLevel::from_atr_percent(atr_percent);

    Some(RiskAssessment {
        level,
        atr: latest_atr,
        atr_percent,
        recommendation: format!(
            "Manage position size according to your risk tolerance ({} volatility)",
            level
        ),
    })
}
