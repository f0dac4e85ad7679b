//! RSI mean reversion

use crate::common::math;
use crate::config::RsiParams;
use crate::error::Result;
use crate::indicators::momentum::calculate_rsi;
use crate::indicators::trend::latest_sma;
use crate::models::price::PriceSeries;
use crate::models::signal::{Divergence, KeyLevel, ModelAnalysis, ModelResult, RsiAnalysis, Signal};
use crate::strategies::rules::{evaluate, rule, Rule, RuleOutcome, SignalUpdate};
use crate::strategies::{current_close, ensure_lookback, fmt_level, SignalModel};
use tracing::debug;

const TIMEFRAME: &str = "Short to Medium-term (2-8 weeks)";
const CONFIRMATION_SMA: usize = 20;
const DIVERGENCE_WINDOW: usize = 10;

/// Buys oversold and sells overbought RSI readings, with extra weight for a
/// turning RSI, SMA(20) confirmation and price/RSI divergence.
#[derive(Debug, Clone, Copy)]
pub struct RsiMeanReversionModel {
    params: RsiParams,
}

impl RsiMeanReversionModel {
    pub fn new(params: RsiParams) -> Self {
        Self { params }
    }
}

impl Default for RsiMeanReversionModel {
    fn default() -> Self {
        Self::new(RsiParams::default())
    }
}

pub fn rsi_level(rsi: f64) -> &'static str {
    if rsi < 20.0 {
        "Extremely Oversold"
    } else if rsi < 30.0 {
        "Oversold"
    } else if rsi < 40.0 {
        "Weak"
    } else if rsi < 60.0 {
        "Neutral"
    } else if rsi < 70.0 {
        "Strong"
    } else if rsi < 80.0 {
        "Overbought"
    } else {
        "Extremely Overbought"
    }
}

/// Compare extremes of two equally long windows.
///
/// Bullish: the price low comes after the RSI low, price at its own low is below
/// price at the RSI low, and RSI at the price low is above the RSI low.
/// Bearish mirrors this with highs. Bullish is tested first.
pub fn detect_divergence(prices: &[f64], rsi: &[f64]) -> Divergence {
    if prices.len() != rsi.len() {
        return Divergence::None;
    }

    if let (Some(price_low), Some(rsi_low)) = (math::argmin(prices), math::argmin(rsi)) {
        if price_low > rsi_low
            && prices[price_low] < prices[rsi_low]
            && rsi[price_low] > rsi[rsi_low]
        {
            return Divergence::Bullish;
        }
    }

    if let (Some(price_high), Some(rsi_high)) = (math::argmax(prices), math::argmax(rsi)) {
        if price_high > rsi_high
            && prices[price_high] > prices[rsi_high]
            && rsi[price_high] < rsi[rsi_high]
        {
            return Divergence::Bearish;
        }
    }

    Divergence::None
}

fn momentum_label(current: f64, previous: f64) -> &'static str {
    if current > previous {
        "Rising"
    } else if current < previous {
        "Falling"
    } else {
        "Stable"
    }
}

impl SignalModel for RsiMeanReversionModel {
    fn name(&self) -> String {
        format!("RSI Mean Reversion ({})", self.params.period)
    }

    fn minimum_lookback(&self) -> usize {
        self.params.period + 20
    }

    fn analyze(&self, series: &PriceSeries) -> Result<ModelResult> {
        ensure_lookback(self, series)?;

        let RsiParams {
            period,
            oversold,
            overbought,
        } = self.params;
        let closes = series.closes();
        let price = current_close(series)?;
        let rsi = calculate_rsi(&closes, period)?;
        let sma20 = latest_sma(&closes, CONFIRMATION_SMA.min(closes.len()))?;

        let current = rsi[rsi.len() - 1];
        let previous = if rsi.len() >= 2 { rsi[rsi.len() - 2] } else { current };

        // RSI value j belongs to close j + period; the tails line up
        let window = DIVERGENCE_WINDOW.min(rsi.len());
        let divergence = detect_divergence(math::tail(&closes, window), math::tail(&rsi, window));

        let rules: Vec<Rule> = vec![
            rule(|_| Some(RuleOutcome::note(format!("Current RSI: {:.2}", current)))),
            rule(|_| {
                let outcome = if current < oversold {
                    RuleOutcome::new(
                        SignalUpdate::Force(Signal::Buy),
                        40,
                        format!("RSI oversold ({:.1} < {})", current, oversold),
                    )
                } else if current > overbought {
                    RuleOutcome::new(
                        SignalUpdate::Force(Signal::Sell),
                        40,
                        format!("RSI overbought ({:.1} > {})", current, overbought),
                    )
                } else if current > 60.0 {
                    RuleOutcome::note("RSI in bullish territory")
                } else if current < 40.0 {
                    RuleOutcome::note("RSI in bearish territory")
                } else {
                    RuleOutcome::note("RSI in neutral zone")
                };
                Some(outcome)
            }),
            rule(|_| {
                if current < oversold && current > previous {
                    Some(RuleOutcome::adjust(20, "RSI showing upward momentum"))
                } else if current < oversold && current < previous {
                    Some(RuleOutcome::note("RSI still falling (caution)"))
                } else if current > overbought && current < previous {
                    Some(RuleOutcome::adjust(20, "RSI showing downward momentum"))
                } else if current > overbought && current > previous {
                    Some(RuleOutcome::note("RSI still rising (caution)"))
                } else {
                    None
                }
            }),
            rule(|v| match v.signal {
                Signal::Buy if price > sma20 => Some(RuleOutcome::adjust(
                    15,
                    "Price above 20-day SMA confirms bullish bias",
                )),
                Signal::Sell if price < sma20 => Some(RuleOutcome::adjust(
                    15,
                    "Price below 20-day SMA confirms bearish bias",
                )),
                _ if price > sma20 => Some(RuleOutcome::note("Price above 20-day SMA")),
                _ => Some(RuleOutcome::note("Price at or below 20-day SMA")),
            }),
            rule(|_| match divergence {
                Divergence::Bullish => Some(RuleOutcome::adjust(
                    25,
                    "Bullish divergence detected (price lower low, RSI higher low)",
                )),
                Divergence::Bearish => Some(RuleOutcome::adjust(
                    25,
                    "Bearish divergence detected (price higher high, RSI lower high)",
                )),
                Divergence::None => None,
            }),
        ];
        let verdict = evaluate(&rules);

        debug!(
            model = %self.name(),
            rsi = current,
            sma20,
            divergence = ?divergence,
            signal = %verdict.signal,
            "RSI mean reversion evaluated"
        );

        Ok(ModelResult {
            model: self.name(),
            signal: verdict.signal,
            confidence: verdict.clamped_confidence(),
            timeframe: TIMEFRAME.to_string(),
            analysis: ModelAnalysis::Rsi(RsiAnalysis {
                current,
                previous,
                level: rsi_level(current).to_string(),
                momentum: momentum_label(current, previous).to_string(),
                divergence,
            }),
            key_levels: vec![
                KeyLevel::new("Oversold", fmt_level(oversold)),
                KeyLevel::new("Overbought", fmt_level(overbought)),
                KeyLevel::new("Neutral", fmt_level(50.0)),
                KeyLevel::new("Current RSI", fmt_level(current)),
            ],
            reasoning: verdict.reasoning,
        })
    }
}
