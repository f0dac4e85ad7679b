//! Bollinger Bands (volatility bands)

use crate::common::math;
use crate::config::BollingerParams;
use crate::error::Result;
use crate::indicators::trend::latest_sma;
use crate::indicators::volatility::{calculate_bollinger_bands, BollingerSeries};
use crate::models::price::PriceSeries;
use crate::models::signal::{
    BandWalk, BollingerAnalysis, KeyLevel, ModelAnalysis, ModelResult, Signal,
};
use crate::strategies::rules::{evaluate, rule, Rule, RuleOutcome, SignalUpdate};
use crate::strategies::{current_close, ensure_lookback, fmt_level, SignalModel};
use tracing::debug;

const TIMEFRAME: &str = "Short to Medium-term (2-6 weeks)";
const BAND_PROXIMITY: f64 = 0.02;
const VOLUME_SMA: usize = 20;
const VOLUME_SURGE: f64 = 1.2;
const SQUEEZE_LOOKBACK: usize = 20;
const SQUEEZE_RATIO: f64 = 0.8;
const BAND_WALK_LOOKBACK: usize = 5;
const BAND_WALK_TOUCHES: usize = 3;

/// Band-proximity reversal model. A band walk is reported in the reasoning
/// but adds no confidence.
#[derive(Debug, Clone, Copy)]
pub struct BollingerBandsModel {
    params: BollingerParams,
}

impl BollingerBandsModel {
    pub fn new(params: BollingerParams) -> Self {
        Self { params }
    }
}

impl Default for BollingerBandsModel {
    fn default() -> Self {
        Self::new(BollingerParams::default())
    }
}

fn price_position(price: f64, upper: f64, middle: f64, lower: f64) -> &'static str {
    if price >= upper {
        "Above Upper Band"
    } else if price <= lower {
        "Below Lower Band"
    } else if price > middle {
        "Upper Half"
    } else {
        "Lower Half"
    }
}

/// At least three of the last five closes within 2% of the same band
fn detect_band_walk(closes: &[f64], bands: &BollingerSeries) -> BandWalk {
    let n = BAND_WALK_LOOKBACK.min(bands.len()).min(closes.len());
    let closes = math::tail(closes, n);
    let upper = math::tail(&bands.upper, n);
    let lower = math::tail(&bands.lower, n);

    let upper_touches = closes
        .iter()
        .zip(upper)
        .filter(|(c, u)| **c >= *u * (1.0 - BAND_PROXIMITY))
        .count();
    let lower_touches = closes
        .iter()
        .zip(lower)
        .filter(|(c, l)| **c <= *l * (1.0 + BAND_PROXIMITY))
        .count();

    if upper_touches >= BAND_WALK_TOUCHES {
        BandWalk::Upper
    } else if lower_touches >= BAND_WALK_TOUCHES {
        BandWalk::Lower
    } else {
        BandWalk::None
    }
}

impl SignalModel for BollingerBandsModel {
    fn name(&self) -> String {
        format!(
            "Bollinger Bands ({},{})",
            self.params.period, self.params.std_dev
        )
    }

    fn minimum_lookback(&self) -> usize {
        self.params.period + 10
    }

    fn analyze(&self, series: &PriceSeries) -> Result<ModelResult> {
        ensure_lookback(self, series)?;

        let closes = series.closes();
        let volumes = series.volumes();
        let price = current_close(series)?;
        let bands = calculate_bollinger_bands(&closes, self.params.period, self.params.std_dev)?;

        let last = bands.len() - 1;
        let (upper, middle, lower) = (bands.upper[last], bands.middle[last], bands.lower[last]);

        let widths = bands.band_widths_pct();
        let band_width = widths[last];
        let average_band_width =
            math::mean(math::tail(&widths, SQUEEZE_LOOKBACK)).unwrap_or(band_width);
        let squeeze = band_width < average_band_width * SQUEEZE_RATIO;

        let current_volume = volumes[volumes.len() - 1];
        let average_volume = latest_sma(&volumes, VOLUME_SMA.min(volumes.len()))?;
        let volume_surge = current_volume > average_volume * VOLUME_SURGE;

        let band_walk = detect_band_walk(&closes, &bands);

        let rules: Vec<Rule> = vec![
            rule(|_| {
                if price <= lower * (1.0 + BAND_PROXIMITY) {
                    Some(RuleOutcome::new(
                        SignalUpdate::Force(Signal::Buy),
                        35,
                        format!(
                            "Price near lower band ({:.1}% from lower band)",
                            (price - lower) / lower * 100.0
                        ),
                    ))
                } else if price >= upper * (1.0 - BAND_PROXIMITY) {
                    Some(RuleOutcome::new(
                        SignalUpdate::Force(Signal::Sell),
                        35,
                        format!(
                            "Price near upper band ({:.1}% from upper band)",
                            (price - upper) / upper * 100.0
                        ),
                    ))
                } else {
                    None
                }
            }),
            rule(|v| match v.signal {
                Signal::Buy if volume_surge => Some(RuleOutcome::adjust(
                    15,
                    "High volume confirms oversold bounce",
                )),
                Signal::Sell if volume_surge => Some(RuleOutcome::adjust(
                    15,
                    "High volume confirms overbought reversal",
                )),
                _ => None,
            }),
            rule(|_| {
                squeeze.then(|| {
                    RuleOutcome::adjust(10, "Bollinger Band squeeze detected - breakout expected")
                })
            }),
            rule(|v| {
                if price > middle {
                    let bonus = if v.signal == Signal::Buy { 10 } else { 0 };
                    Some(RuleOutcome::adjust(bonus, "Price above middle band (bullish bias)"))
                } else if price < middle {
                    let bonus = if v.signal == Signal::Sell { 10 } else { 0 };
                    Some(RuleOutcome::adjust(bonus, "Price below middle band (bearish bias)"))
                } else {
                    None
                }
            }),
            rule(|_| match band_walk {
                BandWalk::Upper => Some(RuleOutcome::note("Upper band walk detected")),
                BandWalk::Lower => Some(RuleOutcome::note("Lower band walk detected")),
                BandWalk::None => None,
            }),
        ];
        let verdict = evaluate(&rules);

        debug!(
            model = %self.name(),
            upper,
            middle,
            lower,
            band_width,
            squeeze,
            signal = %verdict.signal,
            "Bollinger bands evaluated"
        );

        Ok(ModelResult {
            model: self.name(),
            signal: verdict.signal,
            confidence: verdict.clamped_confidence(),
            timeframe: TIMEFRAME.to_string(),
            analysis: ModelAnalysis::Bollinger(BollingerAnalysis {
                upper,
                middle,
                lower,
                band_width,
                average_band_width,
                price_position: price_position(price, upper, middle, lower).to_string(),
                squeeze,
                band_walk,
            }),
            key_levels: vec![
                KeyLevel::new("Resistance", fmt_level(upper)),
                KeyLevel::new("Support", fmt_level(lower)),
                KeyLevel::new("Pivot", fmt_level(middle)),
            ],
            reasoning: verdict.reasoning,
        })
    }
}
