//! MACD momentum

use crate::config::MacdParams;
use crate::error::{AnalysisError, Result};
use crate::indicators::momentum::{calculate_macd, MacdSeries};
use crate::models::price::PriceSeries;
use crate::models::signal::{
    Crossover, CrossoverKind, KeyLevel, MacdAnalysis, ModelAnalysis, ModelResult, Signal,
};
use crate::strategies::rules::{evaluate, rule, Rule, RuleOutcome, SignalUpdate};
use crate::strategies::{ensure_lookback, SignalModel};
use tracing::debug;

const TIMEFRAME: &str = "Medium-term (1-3 months)";
const TREND_CONFIRMATION_BARS: usize = 10;
const MAX_CROSSOVERS: usize = 5;

/// MACD line against its signal line and the zero line, weighted by
/// histogram momentum.
#[derive(Debug, Clone, Copy)]
pub struct MacdMomentumModel {
    params: MacdParams,
}

impl MacdMomentumModel {
    pub fn new(params: MacdParams) -> Self {
        Self { params }
    }
}

impl Default for MacdMomentumModel {
    fn default() -> Self {
        Self::new(MacdParams::default())
    }
}

/// Latest and previous readings of each MACD component
#[derive(Debug, Clone, Copy)]
struct MacdReading {
    macd: f64,
    signal: f64,
    histogram: f64,
    prev_macd: f64,
    prev_signal: f64,
    prev_histogram: f64,
}

impl MacdReading {
    fn from_series(series: &MacdSeries) -> Option<Self> {
        let n = series.len();
        if n < 2 {
            return None;
        }
        Some(Self {
            macd: series.macd[n - 1],
            signal: series.signal[n - 1],
            histogram: series.histogram[n - 1],
            prev_macd: series.macd[n - 2],
            prev_signal: series.signal[n - 2],
            prev_histogram: series.histogram[n - 2],
        })
    }
}

/// Rule chain, in order:
/// 1. MACD vs signal line: +25, tentative BUY above, SELL otherwise
/// 2. histogram expanding +20, contracting -10
/// 3. zero-line cross: forced signal, +30
/// 4. signal-line cross: tentative signal, +25
fn macd_rules(r: MacdReading) -> Vec<Rule<'static>> {
    vec![
        rule(move |_| {
            Some(if r.macd > r.signal {
                RuleOutcome::new(
                    SignalUpdate::Tentative(Signal::Buy),
                    25,
                    "MACD above signal line (bullish)",
                )
            } else {
                RuleOutcome::new(
                    SignalUpdate::Force(Signal::Sell),
                    25,
                    "MACD below signal line (bearish)",
                )
            })
        }),
        rule(move |_| {
            let (h, prev) = (r.histogram, r.prev_histogram);
            if h > 0.0 && h > prev {
                Some(RuleOutcome::adjust(
                    20,
                    "MACD histogram expanding (strengthening bullish momentum)",
                ))
            } else if h < 0.0 && h < prev {
                Some(RuleOutcome::adjust(
                    20,
                    "MACD histogram expanding (strengthening bearish momentum)",
                ))
            } else if h > 0.0 && h < prev {
                Some(RuleOutcome::adjust(
                    -10,
                    "MACD histogram contracting (weakening bullish momentum)",
                ))
            } else if h < 0.0 && h > prev {
                Some(RuleOutcome::adjust(
                    -10,
                    "MACD histogram contracting (weakening bearish momentum)",
                ))
            } else {
                None
            }
        }),
        rule(move |_| {
            if r.macd > 0.0 && r.prev_macd <= 0.0 {
                Some(RuleOutcome::new(
                    SignalUpdate::Force(Signal::Buy),
                    30,
                    "MACD crossed above zero line (strong bullish signal)",
                ))
            } else if r.macd < 0.0 && r.prev_macd >= 0.0 {
                Some(RuleOutcome::new(
                    SignalUpdate::Force(Signal::Sell),
                    30,
                    "MACD crossed below zero line (strong bearish signal)",
                ))
            } else {
                None
            }
        }),
        rule(move |_| {
            if r.macd > r.signal && r.prev_macd <= r.prev_signal {
                Some(RuleOutcome::new(
                    SignalUpdate::Tentative(Signal::Buy),
                    25,
                    "MACD bullish crossover",
                ))
            } else if r.macd < r.signal && r.prev_macd >= r.prev_signal {
                Some(RuleOutcome::new(
                    SignalUpdate::Tentative(Signal::Sell),
                    25,
                    "MACD bearish crossover",
                ))
            } else {
                None
            }
        }),
    ]
}

/// Signal-line and zero-line crossings over the whole MACD history, oldest first
fn find_crossovers(series: &MacdSeries, offset: usize) -> Vec<Crossover> {
    let mut crossovers = Vec::new();
    for i in 1..series.len() {
        let (m, s) = (series.macd[i], series.signal[i]);
        let (pm, ps) = (series.macd[i - 1], series.signal[i - 1]);

        if m > s && pm <= ps {
            crossovers.push(Crossover {
                index: i + offset,
                kind: CrossoverKind::BullishSignalCross,
            });
        } else if m < s && pm >= ps {
            crossovers.push(Crossover {
                index: i + offset,
                kind: CrossoverKind::BearishSignalCross,
            });
        }

        if m > 0.0 && pm <= 0.0 {
            crossovers.push(Crossover {
                index: i + offset,
                kind: CrossoverKind::BullishZeroCross,
            });
        } else if m < 0.0 && pm >= 0.0 {
            crossovers.push(Crossover {
                index: i + offset,
                kind: CrossoverKind::BearishZeroCross,
            });
        }
    }
    let skip = crossovers.len().saturating_sub(MAX_CROSSOVERS);
    crossovers.split_off(skip)
}

impl SignalModel for MacdMomentumModel {
    fn name(&self) -> String {
        format!(
            "MACD Momentum ({},{},{})",
            self.params.fast_period, self.params.slow_period, self.params.signal_period
        )
    }

    fn minimum_lookback(&self) -> usize {
        self.params.slow_period + self.params.signal_period + TREND_CONFIRMATION_BARS
    }

    fn analyze(&self, series: &PriceSeries) -> Result<ModelResult> {
        ensure_lookback(self, series)?;

        let closes = series.closes();
        let macd = calculate_macd(
            &closes,
            self.params.fast_period,
            self.params.slow_period,
            self.params.signal_period,
        )?;
        let reading = MacdReading::from_series(&macd).ok_or_else(|| {
            AnalysisError::InsufficientData {
                model: self.name(),
                required: 2,
                available: macd.len(),
            }
        })?;

        let verdict = evaluate(&macd_rules(reading));

        debug!(
            model = %self.name(),
            macd = reading.macd,
            signal_line = reading.signal,
            histogram = reading.histogram,
            signal = %verdict.signal,
            "MACD momentum evaluated"
        );

        let trend = if reading.macd > reading.signal {
            "Bullish"
        } else if reading.macd < reading.signal {
            "Bearish"
        } else {
            "Neutral"
        };
        let momentum = if reading.histogram > reading.prev_histogram {
            "Strengthening"
        } else if reading.histogram < reading.prev_histogram {
            "Weakening"
        } else {
            "Stable"
        };
        let position = if reading.macd > 0.0 {
            "Above Zero"
        } else if reading.macd < 0.0 {
            "Below Zero"
        } else {
            "Zero Line"
        };

        Ok(ModelResult {
            model: self.name(),
            signal: verdict.signal,
            confidence: verdict.clamped_confidence(),
            timeframe: TIMEFRAME.to_string(),
            analysis: ModelAnalysis::Macd(MacdAnalysis {
                macd_line: reading.macd,
                signal_line: reading.signal,
                histogram: reading.histogram,
                trend: trend.to_string(),
                momentum: momentum.to_string(),
                position: position.to_string(),
                crossovers: find_crossovers(&macd, closes.len() - macd.len()),
            }),
            key_levels: vec![
                KeyLevel::new("Zero Line", format!("{:.4}", 0.0)),
                KeyLevel::new("MACD Line", format!("{:.4}", reading.macd)),
                KeyLevel::new("Signal Line", format!("{:.4}", reading.signal)),
            ],
            reasoning: verdict.reasoning,
        })
    }
}
