//! Moving average crossover (trend following)

use crate::config::MaCrossoverParams;
use crate::error::Result;
use crate::indicators::trend::calculate_sma;
use crate::models::price::PriceSeries;
use crate::models::signal::{
    Crossover, CrossoverKind, KeyLevel, ModelAnalysis, ModelResult, MovingAverageAnalysis, Signal,
};
use crate::strategies::rules::{evaluate, rule, Rule, RuleOutcome, SignalUpdate};
use crate::strategies::{current_close, ensure_lookback, fmt_level, SignalModel};
use tracing::debug;

const TIMEFRAME: &str = "Long-term (3-12 months)";
const MAX_CROSSOVERS: usize = 5;

/// Fast/slow SMA crossover. Golden and death crosses dominate; otherwise the
/// MA ordering sets the trend and price position relative to the fast MA
/// decides between acting and waiting.
#[derive(Debug, Clone, Copy)]
pub struct MovingAverageCrossoverModel {
    params: MaCrossoverParams,
}

impl MovingAverageCrossoverModel {
    pub fn new(params: MaCrossoverParams) -> Self {
        Self { params }
    }
}

impl Default for MovingAverageCrossoverModel {
    fn default() -> Self {
        Self::new(MaCrossoverParams::default())
    }
}

/// Trend classification of the latest MA pair
struct TrendRead {
    direction: &'static str,
    signal: Signal,
    confidence: i32,
    reasoning: &'static str,
}

fn classify_trend(fast: f64, slow: f64, previous: Option<(f64, f64)>, price: f64) -> TrendRead {
    // Without a previous pair no cross can be confirmed; trend calls get less weight
    let (trend_confidence, up_line, down_line, flat_line) = match previous {
        Some(_) => (
            60,
            "Fast MA is above Slow MA (Uptrend)",
            "Fast MA is below Slow MA (Downtrend)",
            "Fast MA and Slow MA are converging",
        ),
        None => (
            50,
            "Fast MA is above Slow MA (Uptrend) - No previous crossover data",
            "Fast MA is below Slow MA (Downtrend) - No previous crossover data",
            "Fast MA and Slow MA are converging - No previous crossover data",
        ),
    };

    if let Some((prev_fast, prev_slow)) = previous {
        if fast > slow && prev_fast <= prev_slow {
            return TrendRead {
                direction: "Golden Cross - Strong Uptrend",
                signal: Signal::Buy,
                confidence: 85,
                reasoning: "Golden Cross (Fast MA crossed above Slow MA)",
            };
        }
        if fast < slow && prev_fast >= prev_slow {
            return TrendRead {
                direction: "Death Cross - Strong Downtrend",
                signal: Signal::Sell,
                confidence: 85,
                reasoning: "Death Cross (Fast MA crossed below Slow MA)",
            };
        }
    }

    if fast > slow {
        TrendRead {
            direction: "Uptrend",
            signal: if price > fast { Signal::Buy } else { Signal::Wait },
            confidence: trend_confidence,
            reasoning: up_line,
        }
    } else if fast < slow {
        TrendRead {
            direction: "Downtrend",
            signal: if price < fast { Signal::Sell } else { Signal::Wait },
            confidence: trend_confidence,
            reasoning: down_line,
        }
    } else {
        TrendRead {
            direction: "Sideways",
            signal: Signal::Hold,
            confidence: 20,
            reasoning: flat_line,
        }
    }
}

/// Separation label and confidence bonus
fn trend_strength(separation_pct: f64) -> (&'static str, i32) {
    if separation_pct > 10.0 {
        ("Very Strong", 15)
    } else if separation_pct > 5.0 {
        ("Strong", 10)
    } else if separation_pct > 2.0 {
        ("Moderate", 5)
    } else {
        ("Weak", 0)
    }
}

/// Golden/death crosses over aligned MA series. `offset` maps an aligned
/// index back to the price series.
fn find_crossovers(fast: &[f64], slow: &[f64], offset: usize) -> Vec<Crossover> {
    let mut crossovers: Vec<Crossover> = (1..fast.len().min(slow.len()))
        .filter_map(|i| {
            let kind = if fast[i] > slow[i] && fast[i - 1] <= slow[i - 1] {
                CrossoverKind::GoldenCross
            } else if fast[i] < slow[i] && fast[i - 1] >= slow[i - 1] {
                CrossoverKind::DeathCross
            } else {
                return None;
            };
            Some(Crossover {
                index: i + offset,
                kind,
            })
        })
        .collect();
    let skip = crossovers.len().saturating_sub(MAX_CROSSOVERS);
    crossovers.drain(..skip);
    crossovers
}

impl SignalModel for MovingAverageCrossoverModel {
    fn name(&self) -> String {
        format!(
            "MA Crossover ({}/{})",
            self.params.fast_period, self.params.slow_period
        )
    }

    fn minimum_lookback(&self) -> usize {
        self.params.fast_period.max(self.params.slow_period)
    }

    fn analyze(&self, series: &PriceSeries) -> Result<ModelResult> {
        ensure_lookback(self, series)?;

        let closes = series.closes();
        let price = current_close(series)?;
        let fast_sma = calculate_sma(&closes, self.params.fast_period)?;
        let slow_sma = calculate_sma(&closes, self.params.slow_period)?;

        // Align both series on the shorter one's start
        let aligned = fast_sma.len().min(slow_sma.len());
        let fast_ma = &fast_sma[fast_sma.len() - aligned..];
        let slow_ma = &slow_sma[slow_sma.len() - aligned..];
        let offset = closes.len() - aligned;

        let current_fast = fast_ma[aligned - 1];
        let current_slow = slow_ma[aligned - 1];
        let previous = (aligned >= 2).then(|| (fast_ma[aligned - 2], slow_ma[aligned - 2]));

        let trend = classify_trend(current_fast, current_slow, previous, price);
        let separation = if current_slow != 0.0 {
            (current_fast - current_slow).abs() / current_slow * 100.0
        } else {
            0.0
        };
        let (strength, bonus) = trend_strength(separation);

        let rules: Vec<Rule> = vec![
            rule(|_| {
                Some(RuleOutcome::new(
                    SignalUpdate::Force(trend.signal),
                    trend.confidence,
                    trend.reasoning,
                ))
            }),
            rule(|_| {
                Some(RuleOutcome::adjust(
                    bonus,
                    format!("MA separation is {} ({:.2}%)", strength, separation),
                ))
            }),
        ];
        let verdict = evaluate(&rules);

        debug!(
            model = %self.name(),
            fast = current_fast,
            slow = current_slow,
            separation,
            signal = %verdict.signal,
            "MA crossover evaluated"
        );

        let support = current_fast.min(current_slow);
        let resistance = current_fast.max(current_slow);

        Ok(ModelResult {
            model: self.name(),
            signal: verdict.signal,
            confidence: verdict.clamped_confidence(),
            timeframe: TIMEFRAME.to_string(),
            analysis: ModelAnalysis::MovingAverage(MovingAverageAnalysis {
                fast_ma: current_fast,
                slow_ma: current_slow,
                trend_direction: trend.direction.to_string(),
                trend_strength: strength.to_string(),
                ma_separation: separation,
                crossovers: find_crossovers(fast_ma, slow_ma, offset),
            }),
            key_levels: vec![
                KeyLevel::new("Fast MA", fmt_level(current_fast)),
                KeyLevel::new("Slow MA", fmt_level(current_slow)),
                KeyLevel::new("Support", fmt_level(support)),
                KeyLevel::new("Resistance", fmt_level(resistance)),
                KeyLevel::new("MA Separation", format!("{:.2}%", separation)),
            ],
            reasoning: verdict.reasoning,
        })
    }
}
