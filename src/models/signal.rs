//! Per-model signal records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional call emitted by a model or by the consensus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
    Wait,
}

impl Signal {
    pub const ALL: [Signal; 4] = [Signal::Buy, Signal::Sell, Signal::Hold, Signal::Wait];

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
            Signal::Wait => "WAIT",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled support/resistance or reference level, preformatted for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLevel {
    pub label: String,
    pub value: String,
}

impl KeyLevel {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Immutable output of one `SignalModel::analyze` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelResult {
    /// Display name including parameters, e.g. "MA Crossover (50/200)"
    pub model: String,
    pub signal: Signal,
    /// Always within 0..=100
    pub confidence: u8,
    pub timeframe: String,
    pub reasoning: Vec<String>,
    pub analysis: ModelAnalysis,
    pub key_levels: Vec<KeyLevel>,
}

/// Model-specific readings, keyed by model kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ModelAnalysis {
    MovingAverage(MovingAverageAnalysis),
    Rsi(RsiAnalysis),
    Macd(MacdAnalysis),
    Bollinger(BollingerAnalysis),
}

impl ModelAnalysis {
    /// Short headline used by the report formatter
    pub fn headline(&self) -> String {
        match self {
            ModelAnalysis::MovingAverage(a) => {
                format!("{} ({})", a.trend_direction, a.trend_strength)
            }
            ModelAnalysis::Rsi(a) => format!("RSI {:.2} ({})", a.current, a.level),
            ModelAnalysis::Macd(a) => format!("{}, {}", a.trend, a.position),
            ModelAnalysis::Bollinger(a) => a.price_position.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverKind {
    GoldenCross,
    DeathCross,
    BullishSignalCross,
    BearishSignalCross,
    BullishZeroCross,
    BearishZeroCross,
}

impl fmt::Display for CrossoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CrossoverKind::GoldenCross => "Golden Cross",
            CrossoverKind::DeathCross => "Death Cross",
            CrossoverKind::BullishSignalCross => "Bullish Signal Crossover",
            CrossoverKind::BearishSignalCross => "Bearish Signal Crossover",
            CrossoverKind::BullishZeroCross => "Bullish Zero Crossover",
            CrossoverKind::BearishZeroCross => "Bearish Zero Crossover",
        };
        f.write_str(label)
    }
}

/// A crossing event located by its index in the input price series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossover {
    pub index: usize,
    pub kind: CrossoverKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovingAverageAnalysis {
    pub fast_ma: f64,
    pub slow_ma: f64,
    pub trend_direction: String,
    pub trend_strength: String,
    /// |fast - slow| / slow, in percent
    pub ma_separation: f64,
    pub crossovers: Vec<Crossover>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Divergence {
    None,
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsiAnalysis {
    pub current: f64,
    pub previous: f64,
    pub level: String,
    pub momentum: String,
    pub divergence: Divergence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdAnalysis {
    pub macd_line: f64,
    pub signal_line: f64,
    pub histogram: f64,
    pub trend: String,
    pub momentum: String,
    pub position: String,
    pub crossovers: Vec<Crossover>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandWalk {
    None,
    Upper,
    Lower,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BollingerAnalysis {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// (upper - lower) / middle, in percent
    pub band_width: f64,
    pub average_band_width: f64,
    pub price_position: String,
    pub squeeze: bool,
    pub band_walk: BandWalk,
}
