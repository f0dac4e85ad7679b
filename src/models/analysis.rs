//! Consensus, per-symbol and portfolio result records

use crate::models::signal::{ModelResult, Signal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of models voting for each signal kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SignalDistribution {
    pub buy: usize,
    pub sell: usize,
    pub hold: usize,
    pub wait: usize,
}

impl SignalDistribution {
    pub fn record(&mut self, signal: Signal) {
        match signal {
            Signal::Buy => self.buy += 1,
            Signal::Sell => self.sell += 1,
            Signal::Hold => self.hold += 1,
            Signal::Wait => self.wait += 1,
        }
    }

    pub fn count(&self, signal: Signal) -> usize {
        match signal {
            Signal::Buy => self.buy,
            Signal::Sell => self.sell,
            Signal::Hold => self.hold,
            Signal::Wait => self.wait,
        }
    }

    pub fn total(&self) -> usize {
        self.buy + self.sell + self.hold + self.wait
    }
}

impl FromIterator<Signal> for SignalDistribution {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        let mut distribution = Self::default();
        for signal in iter {
            distribution.record(signal);
        }
        distribution
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusResult {
    pub signal: Signal,
    /// Rounded mean of the contributing model confidences
    pub confidence: u8,
    pub agreement: String,
    pub signal_distribution: SignalDistribution,
    pub reasoning: Vec<String>,
    pub model_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Classify volatility from ATR as a percentage of price
    pub fn from_atr_percent(atr_percent: f64) -> Self {
        if atr_percent < 0.5 {
            RiskLevel::VeryLow
        } else if atr_percent < 1.5 {
            RiskLevel::Low
        } else if atr_percent < 3.0 {
            RiskLevel::Medium
        } else if atr_percent < 5.0 {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub atr: f64,
    pub atr_percent: f64,
    pub recommendation: String,
}

/// Support/resistance summary for a whole symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolKeyLevels {
    pub current_price: f64,
    pub support: f64,
    pub resistance: f64,
    pub recent_high: f64,
    pub recent_low: f64,
    /// Overall high over overall low, in percent
    pub range: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: String,
    pub position_size: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub symbol: String,
    pub date: DateTime<Utc>,
    pub current_price: f64,
    pub model_results: Vec<ModelResult>,
    /// Model name to error message, for models that could not run
    pub model_errors: BTreeMap<String, String>,
    pub consensus: ConsensusResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<RiskAssessment>,
    pub key_levels: SymbolKeyLevels,
    pub recommendations: Vec<Recommendation>,
}

/// One entry of a multi-symbol run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymbolOutcome {
    Success(Box<AnalysisResult>),
    Failure { symbol: String, error: String },
}

impl SymbolOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            SymbolOutcome::Success(result) => &result.symbol,
            SymbolOutcome::Failure { symbol, .. } => symbol,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SymbolOutcome::Success(_) => None,
            SymbolOutcome::Failure { error, .. } => Some(error),
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match self {
            SymbolOutcome::Success(result) => Some(result),
            SymbolOutcome::Failure { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_symbols: usize,
    pub analyzed: usize,
    pub failed: usize,
    pub signal_counts: SignalDistribution,
    pub average_confidence: f64,
    pub bullish_ratio: f64,
    pub bearish_ratio: f64,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
    pub individual_analyses: Vec<SymbolOutcome>,
    pub summary: PortfolioSummary,
}
