//! Runs every signal model over one or many symbols and builds the results

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::models::analysis::{
    AnalysisResult, PortfolioAnalysis, PortfolioSummary, SignalDistribution, SymbolOutcome,
};
use crate::models::price::PriceSeries;
use crate::models::signal::Signal;
use crate::signals::{assess_risk, build_recommendations, derive_key_levels, ConsensusAggregator};
use crate::strategies::{default_models, SignalModel};
use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

pub const STRONG_BUY_MESSAGE: &str =
    "Strong buy signals across portfolio - consider increasing exposure";
pub const MODERATE_BULLISH_MESSAGE: &str =
    "Moderate bullish sentiment - selective buying opportunities";
pub const BEARISH_MESSAGE: &str = "Bearish signals dominate - consider reducing exposure";
pub const MIXED_MESSAGE: &str = "Mixed signals - maintain current positions and monitor";

/// Drives the signal models over price series
pub struct AnalysisOrchestrator {
    models: Vec<Box<dyn SignalModel>>,
    atr_period: usize,
}

impl Default for AnalysisOrchestrator {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl AnalysisOrchestrator {
    /// Orchestrator running the four standard models
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            models: default_models(config),
            atr_period: config.risk.atr_period,
        }
    }

    /// Orchestrator over a custom model set
    pub fn with_models(models: Vec<Box<dyn SignalModel>>, atr_period: usize) -> Self {
        Self { models, atr_period }
    }

    pub fn models(&self) -> &[Box<dyn SignalModel>] {
        &self.models
    }

    /// Run every model on one series.
    ///
    /// A failing model is recorded in `model_errors` and left out of the consensus;
    /// the others still run. Only an empty or malformed series fails the call.
    pub fn analyze_symbol(&self, series: &PriceSeries, symbol: &str) -> Result<AnalysisResult> {
        series.validate()?;

        let mut model_results = Vec::with_capacity(self.models.len());
        let mut model_errors = BTreeMap::new();

        for model in &self.models {
            match model.analyze(series) {
                Ok(result) => {
                    debug!(
                        symbol = %symbol,
                        model = %result.model,
                        signal = %result.signal,
                        confidence = result.confidence,
                        "Model evaluated"
                    );
                    model_results.push(result);
                }
                Err(e) => {
                    warn!(symbol = %symbol, model = %model.name(), error = %e, "Model failed");
                    model_errors.insert(model.name(), e.to_string());
                }
            }
        }

        let consensus = ConsensusAggregator::aggregate(&model_results);
        let risk_assessment = assess_risk(series, self.atr_period);
        let key_levels = derive_key_levels(series).ok_or(AnalysisError::EmptySeries)?;
        let recommendations = build_recommendations(&consensus, risk_assessment.as_ref());

        let current = series.current().ok_or(AnalysisError::EmptySeries)?;
        let date = current.timestamp.unwrap_or_else(Utc::now);

        info!(
            symbol = %symbol,
            signal = %consensus.signal,
            confidence = consensus.confidence,
            models = model_results.len(),
            failed_models = model_errors.len(),
            "Symbol analyzed"
        );

        Ok(AnalysisResult {
            symbol: symbol.to_string(),
            date,
            current_price: current.close,
            model_results,
            model_errors,
            consensus,
            risk_assessment,
            key_levels,
            recommendations,
        })
    }

    /// Analyze each symbol independently and summarize the portfolio.
    ///
    /// A symbol whose series is invalid, or on which every model fails, becomes a
    /// failure entry and does not count towards the summary.
    pub fn analyze_multiple_symbols(&self, entries: &[(String, PriceSeries)]) -> PortfolioAnalysis {
        let individual_analyses: Vec<SymbolOutcome> = entries
            .iter()
            .map(|(symbol, series)| self.analyze_entry(symbol, series))
            .collect();

        let summary = summarize_portfolio(&individual_analyses);
        info!(
            total = summary.total_symbols,
            analyzed = summary.analyzed,
            failed = summary.failed,
            "Portfolio analyzed"
        );

        PortfolioAnalysis {
            individual_analyses,
            summary,
        }
    }

    fn analyze_entry(&self, symbol: &str, series: &PriceSeries) -> SymbolOutcome {
        let outcome = self.analyze_symbol(series, symbol).and_then(|result| {
            if result.model_results.is_empty() {
                let details = result
                    .model_errors
                    .iter()
                    .map(|(model, error)| format!("{}: {}", model, error))
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(AnalysisError::NoValidModels {
                    symbol: symbol.to_string(),
                    details,
                })
            } else {
                Ok(result)
            }
        });

        match outcome {
            Ok(result) => SymbolOutcome::Success(Box::new(result)),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Symbol analysis failed");
                SymbolOutcome::Failure {
                    symbol: symbol.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Portfolio-level counts, ratios and recommendation over successful analyses
pub fn summarize_portfolio(outcomes: &[SymbolOutcome]) -> PortfolioSummary {
    let analyses: Vec<&AnalysisResult> = outcomes
        .iter()
        .filter_map(SymbolOutcome::analysis)
        .collect();
    let analyzed = analyses.len();

    let signal_counts: SignalDistribution = analyses.iter().map(|a| a.consensus.signal).collect();

    let (average_confidence, bullish_ratio, bearish_ratio) = if analyzed == 0 {
        (0.0, 0.0, 0.0)
    } else {
        let n = analyzed as f64;
        let total_confidence: f64 = analyses
            .iter()
            .map(|a| f64::from(a.consensus.confidence))
            .sum();
        (
            total_confidence / n,
            signal_counts.count(Signal::Buy) as f64 / n,
            signal_counts.count(Signal::Sell) as f64 / n,
        )
    };

    PortfolioSummary {
        total_symbols: outcomes.len(),
        analyzed,
        failed: outcomes.len() - analyzed,
        signal_counts,
        average_confidence,
        bullish_ratio,
        bearish_ratio,
        recommendation: portfolio_recommendation(bullish_ratio, bearish_ratio, average_confidence)
            .to_string(),
    }
}

pub fn portfolio_recommendation(
    bullish_ratio: f64,
    bearish_ratio: f64,
    average_confidence: f64,
) -> &'static str {
    if bullish_ratio > 0.6 && average_confidence > 70.0 {
        STRONG_BUY_MESSAGE
    } else if bullish_ratio > 0.4 && average_confidence > 60.0 {
        MODERATE_BULLISH_MESSAGE
    } else if bearish_ratio > 0.6 {
        BEARISH_MESSAGE
    } else {
        MIXED_MESSAGE
    }
}
