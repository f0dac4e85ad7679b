//! Consensus voting across model results

use crate::models::analysis::{ConsensusResult, SignalDistribution};
use crate::models::signal::{ModelResult, Signal};

/// Share of the vote above which a direction is called strong
const STRONG_MAJORITY: f64 = 0.6;

/// Combine model results into one consensus signal
pub struct ConsensusAggregator;

impl ConsensusAggregator {
    /// Majority vote with averaged confidence.
    ///
    /// BUY/SELL when that side holds more than 60% of the votes (Strong), else the
    /// side with more votes (Moderate), else HOLD (Mixed). Confidence is the rounded
    /// mean of all model confidences.
    pub fn aggregate(results: &[ModelResult]) -> ConsensusResult {
        if results.is_empty() {
            return ConsensusResult {
                signal: Signal::Hold,
                confidence: 0,
                agreement: "No valid signals".to_string(),
                signal_distribution: SignalDistribution::default(),
                reasoning: vec!["No model produced a valid signal".to_string()],
                model_count: 0,
            };
        }

        let distribution: SignalDistribution = results.iter().map(|r| r.signal).collect();
        let total = results.len() as f64;
        let buy = distribution.buy as f64;
        let sell = distribution.sell as f64;

        let (signal, agreement) = if buy > STRONG_MAJORITY * total {
            (Signal::Buy, "Strong Bullish")
        } else if sell > STRONG_MAJORITY * total {
            (Signal::Sell, "Strong Bearish")
        } else if buy > sell {
            (Signal::Buy, "Moderate Bullish")
        } else if sell > buy {
            (Signal::Sell, "Moderate Bearish")
        } else {
            (Signal::Hold, "Mixed")
        };

        let confidence_sum: u32 = results.iter().map(|r| u32::from(r.confidence)).sum();
        let confidence = (f64::from(confidence_sum) / total).round() as u8;

        let reasoning = Self::generate_reasons(results, &distribution, agreement);

        ConsensusResult {
            signal,
            confidence,
            agreement: agreement.to_string(),
            signal_distribution: distribution,
            reasoning,
            model_count: results.len(),
        }
    }

    /// Vote breakdown followed by each model's call
    fn generate_reasons(
        results: &[ModelResult],
        distribution: &SignalDistribution,
        agreement: &str,
    ) -> Vec<String> {
        let mut reasons = vec![format!(
            "{}: {} BUY, {} SELL, {} HOLD, {} WAIT across {} models",
            agreement,
            distribution.buy,
            distribution.sell,
            distribution.hold,
            distribution.wait,
            results.len()
        )];
        reasons.extend(
            results
                .iter()
                .map(|r| format!("{}: {} ({}%)", r.model, r.signal, r.confidence)),
        );
        reasons
    }
}
