//! Actionable recommendations from consensus and risk

use crate::models::analysis::{ConsensusResult, Recommendation, RiskAssessment, RiskLevel};
use crate::models::signal::Signal;

/// Consensus action with a position-size hint, then a risk entry
pub fn build_recommendations(
    consensus: &ConsensusResult,
    risk: Option<&RiskAssessment>,
) -> Vec<Recommendation> {
    let level = risk.map(|r| r.level);
    let size = position_size(level);

    let action = match consensus.signal {
        Signal::Buy => Recommendation {
            action: "BUY".to_string(),
            position_size: size.to_string(),
            reasoning: format!(
                "Overall consensus is Bullish ({}). Review key levels for entry points.",
                consensus.agreement
            ),
        },
        Signal::Sell => Recommendation {
            action: "SELL".to_string(),
            position_size: size.to_string(),
            reasoning: format!(
                "Overall consensus is Bearish ({}). Review key levels for exit points.",
                consensus.agreement
            ),
        },
        Signal::Hold | Signal::Wait => Recommendation {
            action: "HOLD".to_string(),
            position_size: "Maintain current position or wait for clearer signals".to_string(),
            reasoning: format!(
                "Overall consensus is Neutral or Mixed ({}). Wait for a clearer direction.",
                consensus.agreement
            ),
        },
    };

    let risk_entry = match risk {
        Some(r) => Recommendation {
            action: "RISK FACTORS".to_string(),
            position_size: r.recommendation.clone(),
            reasoning: format!(
                "Risk Level: {}. Volatility: {:.2}% of price (ATR {:.2})",
                r.level, r.atr_percent, r.atr
            ),
        },
        None => Recommendation {
            action: "RISK FACTORS".to_string(),
            position_size: "Could not assess volatility. Consider your risk profile carefully"
                .to_string(),
            reasoning: "Risk Level: Unknown. Not enough data for ATR".to_string(),
        },
    };

    vec![action, risk_entry]
}

fn position_size(level: Option<RiskLevel>) -> &'static str {
    match level {
        Some(RiskLevel::VeryLow | RiskLevel::Low) => "Consider a slightly larger position size",
        Some(RiskLevel::Medium) => "Consider a standard position size",
        Some(RiskLevel::High | RiskLevel::VeryHigh) | None => "Consider a smaller position size",
    }
}
