//! Unit tests for recommendation building

use ta_consensus::models::{ConsensusResult, RiskAssessment, RiskLevel, Signal, SignalDistribution};
use ta_consensus::signals::build_recommendations;

fn create_consensus(signal: Signal, agreement: &str) -> ConsensusResult {
    ConsensusResult {
        signal,
        confidence: 70,
        agreement: agreement.to_string(),
        signal_distribution: SignalDistribution::default(),
        reasoning: vec![],
        model_count: 4,
    }
}

fn create_risk(level: RiskLevel) -> RiskAssessment {
    RiskAssessment {
        level,
        atr: 1.2,
        atr_percent: 1.2,
        recommendation: "Manage position size".to_string(),
    }
}

#[test]
fn test_buy_with_low_risk() {
    let recs = build_recommendations(
        &create_consensus(Signal::Buy, "Strong Bullish"),
        Some(&create_risk(RiskLevel::Low)),
    );
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].action, "BUY");
    assert!(recs[0].position_size.contains("larger"));
    assert!(recs[0].reasoning.contains("Strong Bullish"));
    assert_eq!(recs[1].action, "RISK FACTORS");
    assert!(recs[1].reasoning.starts_with("Risk Level: Low"));
}

#[test]
fn test_sell_with_high_risk() {
    let recs = build_recommendations(
        &create_consensus(Signal::Sell, "Moderate Bearish"),
        Some(&create_risk(RiskLevel::High)),
    );
    assert_eq!(recs[0].action, "SELL");
    assert!(recs[0].position_size.contains("smaller"));
}

#[test]
fn test_wait_maps_to_hold() {
    let recs = build_recommendations(&create_consensus(Signal::Wait, "Mixed"), None);
    assert_eq!(recs[0].action, "HOLD");
    assert!(recs[1].reasoning.contains("Unknown"));
}
