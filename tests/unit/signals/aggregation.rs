//! Unit tests for consensus aggregation

use ta_consensus::models::{Divergence, ModelAnalysis, ModelResult, RsiAnalysis, Signal};
use ta_consensus::signals::ConsensusAggregator;

fn create_result(name: &str, signal: Signal, confidence: u8) -> ModelResult {
    ModelResult {
        model: name.to_string(),
        signal,
        confidence,
        timeframe: "Short-term".to_string(),
        reasoning: vec![],
        analysis: ModelAnalysis::Rsi(RsiAnalysis {
            current: 50.0,
            previous: 50.0,
            level: "Neutral".to_string(),
            momentum: "Stable".to_string(),
            divergence: Divergence::None,
        }),
        key_levels: vec![],
    }
}

fn create_results(calls: &[(Signal, u8)]) -> Vec<ModelResult> {
    calls
        .iter()
        .enumerate()
        .map(|(i, (signal, confidence))| {
            create_result(&format!("Model {}", i), *signal, *confidence)
        })
        .collect()
}

#[test]
fn test_strong_bullish_majority() {
    let results = create_results(&[
        (Signal::Buy, 80),
        (Signal::Buy, 60),
        (Signal::Buy, 70),
        (Signal::Sell, 41),
    ]);
    let consensus = ConsensusAggregator::aggregate(&results);

    assert_eq!(consensus.signal, Signal::Buy);
    assert_eq!(consensus.agreement, "Strong Bullish");
    // 251 / 4 = 62.75
    assert_eq!(consensus.confidence, 63);
    assert_eq!(consensus.model_count, 4);
    assert_eq!(consensus.signal_distribution.buy, 3);
    assert_eq!(consensus.signal_distribution.sell, 1);
}

#[test]
fn test_strong_bearish_majority() {
    let results = create_results(&[
        (Signal::Sell, 50),
        (Signal::Sell, 50),
        (Signal::Sell, 50),
        (Signal::Hold, 0),
    ]);
    let consensus = ConsensusAggregator::aggregate(&results);
    assert_eq!(consensus.signal, Signal::Sell);
    assert_eq!(consensus.agreement, "Strong Bearish");
}

#[test]
fn test_sixty_percent_is_only_moderate() {
    let results = create_results(&[
        (Signal::Buy, 50),
        (Signal::Buy, 50),
        (Signal::Buy, 50),
        (Signal::Sell, 50),
        (Signal::Hold, 50),
    ]);
    let consensus = ConsensusAggregator::aggregate(&results);
    assert_eq!(consensus.signal, Signal::Buy);
    assert_eq!(consensus.agreement, "Moderate Bullish");
}

#[test]
fn test_moderate_bearish() {
    let results = create_results(&[
        (Signal::Sell, 40),
        (Signal::Wait, 50),
        (Signal::Hold, 20),
        (Signal::Sell, 60),
        (Signal::Buy, 30),
    ]);
    let consensus = ConsensusAggregator::aggregate(&results);
    assert_eq!(consensus.signal, Signal::Sell);
    assert_eq!(consensus.agreement, "Moderate Bearish");
}

#[test]
fn test_tie_is_mixed_hold() {
    let results = create_results(&[
        (Signal::Buy, 90),
        (Signal::Sell, 90),
        (Signal::Buy, 90),
        (Signal::Sell, 90),
    ]);
    let consensus = ConsensusAggregator::aggregate(&results);
    assert_eq!(consensus.signal, Signal::Hold);
    assert_eq!(consensus.agreement, "Mixed");
    assert_eq!(consensus.confidence, 90);
}

#[test]
fn test_wait_votes_count_towards_total() {
    let results = create_results(&[
        (Signal::Buy, 85),
        (Signal::Wait, 60),
        (Signal::Wait, 60),
        (Signal::Wait, 60),
    ]);
    let consensus = ConsensusAggregator::aggregate(&results);
    assert_eq!(consensus.signal, Signal::Buy);
    assert_eq!(consensus.agreement, "Moderate Bullish");
    assert_eq!(consensus.signal_distribution.wait, 3);
    assert_eq!(consensus.signal_distribution.total(), 4);
}

#[test]
fn test_no_results() {
    let consensus = ConsensusAggregator::aggregate(&[]);
    assert_eq!(consensus.signal, Signal::Hold);
    assert_eq!(consensus.confidence, 0);
    assert_eq!(consensus.agreement, "No valid signals");
    assert_eq!(consensus.model_count, 0);
    assert_eq!(consensus.signal_distribution.total(), 0);
}

#[test]
fn test_reasoning_lists_every_model() {
    let results = create_results(&[(Signal::Buy, 70), (Signal::Hold, 20)]);
    let consensus = ConsensusAggregator::aggregate(&results);
    assert!(consensus.reasoning[0].starts_with("Moderate Bullish"));
    assert_eq!(consensus.reasoning.len(), 3);
    assert_eq!(consensus.reasoning[1], "Model 0: BUY (70%)");
}
