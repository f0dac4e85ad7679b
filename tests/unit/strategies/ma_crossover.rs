//! Unit tests for the moving average crossover model

use ta_consensus::config::MaCrossoverParams;
use ta_consensus::indicators::calculate_sma;
use ta_consensus::models::{
    CrossoverKind, ModelAnalysis, MovingAverageAnalysis, PriceSeries, Signal,
};
use ta_consensus::strategies::{MovingAverageCrossoverModel, SignalModel};
use ta_consensus::{AnalysisError, ModelResult};

/// Flat closes followed by one jump, so the fast MA crosses above the slow MA on the last bar
fn create_golden_cross_series(jump_to: f64) -> PriceSeries {
    let mut closes = vec![100.0; 200];
    closes.push(jump_to);
    PriceSeries::from_closes(&closes)
}

/// Slow decline keeps the fast MA strictly under the slow MA until a final rally
fn create_declining_golden_cross_series(rally_to: f64) -> Vec<f64> {
    let mut closes: Vec<f64> = (0..250).map(|i| 150.0 - 0.02 * i as f64).collect();
    closes.push(rally_to);
    closes
}

fn create_trending_series(count: usize, start: f64, step: f64) -> PriceSeries {
    let closes: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
    PriceSeries::from_closes(&closes)
}

fn moving_average(result: &ModelResult) -> &MovingAverageAnalysis {
    match &result.analysis {
        ModelAnalysis::MovingAverage(ma) => ma,
        other => panic!("unexpected analysis: {:?}", other),
    }
}

#[test]
fn test_golden_cross_buys() {
    let model = MovingAverageCrossoverModel::default();
    // fast 102, slow 100.5: separation under 2%, no bonus
    let result = model.analyze(&create_golden_cross_series(200.0)).unwrap();

    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 85);
    let ma = moving_average(&result);
    assert!(ma.trend_direction.contains("Golden Cross"));
    assert_eq!(ma.trend_strength, "Weak");
    assert_eq!(ma.crossovers.len(), 1);
    assert_eq!(ma.crossovers[0].kind, CrossoverKind::GoldenCross);
    assert_eq!(ma.crossovers[0].index, 200);
}

#[test]
fn test_golden_cross_from_strict_downtrend() {
    let closes = create_declining_golden_cross_series(300.0);
    let fast = calculate_sma(&closes, 50).unwrap();
    let slow = calculate_sma(&closes, 200).unwrap();
    let fast = &fast[fast.len() - slow.len()..];
    let last = slow.len() - 1;
    assert!(fast[..last].iter().zip(&slow[..last]).all(|(f, s)| f < s));
    assert!(fast[last] > slow[last]);

    let model = MovingAverageCrossoverModel::default();
    // fast 148.59, slow 147.765: separation ~0.56%
    let result = model.analyze(&PriceSeries::from_closes(&closes)).unwrap();

    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 85);
    assert_eq!(
        result.reasoning[0],
        "Golden Cross (Fast MA crossed above Slow MA)"
    );
    let ma = moving_average(&result);
    assert_eq!(ma.trend_direction, "Golden Cross - Strong Uptrend");
    assert_eq!(ma.crossovers.len(), 1);
    assert_eq!(ma.crossovers[0].kind, CrossoverKind::GoldenCross);
    assert_eq!(ma.crossovers[0].index, 250);
}

#[test]
fn test_golden_cross_from_strict_downtrend_with_moderate_separation() {
    let model = MovingAverageCrossoverModel::default();
    // fast 154.59, slow 149.265: separation ~3.57%
    let closes = create_declining_golden_cross_series(600.0);
    let result = model.analyze(&PriceSeries::from_closes(&closes)).unwrap();

    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 85 + 5);
    assert_eq!(moving_average(&result).trend_strength, "Moderate");
}

#[test]
fn test_golden_cross_with_wide_separation_adds_bonus() {
    let model = MovingAverageCrossoverModel::default();
    // fast 118, slow 104.5: separation ~12.9%
    let result = model.analyze(&create_golden_cross_series(1000.0)).unwrap();

    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 100);
    assert_eq!(moving_average(&result).trend_strength, "Very Strong");
}

#[test]
fn test_death_cross_sells() {
    let model = MovingAverageCrossoverModel::default();
    let result = model.analyze(&create_golden_cross_series(50.0)).unwrap();

    assert_eq!(result.signal, Signal::Sell);
    assert!(moving_average(&result).trend_direction.contains("Death Cross"));
    assert!(result.confidence >= 85);
}

#[test]
fn test_established_uptrend() {
    let model = MovingAverageCrossoverModel::default();
    // fast 324.5, slow 249.5
    let result = model.analyze(&create_trending_series(250, 100.0, 1.0)).unwrap();

    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 60 + 15);
    let ma = moving_average(&result);
    assert_eq!(ma.trend_direction, "Uptrend");
    assert!(ma.crossovers.is_empty());
}

#[test]
fn test_flat_series_holds() {
    let model = MovingAverageCrossoverModel::default();
    let result = model.analyze(&PriceSeries::from_closes(&[50.0; 220])).unwrap();
    assert_eq!(result.signal, Signal::Hold);
    assert_eq!(result.confidence, 20);
}

#[test]
fn test_insufficient_data() {
    let model = MovingAverageCrossoverModel::default();
    let err = model
        .analyze(&create_trending_series(199, 100.0, 0.5))
        .unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InsufficientData {
            required: 200,
            available: 199,
            ..
        }
    ));
}

#[test]
fn test_custom_periods_and_key_levels() {
    let model = MovingAverageCrossoverModel::new(MaCrossoverParams {
        fast_period: 5,
        slow_period: 20,
    });
    assert_eq!(model.name(), "MA Crossover (5/20)");
    assert_eq!(model.minimum_lookback(), 20);

    let result = model.analyze(&create_trending_series(40, 10.0, 0.25)).unwrap();
    let labels: Vec<&str> = result.key_levels.iter().map(|k| k.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Fast MA", "Slow MA", "Support", "Resistance", "MA Separation"]
    );
    assert!(result.key_levels[4].value.ends_with('%'));
}

#[test]
fn test_analysis_is_repeatable() {
    let model = MovingAverageCrossoverModel::default();
    let series = create_trending_series(260, 80.0, -0.1);
    assert_eq!(model.analyze(&series).unwrap(), model.analyze(&series).unwrap());
}
