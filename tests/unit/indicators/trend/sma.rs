//! Unit tests for SMA indicator

use ta_consensus::indicators::trend::{calculate_sma, latest_sma};
use ta_consensus::indicators::IndicatorError;

#[test]
fn test_sma_length_and_window_mean() {
    let values: Vec<f64> = (1..=10).map(f64::from).collect();
    let sma = calculate_sma(&values, 3).unwrap();
    assert_eq!(sma.len(), values.len() - 3 + 1);
    assert_eq!(sma[0], 2.0);
    assert_eq!(sma[7], 9.0);
}

#[test]
fn test_sma_of_constant_series_is_constant() {
    let values = vec![42.5; 30];
    for period in [1, 5, 30] {
        let sma = calculate_sma(&values, period).unwrap();
        assert_eq!(sma.len(), 30 - period + 1);
        assert!(sma.iter().all(|v| (*v - 42.5).abs() < 1e-12));
    }
}

#[test]
fn test_sma_insufficient_data() {
    let err = calculate_sma(&[1.0, 2.0], 3).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::InsufficientData {
            required: 3,
            available: 2
        }
    );
}

#[test]
fn test_sma_zero_period() {
    assert!(matches!(
        calculate_sma(&[1.0, 2.0], 0),
        Err(IndicatorError::InvalidPeriod { period: 0 })
    ));
}

#[test]
fn test_latest_sma_matches_series_tail() {
    let values: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
    let series = calculate_sma(&values, 20).unwrap();
    let latest = latest_sma(&values, 20).unwrap();
    assert!((series[series.len() - 1] - latest).abs() < 1e-9);
}
