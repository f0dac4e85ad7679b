//! Unit tests for MACD indicator

use ta_consensus::indicators::momentum::{calculate_macd, calculate_macd_default};
use ta_consensus::indicators::trend::calculate_ema;

fn wave(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + (i as f64 * 0.3).sin() * 4.0 + i as f64 * 0.1)
        .collect()
}

#[test]
fn test_macd_histogram_identity() {
    let macd = calculate_macd_default(&wave(80)).unwrap();
    assert_eq!(macd.len(), 80);
    for i in 0..macd.len() {
        assert_eq!(macd.histogram[i], macd.macd[i] - macd.signal[i]);
    }
}

#[test]
fn test_macd_line_is_ema_difference() {
    let values = wave(60);
    let macd = calculate_macd(&values, 12, 26, 9).unwrap();
    let fast = calculate_ema(&values, 12).unwrap();
    let slow = calculate_ema(&values, 26).unwrap();
    assert_eq!(macd.macd[59], fast[59] - slow[59]);
    assert_eq!(macd.macd[0], 0.0);
}

#[test]
fn test_macd_positive_in_uptrend() {
    let values: Vec<f64> = (0..100).map(|i| 100.0 + i as f64).collect();
    let macd = calculate_macd_default(&values).unwrap();
    assert!(macd.macd[99] > 0.0);
}

#[test]
fn test_macd_invalid_signal_period() {
    assert!(calculate_macd(&wave(40), 12, 26, 0).is_err());
}
