//! Unit tests for RSI indicator

use ta_consensus::indicators::momentum::calculate_rsi;

#[test]
fn test_rsi_alignment_length() {
    let values: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64).sin()).collect();
    let rsi = calculate_rsi(&values, 14).unwrap();
    assert_eq!(rsi.len(), values.len() - 14);
}

#[test]
fn test_rsi_strictly_increasing_saturates() {
    let values: Vec<f64> = (0..40).map(|i| 50.0 + i as f64 * 1.5).collect();
    let rsi = calculate_rsi(&values, 14).unwrap();
    assert!(rsi.iter().all(|v| *v == 100.0));
}

#[test]
fn test_rsi_strictly_decreasing_goes_to_zero() {
    let values: Vec<f64> = (0..40).map(|i| 200.0 - i as f64 * 2.0).collect();
    let rsi = calculate_rsi(&values, 14).unwrap();
    assert!(rsi.iter().all(|v| v.abs() < 1e-9));
}

#[test]
fn test_rsi_flat_window_is_defined() {
    let rsi = calculate_rsi(&[10.0; 20], 14).unwrap();
    assert!(rsi.iter().all(|v| v.is_finite()));
    assert_eq!(rsi[0], 100.0);
}

#[test]
fn test_rsi_bounded() {
    let values: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.4).sin() * 8.0 + (i as f64 * 0.05))
        .collect();
    let rsi = calculate_rsi(&values, 14).unwrap();
    assert!(rsi.iter().all(|v| (0.0..=100.0).contains(v)));
}

#[test]
fn test_rsi_alternating_is_balanced() {
    let values: Vec<f64> = (0..31).map(|i| if i % 2 == 0 { 100.0 } else { 101.0 }).collect();
    let rsi = calculate_rsi(&values, 14).unwrap();
    // 14 diffs: 7 up, 7 down of equal size
    assert!(rsi.iter().all(|v| (v - 50.0).abs() < 1e-9));
}

#[test]
fn test_rsi_requires_period_plus_one() {
    assert!(calculate_rsi(&[1.0; 14], 14).is_err());
    assert_eq!(calculate_rsi(&[1.0; 15], 14).unwrap().len(), 1);
}
