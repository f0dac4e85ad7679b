//! Unit tests for EMA indicator

use ta_consensus::indicators::trend::calculate_ema;
use ta_consensus::indicators::IndicatorError;

#[test]
fn test_ema_is_full_length_and_seeded() {
    let values: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    let ema = calculate_ema(&values, 12).unwrap();
    assert_eq!(ema.len(), values.len());
    assert_eq!(ema[0], values[0]);
}

#[test]
fn test_ema_single_point() {
    let ema = calculate_ema(&[7.0], 50).unwrap();
    assert_eq!(ema, vec![7.0]);
}

#[test]
fn test_ema_recurrence() {
    let ema = calculate_ema(&[10.0, 20.0, 30.0], 3).unwrap();
    // k = 0.5
    assert_eq!(ema[1], 15.0);
    assert_eq!(ema[2], 22.5);
}

#[test]
fn test_ema_lags_rising_series() {
    let values: Vec<f64> = (0..40).map(|i| i as f64).collect();
    let ema = calculate_ema(&values, 10).unwrap();
    assert!(ema.iter().zip(&values).skip(1).all(|(e, v)| e < v));
}

#[test]
fn test_ema_empty_input() {
    assert!(matches!(
        calculate_ema(&[], 5),
        Err(IndicatorError::InsufficientData { .. })
    ));
}
