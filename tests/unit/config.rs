//! Unit tests for analysis configuration

use ta_consensus::config::{AnalysisConfig, MacdParams};
use ta_consensus::AnalysisError;

#[test]
fn test_default_parameters() {
    let config = AnalysisConfig::default();
    assert_eq!(config.ma_crossover.fast_period, 50);
    assert_eq!(config.ma_crossover.slow_period, 200);
    assert_eq!(config.rsi.period, 14);
    assert_eq!(config.rsi.oversold, 30.0);
    assert_eq!(config.rsi.overbought, 70.0);
    assert_eq!(config.macd, MacdParams::default());
    assert_eq!(config.bollinger.period, 20);
    assert_eq!(config.bollinger.std_dev, 2.0);
    assert_eq!(config.risk.atr_period, 14);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: AnalysisConfig = serde_json::from_str(
        r#"{"macd": {"fast_period": 8, "slow_period": 21, "signal_period": 5}}"#,
    )
    .unwrap();
    assert_eq!(config.macd.fast_period, 8);
    assert_eq!(config.rsi.period, 14);
    assert!(config.validate().is_ok());
}

#[test]
fn test_fast_period_must_be_below_slow() {
    let mut config = AnalysisConfig::default();
    config.ma_crossover.fast_period = 200;
    assert!(matches!(config.validate(), Err(AnalysisError::Config(_))));

    let mut config = AnalysisConfig::default();
    config.macd.slow_period = 12;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("MACD"));
}

#[test]
fn test_std_dev_must_be_positive() {
    let mut config = AnalysisConfig::default();
    config.bollinger.std_dev = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_rsi_thresholds_within_range() {
    let mut config = AnalysisConfig::default();
    config.rsi.overbought = 120.0;
    assert!(config.validate().is_err());
}
