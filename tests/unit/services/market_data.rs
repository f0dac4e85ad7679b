//! Unit tests for price data providers

use ta_consensus::models::PriceSeries;
use ta_consensus::services::{InMemoryProvider, JsonFileProvider, PriceDataProvider};
use ta_consensus::AnalysisError;

#[test]
fn test_in_memory_provider() {
    let provider = InMemoryProvider::new()
        .with_series("MSFT", PriceSeries::from_closes(&[1.0, 2.0]))
        .with_series("AAPL", PriceSeries::from_closes(&[3.0]));

    assert_eq!(provider.symbols(), vec!["AAPL".to_string(), "MSFT".to_string()]);
    assert_eq!(provider.get_prices("MSFT").unwrap().len(), 2);
    assert!(matches!(
        provider.get_prices("TSLA"),
        Err(AnalysisError::Provider(_))
    ));
}

#[test]
fn test_json_provider_parses_optional_fields() {
    let raw = r#"{
        "BTC": [
            {"close": 100.0},
            {"close": 101.5, "volume": 2500.0, "high": 102.0, "low": 99.0,
             "timestamp": "2024-03-01T00:00:00Z"}
        ]
    }"#;
    let provider = JsonFileProvider::from_json(raw).unwrap();
    let series = provider.get_prices("BTC").unwrap();

    assert_eq!(series.closes(), vec![100.0, 101.5]);
    assert_eq!(series.volumes()[1], 2500.0);
    assert_eq!(series.highs(), vec![100.0, 102.0]);
    assert!(series.points()[1].timestamp.is_some());
}

#[test]
fn test_json_provider_rejects_bad_input() {
    assert!(matches!(
        JsonFileProvider::from_json("[1, 2, 3]"),
        Err(AnalysisError::Provider(_))
    ));
}

#[test]
fn test_missing_file() {
    let err = JsonFileProvider::from_path("/nonexistent/prices.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
