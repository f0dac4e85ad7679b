//! Price data provider interface and file/memory implementations.

use crate::error::{AnalysisError, Result};
use crate::models::price::{PricePoint, PriceSeries};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

pub trait PriceDataProvider {
    /// Chronological price series for a symbol, oldest first
    fn get_prices(&self, symbol: &str) -> Result<PriceSeries>;

    /// Symbols this provider can serve, sorted
    fn symbols(&self) -> Vec<String>;
}

/// Provider backed by series held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    series: BTreeMap<String, PriceSeries>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: impl Into<String>, series: PriceSeries) -> Self {
        self.insert(symbol, series);
        self
    }

    pub fn insert(&mut self, symbol: impl Into<String>, series: PriceSeries) {
        self.series.insert(symbol.into(), series);
    }
}

impl PriceDataProvider for InMemoryProvider {
    fn get_prices(&self, symbol: &str) -> Result<PriceSeries> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| AnalysisError::Provider(format!("Unknown symbol: {}", symbol)))
    }

    fn symbols(&self) -> Vec<String> {
        self.series.keys().cloned().collect()
    }
}

/// Provider reading a JSON object of `symbol -> [PricePoint, ...]`
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    inner: InMemoryProvider,
}

impl JsonFileProvider {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AnalysisError::Provider(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let provider = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            symbols = provider.inner.series.len(),
            "Loaded price file"
        );
        Ok(provider)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: BTreeMap<String, Vec<PricePoint>> = serde_json::from_str(raw)
            .map_err(|e| AnalysisError::Provider(format!("Invalid price JSON: {}", e)))?;
        let inner = parsed
            .into_iter()
            .fold(InMemoryProvider::new(), |provider, (symbol, points)| {
                provider.with_series(symbol, PriceSeries::new(points))
            });
        Ok(Self { inner })
    }
}

impl PriceDataProvider for JsonFileProvider {
    fn get_prices(&self, symbol: &str) -> Result<PriceSeries> {
        self.inner.get_prices(symbol)
    }

    fn symbols(&self) -> Vec<String> {
        self.inner.symbols()
    }
}
