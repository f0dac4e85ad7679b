//! Price series input records

use crate::error::{AnalysisError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Volume assumed when a data point carries none
pub const DEFAULT_VOLUME: f64 = 1_000_000.0;

/// One bar of a price series. Only the close is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PricePoint {
    pub fn new(close: f64) -> Self {
        Self {
            close,
            volume: None,
            high: None,
            low: None,
            timestamp: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_range(mut self, high: f64, low: f64) -> Self {
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn volume_or_default(&self) -> f64 {
        self.volume.unwrap_or(DEFAULT_VOLUME)
    }

    pub fn high_or_close(&self) -> f64 {
        self.high.unwrap_or(self.close)
    }

    pub fn low_or_close(&self) -> f64 {
        self.low.unwrap_or(self.close)
    }
}

/// Chronological price series, oldest first. The last point is "current".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    /// Build a series from close prices only
    pub fn from_closes(closes: &[f64]) -> Self {
        Self::new(closes.iter().map(|&c| PricePoint::new(c)).collect())
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(PricePoint::volume_or_default).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.points.iter().map(PricePoint::high_or_close).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.points.iter().map(PricePoint::low_or_close).collect()
    }

    pub fn current(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn previous(&self) -> Option<&PricePoint> {
        self.points.len().checked_sub(2).and_then(|i| self.points.get(i))
    }

    /// Reject empty series and closes that are not finite positive numbers
    pub fn validate(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }
        if let Some((index, point)) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.close.is_finite() || p.close <= 0.0)
        {
            return Err(AnalysisError::InvalidPrice {
                index,
                value: point.close,
            });
        }
        Ok(())
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::new(points)
    }
}
