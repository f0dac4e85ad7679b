//! Signal models that consume indicators and emit a directional call.

pub mod bollinger_bands;
pub mod ma_crossover;
pub mod macd_momentum;
pub mod rsi_mean_reversion;
pub mod rules;

pub use bollinger_bands::BollingerBandsModel;
pub use ma_crossover::MovingAverageCrossoverModel;
pub use macd_momentum::MacdMomentumModel;
pub use rsi_mean_reversion::RsiMeanReversionModel;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::models::price::PriceSeries;
use crate::models::signal::ModelResult;

/// A strategy evaluated over a whole price series
pub trait SignalModel: Send + Sync {
    /// Display name including parameters
    fn name(&self) -> String;

    /// Shortest series the model accepts
    fn minimum_lookback(&self) -> usize;

    /// Evaluate the series; fails with `InsufficientData` below the minimum lookback
    fn analyze(&self, series: &PriceSeries) -> Result<ModelResult>;
}

/// The four models with parameters taken from `config`, in reporting order
pub fn default_models(config: &AnalysisConfig) -> Vec<Box<dyn SignalModel>> {
    vec![
        Box::new(MovingAverageCrossoverModel::new(config.ma_crossover)),
        Box::new(RsiMeanReversionModel::new(config.rsi)),
        Box::new(MacdMomentumModel::new(config.macd)),
        Box::new(BollingerBandsModel::new(config.bollinger)),
    ]
}

/// Reject series shorter than the model's minimum lookback
pub(crate) fn ensure_lookback(model: &dyn SignalModel, series: &PriceSeries) -> Result<()> {
    let required = model.minimum_lookback();
    if series.len() < required {
        return Err(AnalysisError::InsufficientData {
            model: model.name(),
            required,
            available: series.len(),
        });
    }
    Ok(())
}

/// Close of the last point, once the lookback check has passed
pub(crate) fn current_close(series: &PriceSeries) -> Result<f64> {
    series
        .current()
        .map(|p| p.close)
        .ok_or(AnalysisError::EmptySeries)
}

pub(crate) fn fmt_level(value: f64) -> String {
    format!("{:.2}", value)
}
