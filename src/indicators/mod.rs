//! Indicator library: pure functions over numeric series.

pub mod error;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use error::IndicatorError;
pub use momentum::{calculate_macd, calculate_rsi, MacdSeries};
pub use trend::{calculate_ema, calculate_sma};
pub use volatility::{calculate_atr, calculate_bollinger_bands, BollingerSeries};
