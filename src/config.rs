//! Model parameters and environment configuration

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Deployment environment name, from `APP_ENV` (default `development`)
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaCrossoverParams {
    pub fast_period: usize,
    pub slow_period: usize,
}

impl Default for MaCrossoverParams {
    fn default() -> Self {
        Self {
            fast_period: 50,
            slow_period: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiParams {
    pub period: usize,
    pub oversold: f64,
    pub overbought: f64,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self {
            period: 14,
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    pub period: usize,
    pub std_dev: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskParams {
    pub atr_period: usize,
}

impl Default for RiskParams {
    fn default() -> Self {
        Self { atr_period: 14 }
    }
}

/// Parameter set for every model run by the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub ma_crossover: MaCrossoverParams,
    pub rsi: RsiParams,
    pub macd: MacdParams,
    pub bollinger: BollingerParams,
    pub risk: RiskParams,
}

impl AnalysisConfig {
    /// Defaults overridden by `TA_*` environment variables, then validated
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            ma_crossover: MaCrossoverParams {
                fast_period: env_or("TA_MA_FAST", defaults.ma_crossover.fast_period),
                slow_period: env_or("TA_MA_SLOW", defaults.ma_crossover.slow_period),
            },
            rsi: RsiParams {
                period: env_or("TA_RSI_PERIOD", defaults.rsi.period),
                oversold: env_or("TA_RSI_OVERSOLD", defaults.rsi.oversold),
                overbought: env_or("TA_RSI_OVERBOUGHT", defaults.rsi.overbought),
            },
            macd: MacdParams {
                fast_period: env_or("TA_MACD_FAST", defaults.macd.fast_period),
                slow_period: env_or("TA_MACD_SLOW", defaults.macd.slow_period),
                signal_period: env_or("TA_MACD_SIGNAL", defaults.macd.signal_period),
            },
            bollinger: BollingerParams {
                period: env_or("TA_BB_PERIOD", defaults.bollinger.period),
                std_dev: env_or("TA_BB_STD_DEV", defaults.bollinger.std_dev),
            },
            risk: RiskParams {
                atr_period: env_or("TA_ATR_PERIOD", defaults.risk.atr_period),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("ma_crossover.fast_period", self.ma_crossover.fast_period),
            ("ma_crossover.slow_period", self.ma_crossover.slow_period),
            ("rsi.period", self.rsi.period),
            ("macd.fast_period", self.macd.fast_period),
            ("macd.slow_period", self.macd.slow_period),
            ("macd.signal_period", self.macd.signal_period),
            ("bollinger.period", self.bollinger.period),
            ("risk.atr_period", self.risk.atr_period),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, period)| *period == 0) {
            return Err(AnalysisError::Config(format!("{} must be greater than zero", name)));
        }

        if self.ma_crossover.fast_period >= self.ma_crossover.slow_period {
            return Err(AnalysisError::Config(format!(
                "MA fast period ({}) must be below slow period ({})",
                self.ma_crossover.fast_period, self.ma_crossover.slow_period
            )));
        }
        if self.macd.fast_period >= self.macd.slow_period {
            return Err(AnalysisError::Config(format!(
                "MACD fast period ({}) must be below slow period ({})",
                self.macd.fast_period, self.macd.slow_period
            )));
        }
        if !(0.0..=100.0).contains(&self.rsi.oversold)
            || !(0.0..=100.0).contains(&self.rsi.overbought)
            || self.rsi.oversold >= self.rsi.overbought
        {
            return Err(AnalysisError::Config(format!(
                "RSI thresholds must satisfy 0 <= oversold ({}) < overbought ({}) <= 100",
                self.rsi.oversold, self.rsi.overbought
            )));
        }
        if !self.bollinger.std_dev.is_finite() || self.bollinger.std_dev <= 0.0 {
            return Err(AnalysisError::Config(format!(
                "Bollinger std-dev multiplier must be positive, got {}",
                self.bollinger.std_dev
            )));
        }
        Ok(())
    }
}
