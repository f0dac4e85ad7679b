//! Technical-analysis signal models with consensus voting.
//!
//! Indicators feed four independent signal models; their results are combined
//! into a consensus per symbol and summarized across a portfolio.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
pub mod strategies;

pub use crate::core::AnalysisOrchestrator;
pub use error::{AnalysisError, Result};
pub use models::{AnalysisResult, ModelResult, PortfolioAnalysis, PricePoint, PriceSeries, Signal};
pub use strategies::SignalModel;
