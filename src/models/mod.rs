//! Shared data models spanning the analysis layers.

pub mod analysis;
pub mod price;
pub mod signal;

pub use analysis::{
    AnalysisResult, ConsensusResult, PortfolioAnalysis, PortfolioSummary, Recommendation,
    RiskAssessment, RiskLevel, SignalDistribution, SymbolKeyLevels, SymbolOutcome,
};
pub use price::{PricePoint, PriceSeries, DEFAULT_VOLUME};
pub use signal::{
    BandWalk, BollingerAnalysis, Crossover, CrossoverKind, Divergence, KeyLevel, MacdAnalysis,
    ModelAnalysis, ModelResult, MovingAverageAnalysis, RsiAnalysis, Signal,
};
