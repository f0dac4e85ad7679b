//! Consensus, risk and key-level derivation over model results.

pub mod aggregation;
pub mod decision;
pub mod levels;
pub mod risk;

pub use aggregation::ConsensusAggregator;
pub use decision::build_recommendations;
pub use levels::derive_key_levels;
pub use risk::assess_risk;
