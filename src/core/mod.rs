//! Core application primitives (orchestration)

pub mod orchestrator;

pub use orchestrator::{summarize_portfolio, AnalysisOrchestrator};
