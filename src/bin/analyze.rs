//! Technical analysis runner
//!
//! Loads price series from a JSON file, runs every signal model per symbol and
//! prints a table (or JSON) report.

use dotenvy::dotenv;
use std::env;
use ta_consensus::config::{get_environment, AnalysisConfig};
use ta_consensus::logging;
use ta_consensus::report;
use ta_consensus::services::market_data::{JsonFileProvider, PriceDataProvider};
use ta_consensus::AnalysisOrchestrator;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let price_file = env::var("TA_PRICE_FILE")
        .map_err(|_| "TA_PRICE_FILE environment variable is required")?;
    let output = env::var("TA_OUTPUT").unwrap_or_else(|_| "table".to_string());

    let config = AnalysisConfig::from_env()?;
    info!(environment = %get_environment(), price_file = %price_file, "Starting analysis");

    let provider = JsonFileProvider::from_path(&price_file)?;

    let symbols: Vec<String> = env::var("TA_SYMBOLS")
        .ok()
        .map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| provider.symbols());

    let entries: Vec<_> = symbols
        .iter()
        .filter_map(|symbol| match provider.get_prices(symbol) {
            Ok(series) => Some((symbol.clone(), series)),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Skipping symbol");
                None
            }
        })
        .collect();

    let orchestrator = AnalysisOrchestrator::new(&config);
    let portfolio = orchestrator.analyze_multiple_symbols(&entries);

    match output.as_str() {
        "json" => println!("{}", report::to_json(&portfolio)?),
        _ => {
            for analysis in portfolio
                .individual_analyses
                .iter()
                .filter_map(|outcome| outcome.analysis())
            {
                println!("{}", report::render_symbol_table(analysis));
            }
            println!("{}", report::render_portfolio_table(&portfolio));
        }
    }

    Ok(())
}
