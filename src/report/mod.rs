//! Text and JSON rendering of analysis results

use crate::models::analysis::{AnalysisResult, PortfolioAnalysis, SymbolOutcome};
use serde::Serialize;
use std::fmt::Write;

const RULE_WIDTH: usize = 96;

/// Pretty-printed JSON of any result record
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

fn rule_line(out: &mut String, ch: char) {
    out.extend(std::iter::repeat(ch).take(RULE_WIDTH));
    out.push('\n');
}

/// Per-model table followed by consensus, risk, key levels and recommendations
pub fn render_symbol_table(result: &AnalysisResult) -> String {
    let mut out = String::new();
    rule_line(&mut out, '=');
    let _ = writeln!(
        out,
        "{}  |  {}  |  price {:.2}",
        result.symbol,
        result.date.format("%Y-%m-%d"),
        result.current_price
    );
    rule_line(&mut out, '=');

    let _ = writeln!(
        out,
        "{:<28} {:<6} {:>5}  {:<34} {}",
        "Model", "Signal", "Conf", "Timeframe", "Reading"
    );
    rule_line(&mut out, '-');
    for model in &result.model_results {
        let _ = writeln!(
            out,
            "{:<28} {:<6} {:>4}%  {:<34} {}",
            model.model,
            model.signal,
            model.confidence,
            model.timeframe,
            model.analysis.headline()
        );
    }
    for (model, error) in &result.model_errors {
        let _ = writeln!(out, "{:<28} {:<6} {:>5}  {}", model, "ERROR", "-", error);
    }
    rule_line(&mut out, '-');

    let consensus = &result.consensus;
    let _ = writeln!(
        out,
        "Consensus: {} ({}%) - {} [{} models]",
        consensus.signal, consensus.confidence, consensus.agreement, consensus.model_count
    );
    match &result.risk_assessment {
        Some(risk) => {
            let _ = writeln!(
                out,
                "Risk: {} (ATR {:.2}, {:.2}% of price)",
                risk.level, risk.atr, risk.atr_percent
            );
        }
        None => {
            let _ = writeln!(out, "Risk: Unknown");
        }
    }
    let levels = &result.key_levels;
    let _ = writeln!(
        out,
        "Support {:.2}  Resistance {:.2}  Recent high {:.2}  Recent low {:.2}  Range {:.2}%",
        levels.support, levels.resistance, levels.recent_high, levels.recent_low, levels.range
    );
    for rec in &result.recommendations {
        let _ = writeln!(out, "  {:<13} {}. {}", rec.action, rec.position_size, rec.reasoning);
    }
    out
}

/// One row per symbol, then the portfolio summary
pub fn render_portfolio_table(portfolio: &PortfolioAnalysis) -> String {
    let mut out = String::new();
    rule_line(&mut out, '=');
    let _ = writeln!(
        out,
        "{:<12} {:<6} {:>5}  {:<18} {:>10}  {}",
        "Symbol", "Signal", "Conf", "Agreement", "Price", "Risk"
    );
    rule_line(&mut out, '-');

    for outcome in &portfolio.individual_analyses {
        match outcome {
            SymbolOutcome::Success(result) => {
                let risk = result
                    .risk_assessment
                    .as_ref()
                    .map(|r| r.level.as_str())
                    .unwrap_or("Unknown");
                let _ = writeln!(
                    out,
                    "{:<12} {:<6} {:>4}%  {:<18} {:>10.2}  {}",
                    result.symbol,
                    result.consensus.signal,
                    result.consensus.confidence,
                    result.consensus.agreement,
                    result.current_price,
                    risk
                );
            }
            SymbolOutcome::Failure { symbol, error } => {
                let _ = writeln!(out, "{:<12} {:<6} {:>5}  {}", symbol, "ERROR", "-", error);
            }
        }
    }
    rule_line(&mut out, '-');

    let summary = &portfolio.summary;
    let _ = writeln!(
        out,
        "Analyzed {}/{} symbols ({} failed)",
        summary.analyzed, summary.total_symbols, summary.failed
    );
    let _ = writeln!(
        out,
        "Signals: {} BUY, {} SELL, {} HOLD, {} WAIT  |  avg confidence {:.1}%",
        summary.signal_counts.buy,
        summary.signal_counts.sell,
        summary.signal_counts.hold,
        summary.signal_counts.wait,
        summary.average_confidence
    );
    let _ = writeln!(out, "Recommendation: {}", summary.recommendation);
    rule_line(&mut out, '=');
    out
}
