//! Ordered rule chains folded into a (signal, confidence, reasoning) verdict

use crate::models::signal::Signal;

/// How a rule changes the running signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalUpdate {
    Keep,
    /// Replace the running signal unconditionally
    Force(Signal),
    /// Replace the running signal unless it already points the opposite way
    Tentative(Signal),
}

/// Contribution of one rule that fired
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub signal: SignalUpdate,
    pub confidence_delta: i32,
    pub reasoning: Option<String>,
}

impl RuleOutcome {
    pub fn new(signal: SignalUpdate, confidence_delta: i32, reasoning: impl Into<String>) -> Self {
        Self {
            signal,
            confidence_delta,
            reasoning: Some(reasoning.into()),
        }
    }

    /// Confidence change that leaves the signal alone
    pub fn adjust(confidence_delta: i32, reasoning: impl Into<String>) -> Self {
        Self::new(SignalUpdate::Keep, confidence_delta, reasoning)
    }

    /// Reasoning line only
    pub fn note(reasoning: impl Into<String>) -> Self {
        Self::adjust(0, reasoning)
    }
}

/// Running state of a rule chain
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub signal: Signal,
    pub confidence: i32,
    pub reasoning: Vec<String>,
}

impl Default for Verdict {
    fn default() -> Self {
        Self {
            signal: Signal::Hold,
            confidence: 0,
            reasoning: Vec::new(),
        }
    }
}

impl Verdict {
    pub fn apply(mut self, outcome: RuleOutcome) -> Self {
        self.signal = match outcome.signal {
            SignalUpdate::Keep => self.signal,
            SignalUpdate::Force(signal) => signal,
            SignalUpdate::Tentative(signal) => {
                if is_opposite(self.signal, signal) {
                    self.signal
                } else {
                    signal
                }
            }
        };
        self.confidence += outcome.confidence_delta;
        if let Some(line) = outcome.reasoning {
            self.reasoning.push(line);
        }
        self
    }

    /// Confidence clamped into 0..=100
    pub fn clamped_confidence(&self) -> u8 {
        self.confidence.clamp(0, 100) as u8
    }
}

fn is_opposite(current: Signal, proposed: Signal) -> bool {
    matches!(
        (current, proposed),
        (Signal::Buy, Signal::Sell) | (Signal::Sell, Signal::Buy)
    )
}

/// A rule sees the verdict accumulated so far and may contribute an outcome
pub type Rule<'a> = Box<dyn Fn(&Verdict) -> Option<RuleOutcome> + 'a>;

/// Box a closure as a rule
pub fn rule<'a>(f: impl Fn(&Verdict) -> Option<RuleOutcome> + 'a) -> Rule<'a> {
    Box::new(f)
}

/// Fold rules in declared order, starting from HOLD with zero confidence
pub fn evaluate(rules: &[Rule<'_>]) -> Verdict {
    rules.iter().fold(Verdict::default(), |verdict, rule| {
        match rule(&verdict) {
            Some(outcome) => verdict.apply(outcome),
            None => verdict,
        }
    })
}
