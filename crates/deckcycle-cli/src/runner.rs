use deckcycle_core::{RoundSimulator, SimulationError, count_rounds_by_cycles};
use serde::Serialize;
use tracing::info;

use crate::config::{Method, OutputFormat, RunConfig};

/// Outcome of one invocation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    pub cards: u32,
    pub rounds: u64,
    pub method: Method,
}

impl RunSummary {
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Plain => Ok(self.rounds.to_string()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

/// Count rounds for a deck of `cards` cards with the configured method.
pub fn run(config: &RunConfig, cards: u32) -> Result<RunSummary, SimulationError> {
    let rounds = match config.method {
        Method::Simulate => {
            let simulator = match config.max_rounds {
                Some(limit) => RoundSimulator::with_max_rounds(limit),
                None => RoundSimulator::new(),
            };
            simulator.count_rounds(cards)?
        }
        Method::Cycles => count_rounds_by_cycles(cards)?,
    };

    info!(cards, rounds, method = ?config.method, "round count complete");
    Ok(RunSummary {
        cards,
        rounds,
        method: config.method,
    })
}
