pub mod cycles;
pub mod round;

use thiserror::Error;

/// Failures of a round count that cannot complete as asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("deck of {cards} cards not back in order after {limit} rounds")]
    RoundLimitExceeded { cards: u32, limit: u64 },
    #[error("round count for a deck of {cards} cards does not fit in 64 bits")]
    Overflow { cards: u32 },
}
