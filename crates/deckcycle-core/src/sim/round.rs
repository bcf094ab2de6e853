use crate::model::deck::Deck;
use crate::model::table::Table;
use crate::sim::SimulationError;
use tracing::{debug, trace};

/// Deals the whole deck once: alternately a card onto the table and a card
/// under the deck, with the final card always going to the table. The table
/// pile is then picked up onto the deck. Returns the number of steps taken,
/// one per card taken off the top. Cards put under the deck are taken off
/// again later, so a deck of `n >= 2` cards takes `2n - 2` steps.
pub fn run_round(deck: &mut Deck) -> usize {
    let mut table = Table::with_capacity(deck.count());
    let mut step = 0usize;

    while let Some(card) = deck.take_top() {
        if step % 2 == 0 || deck.is_empty() {
            table.push(card);
        } else {
            deck.add_card_to_bottom(card);
        }
        step += 1;
    }

    deck.reset_with_table(&mut table);
    step
}

/// Rounds needed for a fresh deck of `cards` cards to come back to
/// ascending order. At least one round is always dealt, so an empty or
/// single-card deck reports 1.
pub fn count_rounds_to_original_order(cards: u32) -> u64 {
    deal_until_in_order(cards, None).expect("unlimited dealing ends in order")
}

/// Round counter with an optional cap on how many rounds it will deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundSimulator {
    max_rounds: Option<u64>,
}

impl RoundSimulator {
    pub const fn new() -> Self {
        Self { max_rounds: None }
    }

    pub const fn with_max_rounds(limit: u64) -> Self {
        Self {
            max_rounds: Some(limit),
        }
    }

    pub fn count_rounds(&self, cards: u32) -> Result<u64, SimulationError> {
        deal_until_in_order(cards, self.max_rounds)
    }
}

fn deal_until_in_order(cards: u32, limit: Option<u64>) -> Result<u64, SimulationError> {
    let mut deck = Deck::new(cards);
    let mut rounds = 0u64;
    loop {
        if let Some(limit) = limit.filter(|&limit| rounds >= limit) {
            return Err(SimulationError::RoundLimitExceeded { cards, limit });
        }
        run_round(&mut deck);
        rounds += 1;
        trace!(cards, rounds, deck = %deck, "round dealt");
        if deck.is_in_order() {
            debug!(cards, rounds, ?limit, "deck back in original order");
            return Ok(rounds);
        }
    }
}
