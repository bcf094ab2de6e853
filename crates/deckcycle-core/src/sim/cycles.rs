//! Round counts from the cycle structure of a single round.
//!
//! One round always moves cards the same way, so it is a fixed permutation
//! of deck positions. A deck returns to its starting order after a number
//! of rounds equal to the order of that permutation: the least common
//! multiple of its cycle lengths.

use crate::model::deck::Deck;
use crate::sim::SimulationError;
use crate::sim::round::run_round;
use tracing::debug;

/// Where each card of an ascending deck ends up after one round:
/// entry `i` is the card found at position `i`.
pub fn round_permutation(cards: u32) -> Vec<usize> {
    let mut deck = Deck::new(cards);
    run_round(&mut deck);
    deck.cards()
        .map(|card| usize::try_from(card.value()).unwrap_or(usize::MAX))
        .collect()
}

/// Lengths of the non-trivial cycles of `permutation`, in order of their
/// smallest position. Fixed points are left out.
pub fn cycle_lengths(permutation: &[usize]) -> Vec<u64> {
    let mut visited = vec![false; permutation.len()];
    let mut lengths = Vec::new();

    for start in 0..permutation.len() {
        if visited[start] || permutation[start] == start {
            visited[start] = true;
            continue;
        }

        let mut length = 0u64;
        let mut position = start;
        while let Some(seen) = visited.get_mut(position) {
            if *seen {
                break;
            }
            *seen = true;
            length += 1;
            position = permutation[position];
        }
        lengths.push(length);
    }

    lengths
}

/// Same answer as [`count_rounds_to_original_order`](crate::sim::round::count_rounds_to_original_order),
/// computed from a single round.
pub fn count_rounds_by_cycles(cards: u32) -> Result<u64, SimulationError> {
    let lengths = cycle_lengths(&round_permutation(cards));
    let rounds = lengths
        .iter()
        .try_fold(1u64, |acc, &length| lcm(acc, length))
        .ok_or(SimulationError::Overflow { cards })?;
    debug!(cards, cycles = lengths.len(), rounds, "round count from cycles");
    Ok(rounds)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

#[cfg(test)]
mod tests {
    use super::{count_rounds_by_cycles, cycle_lengths, gcd, lcm, round_permutation};
    use crate::sim::round::count_rounds_to_original_order;

    #[test]
    fn five_card_round_is_a_single_cycle() {
        let permutation = round_permutation(5);
        assert_eq!(permutation, vec![1, 3, 4, 2, 0]);
        assert_eq!(cycle_lengths(&permutation), vec![5]);
    }

    #[test]
    fn fixed_points_are_skipped() {
        assert_eq!(cycle_lengths(&[0, 1, 2]), Vec::<u64>::new());
        assert_eq!(cycle_lengths(&[3, 1, 2, 0]), vec![2]);
        assert_eq!(cycle_lengths(&[1, 0, 3, 4, 2]), vec![2, 3]);
    }

    #[test]
    fn empty_and_single_decks_need_one_round() {
        assert_eq!(count_rounds_by_cycles(0), Ok(1));
        assert_eq!(count_rounds_by_cycles(1), Ok(1));
    }

    #[test]
    fn agrees_with_simulation() {
        for cards in 0..=64 {
            assert_eq!(
                count_rounds_by_cycles(cards),
                Ok(count_rounds_to_original_order(cards)),
                "{cards} cards"
            );
        }
    }

    #[test]
    fn full_pack_sizes() {
        assert_eq!(count_rounds_by_cycles(42), Ok(42));
        assert_eq!(count_rounds_by_cycles(52), Ok(510));
        assert_eq!(count_rounds_by_cycles(100), Ok(120));
    }

    #[test]
    fn lcm_helpers() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(u64::MAX, 2), None);
    }
}
