use crate::model::card::Card;
use crate::model::table::Table;
use core::fmt;
use std::collections::VecDeque;
use thiserror::Error;

/// Ordered pile of cards held face down; the front is the top of the deck.
///
/// Cards are expected to be unique, but nothing here enforces it: every
/// insertion trusts the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: VecDeque<Card>,
}

/// Misuse of a deck surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("position {pos} is out of range for a deck of {len} cards")]
    OutOfRange { pos: usize, len: usize },
    #[error("cannot remove a card from an empty deck")]
    EmptyDeck,
}

impl Deck {
    /// Deck holding `0..count` in ascending order from the top.
    pub fn new(count: u32) -> Self {
        Self {
            cards: (0..count).map(Card::new).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub fn card_at(&self, pos: usize) -> Result<Card, DeckError> {
        self.cards.get(pos).copied().ok_or(DeckError::OutOfRange {
            pos,
            len: self.cards.len(),
        })
    }

    /// True when the card at every position `i` is `i`. An empty deck qualifies.
    pub fn is_in_order(&self) -> bool {
        self.cards
            .iter()
            .enumerate()
            .all(|(position, card)| card.is_at(position))
    }

    pub fn add_new_card_to_top(&mut self) -> Card {
        let card = self.next_card();
        self.cards.push_front(card);
        card
    }

    pub fn add_new_card_to_bottom(&mut self) -> Card {
        let card = self.next_card();
        self.cards.push_back(card);
        card
    }

    pub fn add_card_to_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    pub fn add_card_to_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn remove_card_from_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::EmptyDeck)
    }

    pub fn remove_card_from_bottom(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_back().ok_or(DeckError::EmptyDeck)
    }

    /// Appends `cards` to the bottom in iteration order. Existing cards stay.
    pub fn reset_with<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Picks the pile up off the table: cards are popped one at a time and
    /// appended to the bottom, leaving the table empty.
    pub fn reset_with_table(&mut self, table: &mut Table) {
        self.cards.reserve(table.len());
        while let Some(card) = table.pop() {
            self.cards.push_back(card);
        }
    }

    pub(crate) fn take_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    // Values past u32::MAX cannot be represented; such a deck never occurs in practice.
    fn next_card(&self) -> Card {
        Card::new(u32::try_from(self.cards.len()).unwrap_or(u32::MAX))
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
