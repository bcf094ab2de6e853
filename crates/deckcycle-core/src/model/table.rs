use crate::model::card::Card;
use std::vec::Vec;

/// Face-down pile that dealt cards are stacked onto during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pile: Vec<Card>,
}

impl Table {
    pub fn new() -> Self {
        Self { pile: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pile: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.pile.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.pile.pop()
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }
}

impl FromIterator<Card> for Table {
    /// Pushes the cards in iteration order; the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            pile: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Table;
    use crate::model::card::Card;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut table = Table::new();
        table.push(Card::new(0));
        table.push(Card::new(1));
        assert_eq!(table.pop(), Some(Card::new(1)));
        assert_eq!(table.pop(), Some(Card::new(0)));
        assert_eq!(table.pop(), None);
        assert!(table.is_empty());
    }

    #[test]
    fn collects_as_successive_pushes() {
        let mut table: Table = [4, 5, 6].into_iter().map(Card::new).collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.pop(), Some(Card::new(6)));
        assert_eq!(table.len(), 2);
    }
}
