use core::fmt;

/// A card is identified by its integer value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u32);

impl Card {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Whether this card sits where it belongs in an ascending deck.
    pub fn is_at(self, position: usize) -> bool {
        usize::try_from(self.0).is_ok_and(|value| value == position)
    }
}

impl From<u32> for Card {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Card;

    #[test]
    fn card_displays_its_value() {
        assert_eq!(Card::new(41).to_string(), "41");
    }

    #[test]
    fn card_knows_its_home_position() {
        let card = Card::new(3);
        assert!(card.is_at(3));
        assert!(!card.is_at(2));
    }

    #[test]
    fn cards_order_by_value() {
        assert!(Card::new(1) < Card::new(2));
        assert_eq!(u32::from(Card::from(7)), 7);
    }
}
