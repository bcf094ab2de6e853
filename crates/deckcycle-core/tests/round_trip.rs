use deckcycle_core::{
    Card, Deck, RoundSimulator, count_rounds_by_cycles, count_rounds_to_original_order, run_round,
};

fn rounds_by_hand(cards: u32) -> u64 {
    let mut deck = Deck::new(cards);
    let mut rounds = 0;
    loop {
        run_round(&mut deck);
        rounds += 1;
        if deck.is_in_order() {
            return rounds;
        }
    }
}

#[test]
fn counts_are_positive_for_every_size() {
    for cards in 0..=40 {
        assert!(count_rounds_to_original_order(cards) >= 1, "{cards} cards");
    }
}

#[test]
fn stepping_rounds_manually_matches_count() {
    for cards in 0..=40 {
        assert_eq!(
            rounds_by_hand(cards),
            count_rounds_to_original_order(cards),
            "{cards} cards"
        );
    }
}

#[test]
fn deck_is_out_of_order_before_final_round() {
    let cards = 13;
    let rounds = count_rounds_to_original_order(cards);
    let mut deck = Deck::new(cards);
    for _ in 1..rounds {
        run_round(&mut deck);
        assert!(!deck.is_in_order());
    }
    run_round(&mut deck);
    assert!(deck.is_in_order());
    assert_eq!(deck, Deck::new(cards));
}

#[test]
fn forty_two_card_deck() {
    assert_eq!(count_rounds_to_original_order(42), 42);
    assert_eq!(RoundSimulator::with_max_rounds(42).count_rounds(42), Ok(42));
    assert_eq!(count_rounds_by_cycles(42), Ok(42));
}

#[test]
fn standard_pack() {
    assert_eq!(count_rounds_to_original_order(52), 510);
}

#[test]
fn round_keeps_the_same_cards() {
    let mut deck = Deck::new(17);
    run_round(&mut deck);
    let mut cards: Vec<Card> = deck.cards().collect();
    cards.sort();
    assert_eq!(Deck::from(cards), Deck::new(17));
}
