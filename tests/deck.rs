//! Deck integration tests.

use deckrs::{
    Card, DealError, Deck, DeckType, PLAIN_DECK_SIZE, ShuffleStrategy, Suit, Value,
    generate_cards,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const PLAIN_CARDS: &str = "SA S2 S3 S4 S5 S6 S7 S8 S9 S10 SJ SQ SK \
    HA H2 H3 H4 H5 H6 H7 H8 H9 H10 HJ HQ HK \
    DA D2 D3 D4 D5 D6 D7 D8 D9 D10 DJ DQ DK \
    CA C2 C3 C4 C5 C6 C7 C8 C9 C10 CJ CQ CK";

fn render(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn sorted(cards: &[Card]) -> Vec<String> {
    let mut rendered: Vec<String> = cards.iter().map(ToString::to_string).collect();
    rendered.sort();
    rendered
}

#[test]
fn plain_deck_is_suit_major_value_minor() {
    let deck = Deck::plain(1);
    assert_eq!(deck.len(), PLAIN_DECK_SIZE);
    assert_eq!(deck.name(), "Plain");
    assert_eq!(render(deck.cards()), PLAIN_CARDS);
}

#[test]
fn default_deck_is_plain_and_unshuffled() {
    let deck = Deck::default();
    assert_eq!(render(deck.cards()), PLAIN_CARDS);
    assert_eq!(deck.deck_type().suits, Suit::STANDARD);
}

#[test]
fn decks_from_same_type_are_equal() {
    let a = Deck::plain(1);
    let b = Deck::plain(2);
    assert_eq!(a.cards(), b.cards());
}

#[test]
fn shuffle_changes_order_and_keeps_cards() {
    let original = Deck::plain(0);

    for seed in 0..32 {
        for shuffle in [ShuffleStrategy::FullRange, ShuffleStrategy::FisherYates] {
            let mut deck = Deck::new(DeckType::plain().with_shuffle(shuffle), seed);
            deck.shuffle();

            assert_eq!(deck.len(), PLAIN_DECK_SIZE);
            assert_ne!(deck.cards(), original.cards(), "seed {seed}, {shuffle:?}");
            assert_eq!(sorted(deck.cards()), sorted(original.cards()));
        }
    }
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut a = Deck::plain(99);
    let mut b = Deck::plain(99);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.cards(), b.cards());

    let mut c = Deck::plain(100);
    c.shuffle();
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn reseed_restarts_shuffle_sequence() {
    let mut a = Deck::plain(3);
    a.shuffle();

    let mut b = Deck::plain(4);
    b.reseed(3);
    b.shuffle();

    assert_eq!(a.cards(), b.cards());
}

#[test]
fn full_range_shuffle_swaps_with_any_position() {
    let mut deck = Deck::plain(0);
    deck.shuffle_with(&mut ChaCha8Rng::seed_from_u64(11));

    let mut expected = Deck::plain(0).cards().to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let len = expected.len();
    for i in 0..len {
        let r = rng.random_range(0..len);
        expected.swap(i, r);
    }

    assert_eq!(deck.cards(), expected.as_slice());
}

#[test]
fn fisher_yates_strategy_is_a_permutation() {
    let deck_type = DeckType::plain().with_shuffle(ShuffleStrategy::FisherYates);
    let mut deck = Deck::new(deck_type, 8);
    deck.shuffle();

    assert_eq!(deck.len(), PLAIN_DECK_SIZE);
    assert_ne!(render(deck.cards()), PLAIN_CARDS);
    assert_eq!(sorted(deck.cards()), sorted(Deck::plain(0).cards()));
}

#[test]
fn deal_takes_from_front_without_growing_storage() {
    let mut deck = Deck::plain(1);
    assert_eq!(deck.capacity(), PLAIN_DECK_SIZE);

    assert_eq!(deck.deal(), Some(Card::new(Suit::Spade, Value::Ace)));
    assert_eq!(deck.len(), 51);
    assert_eq!(deck.cards()[0], Card::new(Suit::Spade, Value::Two));

    for remaining in (0..51).rev() {
        assert!(deck.deal().is_some());
        assert_eq!(deck.len(), remaining);
        assert_eq!(deck.capacity(), deck.len());
    }

    assert!(deck.is_empty());
    assert_eq!(deck.deal(), None);
}

#[test]
fn deal_on_empty_deck_is_idempotent() {
    let mut deck = Deck::new(DeckType::plain().with_build(|_| Vec::new()), 1);
    assert!(deck.is_empty());

    for _ in 0..3 {
        assert_eq!(deck.deal(), None);
        assert!(deck.cards().is_empty());
    }

    deck.shuffle();
    assert!(deck.is_empty());
}

#[test]
fn shuffle_only_touches_undealt_cards() {
    let mut deck = Deck::plain(21);
    let hand = deck.deal_many(10).unwrap();
    deck.shuffle();

    assert_eq!(deck.len(), PLAIN_DECK_SIZE - 10);
    assert!(hand.iter().all(|card| !deck.cards().contains(card)));
}

#[test]
fn deal_many_is_all_or_nothing() {
    let mut deck = Deck::plain(1);

    let hand = deck.deal_many(13).unwrap();
    assert_eq!(render(&hand), "SA S2 S3 S4 S5 S6 S7 S8 S9 S10 SJ SQ SK");
    assert_eq!(deck.len(), 39);

    assert_eq!(
        deck.deal_many(40).unwrap_err(),
        DealError::NotEnoughCards {
            requested: 40,
            remaining: 39,
        }
    );
    assert_eq!(deck.len(), 39);

    assert_eq!(deck.deal_many(39).unwrap().len(), 39);
    assert!(deck.is_empty());
    assert_eq!(deck.deal_many(0).unwrap(), Vec::new());
}

#[test]
fn joker_deck_reset_restores_exact_order() {
    let mut deck = Deck::new(DeckType::joker(), 17);
    let fresh = format!("{PLAIN_CARDS} J");

    deck.shuffle();
    assert_eq!(deck.len(), 53);
    assert_eq!(deck.capacity(), 53);
    assert_ne!(render(deck.cards()), fresh);

    deck.deal_many(20).unwrap();
    deck.reset();
    assert_eq!(deck.len(), 53);
    assert_eq!(deck.capacity(), 53);
    assert_eq!(deck.name(), "Joker");
    assert_eq!(render(deck.cards()), fresh);
}

#[test]
fn custom_build_function_is_used_verbatim() {
    let deck_type = DeckType::plain()
        .with_name("Reversed")
        .with_suits(vec![Suit::Heart])
        .with_build(|deck_type| {
            let mut cards = generate_cards(deck_type);
            cards.reverse();
            cards
        });
    let deck = Deck::new(deck_type, 1);

    assert_eq!(
        render(deck.cards()),
        "HK HQ HJ H10 H9 H8 H7 H6 H5 H4 H3 H2 HA"
    );
}

#[test]
fn unknown_suits_and_values_produce_placeholder_cards() {
    let deck_type = DeckType::plain()
        .with_name("Invalid")
        .with_suits(vec![Suit::Unknown(99)])
        .with_values(vec![Value::from_ordinal(99)]);
    let mut deck = Deck::new(deck_type, 1);

    let card = deck.deal().unwrap();
    assert_eq!(card.to_string(), "??");
    assert_eq!(deck.deal(), None);
}

#[test]
fn empty_suit_or_value_lists_build_empty_decks() {
    let no_suits = Deck::new(DeckType::plain().with_suits(Vec::new()), 1);
    assert!(no_suits.is_empty());

    let mut no_values = Deck::new(DeckType::plain().with_values(Vec::new()), 1);
    assert!(no_values.is_empty());
    no_values.reset();
    assert!(no_values.is_empty());
}
