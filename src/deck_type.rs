//! Deck configurations.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, PLAIN_DECK_SIZE, Suit, Value};

/// Builds the card sequence for a deck configuration.
///
/// Called on every construction and reset, so it must depend on nothing but
/// its argument.
pub type BuildFn = fn(&DeckType) -> Vec<Card>;

/// How [`Deck::shuffle`](crate::Deck::shuffle) permutes the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShuffleStrategy {
    /// Walks every position and swaps it with a position drawn from the
    /// whole deck. Always a permutation, but not exactly uniform.
    #[default]
    FullRange,
    /// Unbiased Fisher-Yates, swapping each position with one drawn from the
    /// not-yet-visited remainder.
    FisherYates,
}

/// Describes a kind of deck: which suits and values it uses and how its
/// cards are generated.
///
/// Suits and values outside the known set are allowed and produce cards that
/// render with `?` placeholders.
///
/// ```
/// use deckrs::{DeckType, Value};
///
/// let piquet = DeckType::plain()
///     .with_name("Piquet")
///     .with_values(vec![Value::Ace, Value::Seven, Value::Eight, Value::Nine,
///         Value::Ten, Value::Jack, Value::Queen, Value::King]);
/// assert_eq!((piquet.build)(&piquet).len(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct DeckType {
    /// Display name.
    pub name: String,
    /// Suits to include, in deck order.
    pub suits: Vec<Suit>,
    /// Values to include, in deck order.
    pub values: Vec<Value>,
    /// Card generation function.
    pub build: BuildFn,
    /// Shuffle algorithm.
    pub shuffle: ShuffleStrategy,
}

impl DeckType {
    /// The plain 52-card deck: four suits, Ace through King.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            name: String::from("Plain"),
            suits: Suit::STANDARD.to_vec(),
            values: Value::STANDARD.to_vec(),
            build: generate_cards,
            shuffle: ShuffleStrategy::FullRange,
        }
    }

    /// The plain deck followed by a single joker, 53 cards.
    #[must_use]
    pub fn joker() -> Self {
        Self::plain()
            .with_name("Joker")
            .with_build(generate_with_joker)
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the suits.
    #[must_use]
    pub fn with_suits(mut self, suits: Vec<Suit>) -> Self {
        self.suits = suits;
        self
    }

    /// Sets the values.
    #[must_use]
    pub fn with_values(mut self, values: Vec<Value>) -> Self {
        self.values = values;
        self
    }

    /// Sets the card generation function.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{generate_cards, Card, DeckType};
    ///
    /// let with_two_jokers = DeckType::plain().with_build(|deck_type| {
    ///     let mut cards = generate_cards(deck_type);
    ///     cards.extend([Card::JOKER; 2]);
    ///     cards
    /// });
    /// assert_eq!((with_two_jokers.build)(&with_two_jokers).len(), 54);
    /// ```
    #[must_use]
    pub fn with_build(mut self, build: BuildFn) -> Self {
        self.build = build;
        self
    }

    /// Sets the shuffle algorithm.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleStrategy) -> Self {
        self.shuffle = shuffle;
        self
    }
}

impl Default for DeckType {
    fn default() -> Self {
        Self::plain()
    }
}

/// Generates every suit/value combination, suit-major: all values of the
/// first suit in order, then the second suit, and so on.
#[must_use]
pub fn generate_cards(deck_type: &DeckType) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck_type.suits.len() * deck_type.values.len());

    for &suit in &deck_type.suits {
        for &value in &deck_type.values {
            cards.push(Card::new(suit, value));
        }
    }

    cards
}

/// Generates the same cards as [`generate_cards`] with one joker appended.
#[must_use]
pub fn generate_with_joker(deck_type: &DeckType) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck_type.suits.len() * deck_type.values.len() + 1);
    cards.extend(generate_cards(deck_type));
    cards.push(Card::JOKER);
    cards
}

const _: () = assert!(Suit::STANDARD.len() * Value::STANDARD.len() == PLAIN_DECK_SIZE);
