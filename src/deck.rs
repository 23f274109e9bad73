//! The deck container.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck_type::{DeckType, ShuffleStrategy};
use crate::error::DealError;
use crate::rng;

/// A mutable deck of cards built from a [`DeckType`].
///
/// Cards are dealt from the front; [`Deck::cards`] is always in deal order.
/// The deck does no locking of its own: share it between threads behind
/// whatever synchronisation the caller already uses.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Deck, Suit, Value};
///
/// let mut deck = Deck::plain(42);
/// assert_eq!(deck.deal(), Some(Card::new(Suit::Spade, Value::Ace)));
///
/// deck.shuffle();
/// assert_eq!(deck.len(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Configuration the cards are generated from.
    deck_type: DeckType,
    /// Generated cards. Entries before `next` have been dealt.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    next: usize,
    /// Generator used by [`Deck::shuffle`].
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck from a configuration with the given shuffle seed.
    ///
    /// The cards are exactly what the configuration's build function returns,
    /// in the same order. Nothing is shuffled.
    #[must_use]
    pub fn new(deck_type: DeckType, seed: u64) -> Self {
        let mut deck = Self {
            deck_type,
            cards: Vec::new(),
            next: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates a plain 52-card deck with the given shuffle seed.
    #[must_use]
    pub fn plain(seed: u64) -> Self {
        Self::new(DeckType::plain(), seed)
    }

    /// Creates a deck whose shuffle seed is drawn from the shared generator.
    ///
    /// See [`seed_shared`](crate::seed_shared) for reproducible runs.
    #[must_use]
    pub fn from_type(deck_type: DeckType) -> Self {
        Self::new(deck_type, rng::next_seed())
    }

    /// Regenerates the cards from the configuration, discarding the current
    /// order and any dealt state.
    pub fn reset(&mut self) {
        self.cards = (self.deck_type.build)(&self.deck_type);
        self.next = 0;
        log::debug!(
            "{} deck reset with {} cards",
            self.deck_type.name,
            self.cards.len()
        );
    }

    /// Returns the cards that have not been dealt yet, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the undealt share of the underlying allocation: its capacity
    /// minus the cards already dealt. Dealing never increases it.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cards.capacity() - self.next
    }

    /// Returns the configuration this deck was built from.
    #[must_use]
    pub const fn deck_type(&self) -> &DeckType {
        &self.deck_type
    }

    /// Returns the configuration's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.deck_type.name
    }

    /// Replaces the shuffle generator with one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Shuffles the remaining cards with the deck's own generator.
    pub fn shuffle(&mut self) {
        permute(
            &mut self.cards[self.next..],
            self.deck_type.shuffle,
            &mut self.rng,
        );
        self.log_shuffle();
    }

    /// Shuffles the remaining cards with the supplied generator, using the
    /// configuration's [`ShuffleStrategy`].
    ///
    /// The deck's own generator is left untouched.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        permute(&mut self.cards[self.next..], self.deck_type.shuffle, rng);
        self.log_shuffle();
    }

    fn log_shuffle(&self) {
        log::debug!(
            "{} deck shuffled ({:?}), {} cards",
            self.deck_type.name,
            self.deck_type.shuffle,
            self.len()
        );
    }

    /// Removes and returns the front card, or `None` if the deck is empty.
    ///
    /// Calling this on an empty deck has no effect.
    pub fn deal(&mut self) -> Option<Card> {
        let Some(&card) = self.cards.get(self.next) else {
            log::debug!("{} deck is empty", self.deck_type.name);
            return None;
        };
        self.next += 1;
        log::trace!("dealt {card}, {} left", self.len());
        Some(card)
    }

    /// Removes and returns the first `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `count` cards are
    /// left. The deck is left untouched in that case.
    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.len();
        if count > remaining {
            return Err(DealError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        let dealt = self.cards[self.next..self.next + count].to_vec();
        self.next += count;
        log::trace!("dealt {count} cards, {} left", self.len());
        Ok(dealt)
    }
}

impl Default for Deck {
    /// A plain deck seeded from the shared generator.
    fn default() -> Self {
        Self::from_type(DeckType::plain())
    }
}

/// Permutes `cards` in place. Slices shorter than two cards are left as is.
fn permute<R: Rng + ?Sized>(cards: &mut [Card], strategy: ShuffleStrategy, rng: &mut R) {
    let len = cards.len();
    if len < 2 {
        return;
    }

    match strategy {
        ShuffleStrategy::FullRange => {
            for i in 0..len {
                cards.swap(i, rng.random_range(0..len));
            }
        }
        ShuffleStrategy::FisherYates => cards.shuffle(rng),
    }
}
