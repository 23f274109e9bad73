//! A playing-card deck with optional `no_std` support.
//!
//! A [`Deck`] is built from a [`DeckType`], which names the suits and values
//! to use and the function that turns them into cards. Decks can be reset,
//! shuffled, and dealt from the front.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckType};
//!
//! let mut deck = Deck::new(DeckType::joker(), 42);
//! assert_eq!(deck.len(), 53);
//!
//! deck.shuffle();
//! let hand = deck.deal_many(5).unwrap();
//! assert_eq!(hand.len(), 5);
//!
//! deck.reset();
//! assert_eq!(deck.cards().last().map(ToString::to_string).as_deref(), Some("J"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod deck_type;
pub mod error;
mod rng;

// Re-export main types
pub use card::{Card, PLAIN_DECK_SIZE, Suit, UnknownOrdinal, Value};
pub use deck::Deck;
pub use deck_type::{BuildFn, DeckType, ShuffleStrategy, generate_cards, generate_with_joker};
pub use error::{DealError, ParseCardError};
pub use rng::{FALLBACK_SEED, seed_shared};
