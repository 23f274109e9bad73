//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when dealing several cards at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck holds fewer cards than were requested.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when parsing a card from its rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card string")]
    Empty,
    /// The suit letter is not one of `S`, `H`, `D`, `C` or `J`.
    #[error("unknown suit letter {0:?}")]
    UnknownSuit(char),
    /// The value symbol is not recognised.
    #[error("unknown card value")]
    UnknownValue,
}
