//! Card types, rendering, and parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits outside the known set are carried as [`Suit::Unknown`] with the raw
/// code the caller supplied. They are valid cards, they just render as `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Joker, used as a suit with [`Value::Blank`].
    Joker,
    /// A suit code with no known meaning.
    Unknown(u8),
}

impl Suit {
    /// The four standard suits in deck order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Heart, Self::Diamond, Self::Club];

    /// Returns the one-letter symbol, or `None` for an unknown suit.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Spade => Some("S"),
            Self::Heart => Some("H"),
            Self::Diamond => Some("D"),
            Self::Club => Some("C"),
            Self::Joker => Some("J"),
            Self::Unknown(_) => None,
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'S' => Some(Self::Spade),
            'H' => Some(Self::Heart),
            'D' => Some(Self::Diamond),
            'C' => Some(Self::Club),
            'J' => Some(Self::Joker),
            _ => None,
        }
    }
}

/// Card value.
///
/// Ace through King map to ordinals 1-13. [`Value::Blank`] is the "no value"
/// sentinel carried by jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// No value (jokers).
    Blank,
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// An ordinal past King. Only built by [`Value::from_ordinal`].
    Unknown(UnknownOrdinal),
}

/// An ordinal with no named value, always greater than 13.
///
/// The field is private so an unknown value can never share an ordinal with
/// a named one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownOrdinal(u8);

impl UnknownOrdinal {
    /// Returns the raw ordinal.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Value {
    /// Ace through King in ascending order.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Maps an ordinal to a value.
    ///
    /// `0` is [`Value::Blank`], `1..=13` are Ace through King, and anything
    /// else is kept as [`Value::Unknown`].
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Value;
    ///
    /// assert_eq!(Value::from_ordinal(1), Value::Ace);
    /// assert_eq!(Value::from_ordinal(99).ordinal(), 99);
    /// assert_eq!(Value::from_ordinal(99).symbol(), None);
    /// ```
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => Self::Blank,
            1..=13 => Self::STANDARD[ordinal as usize - 1],
            _ => Self::Unknown(UnknownOrdinal(ordinal)),
        }
    }

    /// Returns the ordinal of this value (`Blank` is 0, Ace is 1, King is 13).
    ///
    /// [`Value::from_ordinal`] maps it back to the same value.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Blank => 0,
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Unknown(unknown) => unknown.get(),
        }
    }

    /// Returns the display symbol, or `None` for an unknown value.
    ///
    /// The blank value has an empty symbol.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Blank => Some(""),
            Self::Ace => Some("A"),
            Self::Two => Some("2"),
            Self::Three => Some("3"),
            Self::Four => Some("4"),
            Self::Five => Some("5"),
            Self::Six => Some("6"),
            Self::Seven => Some("7"),
            Self::Eight => Some("8"),
            Self::Nine => Some("9"),
            Self::Ten => Some("10"),
            Self::Jack => Some("J"),
            Self::Queen => Some("Q"),
            Self::King => Some("K"),
            Self::Unknown(_) => None,
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "" => Some(Self::Blank),
            "A" => Some(Self::Ace),
            "10" => Some(Self::Ten),
            "J" => Some(Self::Jack),
            "Q" => Some(Self::Queen),
            "K" => Some(Self::King),
            _ => match symbol.as_bytes() {
                &[digit @ b'2'..=b'9'] => Some(Self::from_ordinal(digit - b'0')),
                _ => None,
            },
        }
    }
}

/// A playing card.
///
/// Two cards are equal when both their suit and value match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The value of the card.
    pub value: Value,
}

impl Card {
    /// The joker card.
    pub const JOKER: Self = Self::new(Suit::Joker, Value::Blank);

    /// Creates a new card.
    ///
    /// No validation is done: any suit/value pair is a card, including
    /// combinations that only render as placeholders.
    #[must_use]
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }
}

/// Renders the suit letter followed by the value symbol, e.g. `SA`, `H10`
/// or `J`. Each unrecognised field is replaced by `?` on its own, so this
/// never fails.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suit.symbol().unwrap_or("?"))?;
        f.write_str(self.value.symbol().unwrap_or("?"))
    }
}

/// Parses the rendered form of a card.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Suit, Value};
///
/// let card: Card = "H10".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Heart, Value::Ten));
/// assert_eq!("J".parse::<Card>().unwrap(), Card::JOKER);
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_letter(letter).ok_or(ParseCardError::UnknownSuit(letter))?;
        let value = Value::from_symbol(chars.as_str()).ok_or(ParseCardError::UnknownValue)?;
        Ok(Self::new(suit, value))
    }
}

/// Number of cards in a plain deck.
pub const PLAIN_DECK_SIZE: usize = 52;
