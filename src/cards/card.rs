//! Playing cards.
//!
//! A `Card` is a plain `(suit, rank)` value. A standard deck holds exactly
//! one card per pair, so equality by value is also identity: removing a card
//! from a hand by value can never pick the wrong one. If the engine ever
//! deals from several decks, cards will need an identity tag.
//!
//! `Ord` on `Card` is the canonical hand display order: suit first
//! (Hearts, Diamonds, Clubs, Spades), then rank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Card suit. Each suit grants its own ability when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    /// What playing this suit does.
    #[must_use]
    pub const fn ability(self) -> &'static str {
        match self {
            Suit::Hearts => "Heal: return random cards from the discard pile to your hand",
            Suit::Diamonds => "Draw: draw cards from the deck",
            Suit::Clubs => "Double: the whole play deals double damage",
            Suit::Spades => "Shield: permanently lower the enemy's attack",
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' | '♥' => Some(Suit::Hearts),
            'D' | '♦' => Some(Suit::Diamonds),
            'C' | '♣' => Some(Suit::Clubs),
            'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// Card rank, Ace (1) through King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric rank, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Rank for a numeric value in 1..=13.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseCardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value).ok_or_else(|| ParseCardError::Rank(value.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A playing card. Field order gives the derived `Ord` its suit-then-rank order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Attack contributed when played: the numeric rank.
    #[must_use]
    pub const fn attack_value(self) -> u32 {
        self.rank.value() as u32
    }

    #[must_use]
    pub const fn is_face_card(self) -> bool {
        self.rank.is_face()
    }

    /// Ace through Ten.
    #[must_use]
    pub const fn is_number_card(self) -> bool {
        !self.rank.is_face()
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    #[must_use]
    pub const fn color(self) -> CardColor {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Failure to read a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("empty card text")]
    Empty,
    #[error("unknown suit {0:?}")]
    Suit(String),
    #[error("unknown rank {0:?}")]
    Rank(String),
}

/// Parses `"5D"`, `"10s"`, `"AH"`, `"KC"` or the glyph forms `"A♥"`, `"10♠"`.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_char(suit_char).ok_or_else(|| ParseCardError::Suit(suit_char.to_string()))?;
        let rank_text = &s[..s.len() - suit_char.len_utf8()];

        let rank = match rank_text.to_ascii_uppercase().as_str() {
            "A" | "1" => Rank::Ace,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            digits => digits
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .and_then(Rank::from_value)
                .ok_or_else(|| ParseCardError::Rank(rank_text.to_string()))?,
        };

        Ok(Card::new(suit, rank))
    }
}
