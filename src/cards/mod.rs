//! Card model: cards, the draw deck, and hands.
//!
//! ## Key Types
//!
//! - `Card`: immutable `(Suit, Rank)` value with its attack value
//! - `Deck`: ordered pile, draw from the top, return to the bottom
//! - `Hand`: sorted cards owned by one player, plus combo legality
//! - `Combo`: the cards of one play

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, CardColor, ParseCardError, Rank, Suit};
pub use deck::Deck;
pub use hand::{Combo, Hand};
