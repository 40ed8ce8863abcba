//! The draw deck.
//!
//! Ordered, with the top of the deck at the back: `draw` pops the back,
//! returned cards go under the front. Backed by `im::Vector`, which makes
//! both ends cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// An ordered pile of cards.
///
/// ```
/// use regicide_engine::cards::Deck;
///
/// let mut deck = Deck::full();
/// let faces = deck.split_faces();
/// assert_eq!(faces.len(), 12);
/// assert_eq!(deck.len(), 40);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All 52 cards, suit by suit, Ace to King.
    #[must_use]
    pub fn full() -> Self {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect()
    }

    /// Deck from explicit cards; the last card is the top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        cards.into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Take up to `count` cards from the top, stopping early when the deck runs out.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        (0..count).filter_map(|_| self.cards.pop_back()).collect()
    }

    /// Return a card under the deck.
    pub fn add_to_bottom(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    pub fn add_many_to_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.add_to_bottom(card);
        }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove every face card, keeping the number cards in their order.
    pub fn split_faces(&mut self) -> Vec<Card> {
        let (faces, numbers): (Vec<Card>, Vec<Card>) =
            self.cards.iter().partition(|card| card.is_face_card());
        self.cards = numbers.into_iter().collect();
        faces
    }

    /// Cards from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_full_deck() {
        let deck = Deck::full();
        assert_eq!(deck.len(), 52);

        let mut unique: Vec<Card> = deck.iter().copied().collect();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::from_cards([card("2H"), card("3H"), card("4H")]);

        assert_eq!(deck.draw(), Some(card("4H")));
        assert_eq!(deck.draw_many(5), vec![card("3H"), card("2H")]);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
        assert!(deck.draw_many(3).is_empty());
    }

    #[test]
    fn test_add_to_bottom() {
        let mut deck = Deck::from_cards([card("2H")]);
        deck.add_many_to_bottom([card("9S"), card("8S")]);

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.draw(), Some(card("2H")));
        assert_eq!(deck.draw(), Some(card("9S")));
        assert_eq!(deck.draw(), Some(card("8S")));
    }

    #[test]
    fn test_split_faces() {
        let mut deck = Deck::full();
        let faces = deck.split_faces();

        assert_eq!(faces.len(), 12);
        assert!(faces.iter().all(|c| c.is_face_card()));
        assert_eq!(deck.len(), 40);
        assert!(deck.iter().all(|c| c.is_number_card()));
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Deck::full();
        let mut b = Deck::full();
        a.shuffle(&mut GameRng::new(9));
        b.shuffle(&mut GameRng::new(9));

        assert_eq!(a, b);
        assert_ne!(a, Deck::full());
        assert_eq!(a.len(), 52);
    }
}
