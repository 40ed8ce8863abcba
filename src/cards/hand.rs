//! A player's hand and combo legality.
//!
//! ## Combos
//!
//! A play is legal when every card is in the hand, no card is named twice,
//! and all non-Ace cards share one rank. Aces join any group in any number,
//! and a play of only Aces is always legal.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank, Suit};
use crate::core::error::PlayError;

/// Cards played together. At most four Aces plus four of one rank.
pub type Combo = SmallVec<[Card; 8]>;

/// Cards held by one player, always in canonical (suit, rank) order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self::new();
        hand.add_cards(cards);
        hand
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.binary_search(card).is_ok()
    }

    pub fn add_card(&mut self, card: Card) {
        let pos = self.cards.binary_search(&card).unwrap_or_else(|pos| pos);
        self.cards.insert(pos, card);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.cards.sort();
    }

    /// Remove one card. Returns false if it wasn't held.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.binary_search(card) {
            Ok(pos) => {
                self.cards.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove every listed card that is held, returning the ones removed.
    pub fn remove_cards(&mut self, cards: &[Card]) -> Vec<Card> {
        cards.iter().filter(|card| self.remove_card(card)).copied().collect()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn cards_of_rank(&self, rank: Rank) -> Vec<Card> {
        self.cards.iter().filter(|c| c.rank == rank).copied().collect()
    }

    #[must_use]
    pub fn cards_of_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards.iter().filter(|c| c.suit == suit).copied().collect()
    }

    /// Distinct ranks held, ascending.
    #[must_use]
    pub fn available_ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.cards.iter().map(|c| c.rank).collect();
        ranks.sort();
        ranks.dedup();
        ranks
    }

    /// Sum of attack values, i.e. the most counter-damage this hand can pay.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.cards.iter().map(|c| c.attack_value()).sum()
    }

    /// Check a proposed play against this hand.
    pub fn validate_combo(&self, cards: &[Card]) -> Result<(), PlayError> {
        if cards.is_empty() {
            return Err(PlayError::EmptyPlay);
        }

        let mut seen = FxHashSet::default();
        for card in cards {
            if !seen.insert(*card) {
                return Err(PlayError::DuplicateCard(*card));
            }
            if !self.contains(card) {
                return Err(PlayError::CardNotInHand(*card));
            }
        }

        let mut non_ace = cards.iter().filter(|c| !c.is_ace()).map(|c| c.rank);
        if let Some(first) = non_ace.next() {
            if non_ace.any(|rank| rank != first) {
                return Err(PlayError::MixedRanks);
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn can_play_combo(&self, cards: &[Card]) -> bool {
        self.validate_combo(cards).is_ok()
    }

    /// Every single card, then every same-rank group of 2, 3 and 4.
    ///
    /// Mixed Ace companion plays are legal but not listed.
    #[must_use]
    pub fn possible_plays(&self) -> Vec<Combo> {
        let mut plays: Vec<Combo> = self.cards.iter().map(|&c| Combo::from_slice(&[c])).collect();

        let mut by_rank: FxHashMap<Rank, Vec<Card>> = FxHashMap::default();
        for card in &self.cards {
            by_rank.entry(card.rank).or_default().push(*card);
        }

        for rank in self.available_ranks() {
            let group = &by_rank[&rank];
            for size in 2..=group.len() {
                push_combinations(group, size, &mut Combo::new(), 0, &mut plays);
            }
        }
        plays
    }
}

fn push_combinations(pool: &[Card], size: usize, current: &mut Combo, start: usize, out: &mut Vec<Combo>) {
    if current.len() == size {
        out.push(current.clone());
        return;
    }
    for i in start..pool.len() {
        current.push(pool[i]);
        push_combinations(pool, size, current, i + 1, out);
        current.pop();
    }
}
