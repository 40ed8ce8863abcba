//! Counter-damage payment.
//!
//! After a surviving enemy strikes back, the player picks cards whose
//! attack values add up to at least the damage owed. Overshooting is fine.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardSelection {
    required: u32,
    selected: Vec<Card>,
}

impl DiscardSelection {
    #[must_use]
    pub fn new(required: u32) -> Self {
        Self {
            required,
            selected: Vec::new(),
        }
    }

    /// Damage still owed.
    #[must_use]
    pub fn required(&self) -> u32 {
        self.required
    }

    /// Candidates in the order they were picked.
    #[must_use]
    pub fn selected(&self) -> &[Card] {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, card: &Card) -> bool {
        self.selected.contains(card)
    }

    /// Select or deselect a card. Returns whether it is now selected.
    pub fn toggle(&mut self, card: Card) -> bool {
        if let Some(pos) = self.selected.iter().position(|c| *c == card) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(card);
            true
        }
    }

    #[must_use]
    pub fn selected_value(&self) -> u32 {
        self.selected.iter().map(|c| c.attack_value()).sum()
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.selected_value() >= self.required
    }

    pub fn clear(&mut self) {
        self.required = 0;
        self.selected.clear();
    }
}
