//! Player actions and the turn history.
//!
//! An `Action` is one committed call into the session. Playing a combo and
//! confirming a discard are recorded; toggling a discard candidate is an
//! action too (so `RulesEngine::apply_action` can drive the whole game) but
//! is not written to history since it commits nothing.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, Combo};

/// One call into the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play a combo against the current enemy.
    Play(Combo),
    /// Add or remove a card from the pending counter-damage discard.
    ToggleDiscard(Card),
    /// Pay the counter-damage with the selected cards.
    ConfirmDiscard,
}

impl Action {
    /// Build a play action from a slice of cards.
    #[must_use]
    pub fn play(cards: &[Card]) -> Self {
        Action::Play(Combo::from_slice(cards))
    }
}

/// A committed action with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,

    pub action: Action,

    /// Turn counter when the action was taken.
    pub turn: u32,

    /// Position in the whole game's history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
