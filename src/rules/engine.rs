//! Rules engine trait.
//!
//! A generic driver (hint UI, autoplayer, replay tool) can run a game
//! through this trait without knowing its concrete session type:
//! ask for `legal_actions`, pick one, `apply_action`, repeat until
//! `is_terminal` returns a result.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::error::PlayError;
use crate::effects::BattleResult;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Every enemy defeated.
    Victory,
    /// Deck and every hand ran out.
    Defeat,
}

/// What applying an action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Battle(BattleResult),
    Toggled { card: Card, selected: bool },
    Discarded(Vec<Card>),
}

pub trait RulesEngine {
    fn config(&self) -> &GameConfig;

    /// Actions the current player may take right now.
    ///
    /// Empty in `Menu`, `Victory` and `Defeat`. It can also be empty while
    /// `is_terminal` is still `None`:
    ///
    /// - in `Playing`, when counter-damage emptied the current hand but the
    ///   deck still has cards;
    /// - in `DiscardSelection` only toggles are offered, never
    ///   `ConfirmDiscard`, when the whole hand is worth less than the damage
    ///   owed.
    ///
    /// Neither can progress. A driver should stop on an empty list, or once
    /// every card in hand is selected and confirming is still not offered.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action. On `Err` nothing changed.
    fn apply_action(&mut self, action: &Action) -> Result<ActionOutcome, PlayError>;

    /// `Some` once the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    fn is_legal(&self, action: &Action) -> bool {
        self.legal_actions().contains(action)
    }
}
