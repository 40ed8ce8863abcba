//! Error types.
//!
//! Caller misuse is always reported as a value. No operation leaves the
//! session half-mutated: a call that returns `Err` changed nothing.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;
use crate::game::GameState;

/// Why a play, discard or selection call was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("no cards selected")]
    EmptyPlay,

    #[error("{0} is not in the current hand")]
    CardNotInHand(Card),

    #[error("{0} was selected more than once")]
    DuplicateCard(Card),

    #[error("non-Ace cards in a combo must share one rank")]
    MixedRanks,

    #[error("there is no active enemy")]
    NoActiveEnemy,

    #[error("operation requires state {expected:?}, session is in {actual:?}")]
    IllegalState { expected: GameState, actual: GameState },

    #[error("selected cards are worth {selected}, at least {required} must be discarded")]
    InsufficientDiscardValue { selected: u32, required: u32 },
}

impl PlayError {
    /// True for every rejection that stems from an illegal card grouping.
    #[must_use]
    pub fn is_invalid_combo(&self) -> bool {
        matches!(
            self,
            PlayError::EmptyPlay
                | PlayError::CardNotInHand(_)
                | PlayError::DuplicateCard(_)
                | PlayError::MixedRanks
        )
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between 1 and {max}, got {got}")]
    PlayerCount { got: usize, max: usize },

    #[error("hand cap must be at least 1")]
    ZeroHandCap,

    #[error("starting hand of {starting} exceeds the hand cap of {cap}")]
    StartingHandOverCap { starting: usize, cap: usize },

    #[error("{players} hands of {starting} cards need more than the {available} cards in the deck")]
    NotEnoughCards {
        players: usize,
        starting: usize,
        available: usize,
    },

    #[error("enemy health must be positive")]
    ZeroEnemyHealth,

    #[error("scenario hand given to {player}, but the game has {players} player(s)")]
    ScenarioPlayer { player: PlayerId, players: usize },
}
