//! Read-only snapshots for the presentation layer.
//!
//! Plain serde values: a UI can render them directly or ship them as JSON.
//! Nothing here can mutate the session.

use serde::{Deserialize, Serialize};

use super::session::GameState;
use crate::cards::{Card, Hand, Rank};
use crate::core::player::PlayerId;
use crate::enemies::{Enemy, EnemyKind, Phase};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyInfo {
    pub card: Card,
    pub kind: EnemyKind,
    pub name: String,
    pub current_health: u32,
    pub max_health: u32,
    /// Attack after Spades reduction.
    pub attack: u32,
    pub base_attack: u32,
    pub attack_reduction: u32,
}

impl From<&Enemy> for EnemyInfo {
    fn from(enemy: &Enemy) -> Self {
        Self {
            card: enemy.card(),
            kind: enemy.kind(),
            name: enemy.display_name(),
            current_health: enemy.current_health(),
            max_health: enemy.max_health(),
            attack: enemy.effective_attack(),
            base_attack: enemy.base_attack(),
            attack_reduction: enemy.attack_reduction(),
        }
    }
}

/// Overall progress of the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateInfo {
    pub game_state: GameState,
    pub current_enemy: Option<EnemyInfo>,
    pub next_enemy: Option<EnemyInfo>,
    pub remaining_enemies: usize,
    pub defeated_enemies: usize,
    pub phase: Phase,
    pub phase_label: String,
    /// `(defeated, total)` within the current phase.
    pub phase_progress: Option<(usize, usize)>,
    pub deck_size: usize,
    pub discard_pile_size: usize,
    pub turn_count: u32,
    pub victory: bool,
    pub game_over: bool,
    pub required_discard_value: u32,
    pub selected_discard_value: u32,
}

/// One player's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandInfo {
    pub player: PlayerId,
    pub cards: Vec<Card>,
    pub size: usize,
    pub available_ranks: Vec<Rank>,
    pub is_empty: bool,
    pub total_value: u32,
}

impl HandInfo {
    #[must_use]
    pub fn new(player: PlayerId, hand: &Hand) -> Self {
        Self {
            player,
            cards: hand.cards().to_vec(),
            size: hand.len(),
            available_ranks: hand.available_ranks(),
            is_empty: hand.is_empty(),
            total_value: hand.total_value(),
        }
    }
}
