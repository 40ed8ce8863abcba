//! A single enemy built from a face card.
//!
//! Jack, Queen and King share one behaviour and differ only by their stats,
//! so `Enemy` is plain data with methods, no trait objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Rank};
use crate::core::config::EnemyStatTable;

/// Which tier an enemy belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Jack,
    Queen,
    King,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Jack, EnemyKind::Queen, EnemyKind::King];

    /// Kind for a face rank, `None` for number ranks.
    #[must_use]
    pub fn from_rank(rank: Rank) -> Option<Self> {
        match rank {
            Rank::Jack => Some(EnemyKind::Jack),
            Rank::Queen => Some(EnemyKind::Queen),
            Rank::King => Some(EnemyKind::King),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EnemyKind::Jack => "Jack",
            EnemyKind::Queen => "Queen",
            EnemyKind::King => "King",
        }
    }
}

/// A face card in combat.
///
/// Health only goes down, attack reduction only goes up, and once
/// `is_defeated` is set it stays set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    card: Card,
    kind: EnemyKind,
    max_health: u32,
    current_health: u32,
    base_attack: u32,
    attack_reduction: u32,
    defeated: bool,
}

impl Enemy {
    /// Build an enemy from a face card. Returns `None` for number cards.
    #[must_use]
    pub fn from_card(card: Card, stats: &EnemyStatTable) -> Option<Self> {
        let kind = EnemyKind::from_rank(card.rank)?;
        let stats = stats.for_kind(kind);
        Some(Self {
            card,
            kind,
            max_health: stats.health,
            current_health: stats.health,
            base_attack: stats.attack,
            attack_reduction: 0,
            defeated: false,
        })
    }

    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }

    #[must_use]
    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    #[must_use]
    pub fn base_attack(&self) -> u32 {
        self.base_attack
    }

    /// Total Spades reduction applied so far.
    #[must_use]
    pub fn attack_reduction(&self) -> u32 {
        self.attack_reduction
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    /// Attack after Spades reduction, never below zero.
    #[must_use]
    pub fn effective_attack(&self) -> u32 {
        self.base_attack.saturating_sub(self.attack_reduction)
    }

    /// Apply damage and return how much actually landed.
    ///
    /// Damage beyond the remaining health is lost. A defeated enemy takes none.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        if self.defeated {
            return 0;
        }
        let dealt = damage.min(self.current_health);
        self.current_health -= dealt;
        if self.current_health == 0 {
            self.defeated = true;
        }
        dealt
    }

    /// Permanently lower attack. Returns the accumulated reduction.
    pub fn reduce_attack(&mut self, amount: u32) -> u32 {
        self.attack_reduction = self.attack_reduction.saturating_add(amount);
        self.attack_reduction
    }

    /// Damage this enemy strikes back with, after `defense`. Zero once defeated.
    #[must_use]
    pub fn counter_attack_damage(&self, defense: u32) -> u32 {
        if self.defeated {
            return 0;
        }
        self.effective_attack().saturating_sub(defense)
    }

    /// Remaining health as a fraction of maximum health.
    #[must_use]
    pub fn health_fraction(&self) -> f32 {
        self.current_health as f32 / self.max_health as f32
    }

    pub(crate) fn mark_defeated(&mut self) {
        self.current_health = 0;
        self.defeated = true;
    }

    /// For example "Jack of Spades".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} of {:?}", self.kind.name(), self.card.suit)
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{} HP, {} ATK)",
            self.display_name(),
            self.current_health,
            self.max_health,
            self.effective_attack()
        )
    }
}
