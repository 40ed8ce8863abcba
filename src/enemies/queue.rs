//! The twelve enemies in fighting order.
//!
//! Four Jacks, then four Queens, then four Kings, each tier shuffled
//! internally. A cursor marks the current enemy and only moves forward;
//! the game is won when it passes the last enemy.

use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyKind};
use crate::cards::Card;
use crate::core::config::EnemyStatTable;
use crate::core::rng::GameRng;

/// Difficulty tier of the current enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Jacks,
    Queens,
    Kings,
    Complete,
}

impl Phase {
    #[must_use]
    pub fn of(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Jack => Phase::Jacks,
            EnemyKind::Queen => Phase::Queens,
            EnemyKind::King => Phase::Kings,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Jacks => "Phase 1: Jacks",
            Phase::Queens => "Phase 2: Queens",
            Phase::Kings => "Phase 3: Kings",
            Phase::Complete => "Victory!",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyQueue {
    enemies: Vec<Enemy>,
    cursor: usize,
}

impl EnemyQueue {
    /// Order face cards by tier, shuffling within each tier.
    ///
    /// Number cards in `faces` are ignored.
    #[must_use]
    pub fn from_face_cards(faces: &[Card], stats: &EnemyStatTable, rng: &mut GameRng) -> Self {
        let mut enemies = Vec::with_capacity(faces.len());
        for kind in EnemyKind::ALL {
            let mut tier: Vec<Enemy> = faces
                .iter()
                .filter_map(|&card| Enemy::from_card(card, stats))
                .filter(|enemy| enemy.kind() == kind)
                .collect();
            rng.shuffle(&mut tier);
            enemies.extend(tier);
        }
        Self { enemies, cursor: 0 }
    }

    /// Keep the given order exactly. Number cards are skipped.
    #[must_use]
    pub fn in_order(cards: &[Card], stats: &EnemyStatTable) -> Self {
        Self {
            enemies: cards
                .iter()
                .filter_map(|&card| Enemy::from_card(card, stats))
                .collect(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// All enemies in fighting order, defeated ones included.
    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    #[must_use]
    pub fn current(&self) -> Option<&Enemy> {
        self.enemies.get(self.cursor)
    }

    pub fn current_mut(&mut self) -> Option<&mut Enemy> {
        self.enemies.get_mut(self.cursor)
    }

    /// The enemy after the current one.
    #[must_use]
    pub fn next_enemy(&self) -> Option<&Enemy> {
        self.enemies.get(self.cursor + 1)
    }

    /// Mark the current enemy defeated and move on.
    pub fn advance(&mut self) {
        if let Some(enemy) = self.enemies.get_mut(self.cursor) {
            enemy.mark_defeated();
            self.cursor += 1;
        }
    }

    /// Enemies not yet defeated, the current one included.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.enemies.len() - self.cursor
    }

    #[must_use]
    pub fn defeated(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_all_defeated(&self) -> bool {
        self.cursor >= self.enemies.len()
    }

    #[must_use]
    pub fn current_phase(&self) -> Phase {
        self.current()
            .map_or(Phase::Complete, |enemy| Phase::of(enemy.kind()))
    }

    /// `(defeated, total)` for the current tier; `None` once every enemy is down.
    #[must_use]
    pub fn phase_progress(&self) -> Option<(usize, usize)> {
        let kind = self.current()?.kind();
        let tier = self.enemies.iter().filter(|e| e.kind() == kind);
        let (defeated, total) = tier.fold((0, 0), |(d, t), e| (d + usize::from(e.is_defeated()), t + 1));
        Some((defeated, total))
    }
}
