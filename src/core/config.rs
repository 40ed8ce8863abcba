//! Session configuration.
//!
//! Defaults reproduce the standard solo rules: one player, a hand cap of 10,
//! 8 starting cards, and the Jack/Queen/King stat table 20/10, 30/15, 40/20.
//! Everything is serde-friendly so a launcher can load it from a file.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::enemies::EnemyKind;

/// Most hands a session supports.
pub const MAX_PLAYERS: usize = 4;

/// Number cards (Ace through Ten, four suits) in the draw pool.
pub const NUMBER_CARD_COUNT: usize = 40;

/// Health and attack of one enemy rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub health: u32,
    pub attack: u32,
}

impl EnemyStats {
    #[must_use]
    pub const fn new(health: u32, attack: u32) -> Self {
        Self { health, attack }
    }
}

/// Stats for every enemy rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStatTable {
    pub jack: EnemyStats,
    pub queen: EnemyStats,
    pub king: EnemyStats,
}

impl EnemyStatTable {
    /// Stats for the given enemy kind.
    #[must_use]
    pub fn for_kind(&self, kind: EnemyKind) -> EnemyStats {
        match kind {
            EnemyKind::Jack => self.jack,
            EnemyKind::Queen => self.queen,
            EnemyKind::King => self.king,
        }
    }
}

impl Default for EnemyStatTable {
    fn default() -> Self {
        Self {
            jack: EnemyStats::new(20, 10),
            queen: EnemyStats::new(30, 15),
            king: EnemyStats::new(40, 20),
        }
    }
}

/// Complete session configuration.
///
/// ```
/// use regicide_engine::core::GameConfig;
///
/// let config = GameConfig::default().with_players(2).with_starting_hand(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_hand_size, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of hands dealt.
    pub player_count: usize,

    /// Hearts and Diamonds never push a hand past this size.
    pub max_hand_size: usize,

    /// Cards dealt to each hand when a game starts.
    pub starting_hand_size: usize,

    pub enemy_stats: EnemyStatTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 1,
            max_hand_size: 10,
            starting_hand_size: 8,
            enemy_stats: EnemyStatTable::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_hand_cap(mut self, cap: usize) -> Self {
        self.max_hand_size = cap;
        self
    }

    #[must_use]
    pub fn with_starting_hand(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_enemy_stats(mut self, stats: EnemyStatTable) -> Self {
        self.enemy_stats = stats;
        self
    }

    /// Check the configuration can deal a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount {
                got: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        if self.max_hand_size == 0 {
            return Err(ConfigError::ZeroHandCap);
        }
        if self.starting_hand_size > self.max_hand_size {
            return Err(ConfigError::StartingHandOverCap {
                starting: self.starting_hand_size,
                cap: self.max_hand_size,
            });
        }
        if self.player_count * self.starting_hand_size > NUMBER_CARD_COUNT {
            return Err(ConfigError::NotEnoughCards {
                players: self.player_count,
                starting: self.starting_hand_size,
                available: NUMBER_CARD_COUNT,
            });
        }
        let stats = &self.enemy_stats;
        if [stats.jack, stats.queen, stats.king].iter().any(|s| s.health == 0) {
            return Err(ConfigError::ZeroEnemyHealth);
        }
        Ok(())
    }
}
