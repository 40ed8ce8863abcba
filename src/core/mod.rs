//! Core building blocks: RNG, players, configuration, errors, actions.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{EnemyStatTable, EnemyStats, GameConfig, MAX_PLAYERS, NUMBER_CARD_COUNT};
pub use error::{ConfigError, PlayError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
