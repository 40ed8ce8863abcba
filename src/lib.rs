//! # regicide-engine
//!
//! Rules engine for a cooperative card-combat game played with a standard
//! 52-card deck. The 12 face cards are enemies fought Jacks first, then
//! Queens, then Kings. The 40 number cards are the deck players attack with,
//! and each suit triggers its own effect when played.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every shuffle and heal draws from a seeded
//!    [`GameRng`]. The same seed replays the same game.
//!
//! 2. **All-or-nothing turns**: an operation either commits completely or
//!    returns an error with the session untouched.
//!
//! 3. **Presentation-free**: the session exposes plain serde snapshots
//!    ([`GameStateInfo`], [`HandInfo`]) and never renders anything itself.
//!
//! ## Modules
//!
//! - `core`: players, actions, RNG, configuration, errors
//! - `cards`: cards, the draw deck, hands and combo validation
//! - `enemies`: enemy stats and the phase-ordered enemy queue
//! - `effects`: combat resolution and suit effects
//! - `rules`: `RulesEngine` trait for driving a game generically
//! - `game`: the session state machine
//!
//! ## Example
//!
//! ```
//! use regicide_engine::{GameConfig, GameState, RegicideGame};
//!
//! let mut game = RegicideGame::new(GameConfig::default(), 42).unwrap();
//! game.start_new_game();
//!
//! let card = game.current_player_hand().cards()[0];
//! let result = game.play_cards(&[card]).unwrap();
//! assert!(result.total_attack >= 1);
//! assert_ne!(game.state(), GameState::Menu);
//! ```

pub mod core;
pub mod cards;
pub mod enemies;
pub mod effects;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    GameConfig, EnemyStats, EnemyStatTable,
    Action, ActionRecord,
    ConfigError, PlayError,
};

pub use crate::cards::{Card, CardColor, Combo, Deck, Hand, ParseCardError, Rank, Suit};

pub use crate::enemies::{Enemy, EnemyKind, EnemyQueue, Phase};

pub use crate::effects::{BattleResult, EffectLimit, EffectNote, PlayPreview};

pub use crate::rules::{ActionOutcome, GameResult, RulesEngine};

pub use crate::game::{
    DiscardSelection, EnemyInfo, GameState, GameStateInfo, HandInfo,
    RegicideGame, RegicideGameBuilder,
};
