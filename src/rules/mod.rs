//! Rules engine trait for driving a game generically.

pub mod engine;

pub use engine::{ActionOutcome, GameResult, RulesEngine};
