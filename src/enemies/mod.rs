//! Enemies and the order they are fought in.

pub mod enemy;
pub mod queue;

pub use enemy::{Enemy, EnemyKind};
pub use queue::{EnemyQueue, Phase};
