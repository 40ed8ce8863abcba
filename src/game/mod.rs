//! The playable session and its presentation snapshots.

pub mod discard;
pub mod info;
pub mod session;

pub use discard::DiscardSelection;
pub use info::{EnemyInfo, GameStateInfo, HandInfo};
pub use session::{GameState, RegicideGame, RegicideGameBuilder};
