//! Combat and suit effects.
//!
//! - `BattleResolver`: attack total, damage, Spades reduction, Clubs doubling,
//!   counter-damage
//! - `SuitEffectEngine`: Hearts heal and Diamonds draw, bounded by the hand cap
//!
//! Both are stateless; the session hands them exactly the pieces of state
//! they may touch.

pub mod battle;
pub mod suits;

pub use battle::{
    suit_power, AttackBreakdown, BattleResolver, BattleResult, EffectLimit, EffectNote, PlayPreview,
};
pub use suits::{SuitEffectContext, SuitEffectEngine};
