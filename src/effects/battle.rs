//! Combat resolution.
//!
//! ## Resolution order
//!
//! 1. Spades in the play lower the enemy's attack, permanently.
//! 2. Base attack is the sum of attack values.
//! 3. Plays of `n > 1` cards add `n * (n - 1)`.
//! 4. Any Club doubles the running total, once.
//! 5. Damage is capped at the enemy's remaining health.
//! 6. A surviving enemy counter-attacks with its reduced attack.
//!
//! Hearts and Diamonds are left to `SuitEffectEngine`, which needs the
//! hand, deck and discard pile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Suit};
use crate::enemies::Enemy;

/// Why a Hearts or Diamonds effect moved fewer cards than its power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectLimit {
    HandSize,
    DiscardPile,
    Deck,
}

impl fmt::Display for EffectLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EffectLimit::HandSize => "limited by hand size",
            EffectLimit::DiscardPile => "limited by discard pile",
            EffectLimit::Deck => "limited by deck",
        })
    }
}

/// Annotation describing one thing that happened during a play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectNote {
    ComboBonus { bonus: u32 },
    SpadesShield { reduction: u32, total: u32 },
    ClubsDouble { clubs_power: u32 },
    HeartsHealed { count: usize, limit: Option<EffectLimit> },
    HeartsHandFull { cap: usize },
    HeartsDiscardEmpty,
    DiamondsDrew { count: usize, limit: Option<EffectLimit> },
    DiamondsHandFull { cap: usize },
    DiamondsDeckEmpty,
}

impl fmt::Display for EffectNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectNote::ComboBonus { bonus } => write!(f, "Combo bonus: +{bonus}"),
            EffectNote::SpadesShield { reduction, total } => {
                write!(f, "Spades: Reduced enemy attack by {reduction} (total -{total})")
            }
            EffectNote::ClubsDouble { clubs_power } => {
                write!(f, "Clubs: Double damage (Clubs power {clubs_power})")
            }
            EffectNote::HeartsHealed { count, limit: None } => write!(f, "Hearts: Healed {count} cards"),
            EffectNote::HeartsHealed { count, limit: Some(limit) } => {
                write!(f, "Hearts: Healed {count} cards ({limit})")
            }
            EffectNote::HeartsHandFull { cap } => write!(f, "Hearts: Hand full ({cap} cards), cannot heal"),
            EffectNote::HeartsDiscardEmpty => f.write_str("Hearts: Discard pile empty, cannot heal"),
            EffectNote::DiamondsDrew { count, limit: None } => write!(f, "Diamonds: Drew {count} cards"),
            EffectNote::DiamondsDrew { count, limit: Some(limit) } => {
                write!(f, "Diamonds: Drew {count} cards ({limit})")
            }
            EffectNote::DiamondsHandFull { cap } => write!(f, "Diamonds: Hand full ({cap} cards), cannot draw"),
            EffectNote::DiamondsDeckEmpty => f.write_str("Diamonds: Deck empty, cannot draw"),
        }
    }
}

/// Outcome of one resolved play. Built fresh per play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub total_attack: u32,
    pub damage_dealt: u32,
    pub counter_damage: u32,
    pub enemy_defeated: bool,
    pub cards_drawn: usize,
    pub cards_healed: usize,
    /// Filled in once the counter-damage discard is confirmed.
    pub cards_discarded_to_enemy: usize,
    pub effects: Vec<EffectNote>,
}

impl BattleResult {
    pub fn add_effect(&mut self, note: EffectNote) {
        self.effects.push(note);
    }

    /// Display lines: headline numbers first, then effect notes.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.damage_dealt > 0 {
            lines.push(format!("Dealt {} damage to the enemy", self.damage_dealt));
        }
        if self.counter_damage > 0 {
            lines.push(format!("Took {} counter damage", self.counter_damage));
        }
        if self.enemy_defeated {
            lines.push("Enemy defeated!".to_string());
        }
        if self.cards_drawn > 0 {
            lines.push(format!("Drew {} cards", self.cards_drawn));
        }
        if self.cards_healed > 0 {
            lines.push(format!("Healed {} cards", self.cards_healed));
        }
        if self.cards_discarded_to_enemy > 0 {
            lines.push(format!("Discarded {} cards", self.cards_discarded_to_enemy));
        }
        lines.extend(self.effects.iter().map(ToString::to_string));
        lines
    }
}

/// Side-effect-free forecast of a play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayPreview {
    pub total_attack: u32,
    pub combo_bonus: u32,
    pub damage_to_enemy: u32,
    pub will_defeat_enemy: bool,
    pub counter_damage: u32,
}

/// Attack arithmetic for a set of cards, independent of any enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackBreakdown {
    pub base: u32,
    pub combo_bonus: u32,
    /// Attack value of Clubs played; non-zero means the total was doubled.
    pub clubs_power: u32,
    pub spades_power: u32,
    pub total: u32,
}

impl AttackBreakdown {
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let base: u32 = cards.iter().map(|c| c.attack_value()).sum();
        let n = cards.len() as u32;
        let combo_bonus = if n > 1 { n * (n - 1) } else { 0 };
        let clubs_power = suit_power(cards, Suit::Clubs);
        let spades_power = suit_power(cards, Suit::Spades);

        let mut total = base + combo_bonus;
        if clubs_power > 0 {
            total *= 2;
        }

        Self {
            base,
            combo_bonus,
            clubs_power,
            spades_power,
            total,
        }
    }
}

/// Sum of attack values of the cards of one suit.
#[must_use]
pub fn suit_power(cards: &[Card], suit: Suit) -> u32 {
    cards.iter().filter(|c| c.suit == suit).map(|c| c.attack_value()).sum()
}

/// Applies a play to an enemy.
pub struct BattleResolver;

impl BattleResolver {
    /// Resolve `cards` against `enemy`, mutating its health and attack reduction.
    ///
    /// The combo must already be validated against the hand.
    pub fn resolve(cards: &[Card], enemy: &mut Enemy) -> BattleResult {
        let mut result = BattleResult::default();
        let attack = AttackBreakdown::of(cards);

        if attack.spades_power > 0 && !enemy.is_defeated() {
            let total = enemy.reduce_attack(attack.spades_power);
            result.add_effect(EffectNote::SpadesShield {
                reduction: attack.spades_power,
                total,
            });
        }
        if attack.combo_bonus > 0 {
            result.add_effect(EffectNote::ComboBonus { bonus: attack.combo_bonus });
        }
        if attack.clubs_power > 0 {
            result.add_effect(EffectNote::ClubsDouble { clubs_power: attack.clubs_power });
        }

        result.total_attack = attack.total;
        result.damage_dealt = enemy.take_damage(attack.total);
        result.enemy_defeated = enemy.is_defeated();
        if !result.enemy_defeated {
            result.counter_damage = enemy.counter_attack_damage(0);
        }

        tracing::debug!(
            enemy = %enemy.display_name(),
            total_attack = attack.total,
            damage = result.damage_dealt,
            counter_damage = result.counter_damage,
            defeated = result.enemy_defeated,
            "battle resolved"
        );
        result
    }

    /// Forecast `resolve` without touching the enemy.
    ///
    /// Assumes `cards` is a legal combo; anything else yields meaningless numbers.
    #[must_use]
    pub fn preview(cards: &[Card], enemy: &Enemy) -> PlayPreview {
        let attack = AttackBreakdown::of(cards);
        let health = enemy.current_health();
        let damage_to_enemy = attack.total.min(health);
        let will_defeat_enemy = damage_to_enemy >= health;

        let counter_damage = if will_defeat_enemy {
            0
        } else {
            enemy
                .base_attack()
                .saturating_sub(enemy.attack_reduction().saturating_add(attack.spades_power))
        };

        PlayPreview {
            total_attack: attack.total,
            combo_bonus: attack.combo_bonus,
            damage_to_enemy,
            will_defeat_enemy,
            counter_damage,
        }
    }
}
