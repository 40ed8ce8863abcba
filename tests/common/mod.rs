//! Shared helpers for the integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use regicide_engine::{Card, EnemyStatTable, EnemyStats, GameConfig, PlayerId, RegicideGame, RegicideGameBuilder};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Filter comes from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(text: &str) -> Card {
    text.parse().unwrap_or_else(|err| panic!("bad card {text:?}: {err}"))
}

/// Whitespace-separated card list, e.g. `"5D 5H AS"`.
pub fn cards(text: &str) -> Vec<Card> {
    text.split_whitespace().map(card).collect()
}

/// All 40 number cards.
pub fn number_cards() -> Vec<Card> {
    regicide_engine::Deck::full()
        .iter()
        .copied()
        .filter(|c| c.is_number_card())
        .collect()
}

/// Single-player game with a pinned hand and enemy order; the rest of the
/// number cards are shuffled into the deck.
pub fn scenario(hand: &str, enemies: &str) -> RegicideGame {
    init_logging();
    RegicideGameBuilder::new()
        .seed(7)
        .hand(PlayerId::new(0), &cards(hand))
        .enemies(&cards(enemies))
        .build()
        .unwrap()
}

/// Like `scenario`, with an empty deck.
pub fn scenario_no_deck(hand: &str, enemies: &str) -> RegicideGame {
    init_logging();
    RegicideGameBuilder::new()
        .seed(7)
        .deck(&[])
        .hand(PlayerId::new(0), &cards(hand))
        .enemies(&cards(enemies))
        .build()
        .unwrap()
}

/// Every enemy dies to any single card and hits for 1.
pub fn fragile_enemies() -> GameConfig {
    let weak = EnemyStats::new(1, 1);
    GameConfig::default().with_enemy_stats(EnemyStatTable {
        jack: weak,
        queen: weak,
        king: weak,
    })
}
