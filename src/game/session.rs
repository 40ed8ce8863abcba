//! The game session: one deck, one enemy queue, the hands, the discard
//! pile, and the state machine tying them together.
//!
//! ## States
//!
//! ```text
//! Menu ──start──▶ Playing ⇄ DiscardSelection
//!                    │
//!                    ├──▶ Victory
//!                    └──▶ Defeat
//! ```
//!
//! `Victory` and `Defeat` hold until `start_new_game` deals again.
//!
//! ## A turn
//!
//! `play_cards` validates the combo, resolves combat, applies Hearts and
//! Diamonds while the played cards are still in hand, discards the played
//! cards, then either advances the enemy queue or asks for a counter-damage
//! discard. Every call either commits completely or returns `Err` having
//! changed nothing.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::discard::DiscardSelection;
use super::info::{EnemyInfo, GameStateInfo, HandInfo};
use crate::cards::{Card, Combo, Deck, Hand};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::GameConfig;
use crate::core::error::{ConfigError, PlayError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::effects::{BattleResolver, BattleResult, PlayPreview, SuitEffectContext, SuitEffectEngine};
use crate::enemies::EnemyQueue;
use crate::rules::{ActionOutcome, GameResult, RulesEngine};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    DiscardSelection,
    Victory,
    Defeat,
}

/// Fixed layout a scenario starts from instead of a random deal.
#[derive(Clone, Debug, Default)]
struct Scenario {
    deck: Option<Vec<Card>>,
    hands: FxHashMap<PlayerId, Vec<Card>>,
    enemies: Option<Vec<Card>>,
    discard: Vec<Card>,
}

/// A single-player-at-a-time Regicide session.
#[derive(Clone, Debug)]
pub struct RegicideGame {
    config: GameConfig,
    rng: GameRng,
    heal_rng: GameRng,
    scenario: Scenario,

    deck: Deck,
    discard_pile: Vec<Card>,
    enemies: EnemyQueue,
    hands: PlayerMap<Hand>,
    current_player: PlayerId,

    state: GameState,
    turn_count: u32,
    victory: bool,
    game_over: bool,
    discard: DiscardSelection,
    last_battle_result: Option<BattleResult>,
    history: Vec<ActionRecord>,
}

impl RegicideGame {
    /// New session in `Menu`. Nothing is dealt until `start_new_game`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// New session drawing all randomness from `rng`.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let hands = PlayerMap::with_default(config.player_count);
        let heal_rng = rng.for_context("heal");
        Ok(Self {
            config,
            rng,
            heal_rng,
            scenario: Scenario::default(),
            deck: Deck::new(),
            discard_pile: Vec::new(),
            enemies: EnemyQueue::default(),
            hands,
            current_player: PlayerId::default(),
            state: GameState::Menu,
            turn_count: 0,
            victory: false,
            game_over: false,
            discard: DiscardSelection::default(),
            last_battle_result: None,
            history: Vec::new(),
        })
    }

    /// Deal a fresh game and enter `Playing`.
    ///
    /// 40 shuffled number cards form the deck, the 12 face cards become the
    /// enemy queue, and each hand draws its starting cards.
    pub fn start_new_game(&mut self) {
        let game_rng = self.rng.fork();
        let mut deck_rng = game_rng.for_context("deck");
        let mut enemy_rng = game_rng.for_context("enemies");
        self.heal_rng = game_rng.for_context("heal");

        let mut numbers = Deck::full();
        let faces = numbers.split_faces();
        numbers.shuffle(&mut deck_rng);

        self.enemies = match &self.scenario.enemies {
            Some(order) => EnemyQueue::in_order(order, &self.config.enemy_stats),
            None => EnemyQueue::from_face_cards(&faces, &self.config.enemy_stats, &mut enemy_rng),
        };

        let reserved: FxHashSet<Card> = self
            .scenario
            .hands
            .values()
            .flatten()
            .chain(self.scenario.discard.iter())
            .copied()
            .collect();
        self.deck = match &self.scenario.deck {
            Some(cards) => Deck::from_cards(cards.iter().copied()),
            None => numbers.iter().filter(|c| !reserved.contains(*c)).copied().collect(),
        };

        for player in PlayerId::all(self.config.player_count) {
            let hand = match self.scenario.hands.get(&player) {
                Some(cards) => Hand::from_cards(cards.iter().copied()),
                None => Hand::from_cards(self.deck.draw_many(self.config.starting_hand_size)),
            };
            self.hands[player] = hand;
        }

        self.discard_pile = self.scenario.discard.clone();
        self.current_player = PlayerId::default();
        self.state = GameState::Playing;
        self.turn_count = 0;
        self.victory = false;
        self.game_over = false;
        self.discard.clear();
        self.last_battle_result = None;
        self.history.clear();

        tracing::info!(
            seed = game_rng.seed(),
            players = self.config.player_count,
            deck = self.deck.len(),
            enemies = self.enemies.len(),
            "new game started"
        );
    }

    /// Back to `Menu`, dropping turn progress and any pending discard.
    pub fn reset_game(&mut self) {
        self.state = GameState::Menu;
        self.turn_count = 0;
        self.victory = false;
        self.game_over = false;
        self.discard.clear();
        self.last_battle_result = None;
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn current_player_hand(&self) -> &Hand {
        &self.hands[self.current_player]
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.hands.get(player)
    }

    #[must_use]
    pub fn hand_info(&self, player: PlayerId) -> Option<HandInfo> {
        self.hands.get(player).map(|hand| HandInfo::new(player, hand))
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    #[must_use]
    pub fn enemies(&self) -> &EnemyQueue {
        &self.enemies
    }

    #[must_use]
    pub fn last_battle_result(&self) -> Option<&BattleResult> {
        self.last_battle_result.as_ref()
    }

    /// Committed plays and discards, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Counter-damage still owed; zero outside `DiscardSelection`.
    #[must_use]
    pub fn required_discard_value(&self) -> u32 {
        self.discard.required()
    }

    #[must_use]
    pub fn selected_for_discard(&self) -> &[Card] {
        self.discard.selected()
    }

    /// Number cards held anywhere: deck, hands and discard pile.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len() + self.hands.values().map(Hand::len).sum::<usize>() + self.discard_pile.len()
    }

    #[must_use]
    pub fn game_state_info(&self) -> GameStateInfo {
        let phase = self.enemies.current_phase();
        GameStateInfo {
            game_state: self.state,
            current_enemy: self.enemies.current().map(EnemyInfo::from),
            next_enemy: self.enemies.next_enemy().map(EnemyInfo::from),
            remaining_enemies: self.enemies.remaining(),
            defeated_enemies: self.enemies.defeated(),
            phase,
            phase_label: phase.label().to_string(),
            phase_progress: self.enemies.phase_progress(),
            deck_size: self.deck.len(),
            discard_pile_size: self.discard_pile.len(),
            turn_count: self.turn_count,
            victory: self.victory,
            game_over: self.game_over,
            required_discard_value: self.discard.required(),
            selected_discard_value: self.discard.selected_value(),
        }
    }

    /// Whether `play_cards` would accept `cards` right now.
    #[must_use]
    pub fn can_play_cards(&self, cards: &[Card]) -> bool {
        self.check_play(cards).is_ok()
    }

    /// Forecast a play without committing it.
    ///
    /// `None` for an empty selection or when no enemy is active. The
    /// selection is assumed to be a legal combo.
    #[must_use]
    pub fn calculate_play_effectiveness(&self, cards: &[Card]) -> Option<PlayPreview> {
        if cards.is_empty() {
            return None;
        }
        let enemy = self.enemies.current()?;
        Some(BattleResolver::preview(cards, enemy))
    }

    /// Every single card and same-rank group in the current hand.
    #[must_use]
    pub fn possible_plays(&self) -> Vec<Combo> {
        self.current_player_hand().possible_plays()
    }

    /// Deck empty and every hand empty.
    #[must_use]
    pub fn is_defeat_condition(&self) -> bool {
        self.deck.is_empty() && self.hands.values().all(Hand::is_empty)
    }

    // === Turn flow ===

    /// Play a combo against the current enemy.
    pub fn play_cards(&mut self, cards: &[Card]) -> Result<BattleResult, PlayError> {
        self.check_play(cards).inspect_err(|err| {
            tracing::debug!(%err, "play rejected");
        })?;

        let player = self.current_player;
        let Some(enemy) = self.enemies.current_mut() else {
            return Err(PlayError::NoActiveEnemy);
        };
        let enemy_name = enemy.display_name();
        let mut result = BattleResolver::resolve(cards, enemy);

        let mut ctx = SuitEffectContext {
            hand: &mut self.hands[player],
            deck: &mut self.deck,
            discard: &mut self.discard_pile,
            rng: &mut self.heal_rng,
            max_hand_size: self.config.max_hand_size,
        };
        SuitEffectEngine::apply(&mut ctx, cards, &mut result);

        let played = self.hands[player].remove_cards(cards);
        self.discard_pile.extend(played);
        self.record(player, Action::play(cards));

        if result.enemy_defeated {
            self.enemies.advance();
            tracing::info!(
                enemy = %enemy_name,
                defeated = self.enemies.defeated(),
                remaining = self.enemies.remaining(),
                "enemy defeated"
            );
            if self.enemies.is_all_defeated() {
                self.victory = true;
                self.state = GameState::Victory;
                tracing::info!(turns = self.turn_count, "victory");
                self.last_battle_result = Some(result.clone());
                return Ok(result);
            }
        }

        if result.counter_damage > 0 && !self.hands[player].is_empty() {
            self.discard = DiscardSelection::new(result.counter_damage);
            self.state = GameState::DiscardSelection;
        }

        self.check_defeat();
        self.turn_count += 1;
        self.last_battle_result = Some(result.clone());
        Ok(result)
    }

    /// Select or deselect a card to pay counter-damage with.
    ///
    /// Returns whether the card is now selected.
    pub fn toggle_discard_selection(&mut self, card: Card) -> Result<bool, PlayError> {
        self.expect_state(GameState::DiscardSelection)?;
        if !self.current_player_hand().contains(&card) {
            return Err(PlayError::CardNotInHand(card));
        }
        Ok(self.discard.toggle(card))
    }

    /// Stays false for good when the whole hand is worth less than the
    /// damage owed; the session then has no way forward short of a new deal.
    #[must_use]
    pub fn can_confirm_discard(&self) -> bool {
        self.state == GameState::DiscardSelection && self.discard.is_satisfied()
    }

    /// Pay the counter-damage with the selected cards and return to `Playing`.
    ///
    /// Returns the cards discarded.
    pub fn confirm_discard(&mut self) -> Result<Vec<Card>, PlayError> {
        self.expect_state(GameState::DiscardSelection)?;
        if !self.discard.is_satisfied() {
            let err = PlayError::InsufficientDiscardValue {
                selected: self.discard.selected_value(),
                required: self.discard.required(),
            };
            tracing::debug!(%err, "discard rejected");
            return Err(err);
        }

        let player = self.current_player;
        let discarded = self.hands[player].remove_cards(self.discard.selected());
        self.discard_pile.extend(discarded.iter().copied());
        if let Some(result) = self.last_battle_result.as_mut() {
            result.cards_discarded_to_enemy = discarded.len();
        }
        self.record(player, Action::ConfirmDiscard);

        tracing::debug!(
            paid = self.discard.selected_value(),
            owed = self.discard.required(),
            cards = discarded.len(),
            "counter damage paid"
        );
        self.discard.clear();
        self.state = GameState::Playing;
        self.check_defeat();
        Ok(discarded)
    }

    // === Internals ===

    fn check_play(&self, cards: &[Card]) -> Result<(), PlayError> {
        match self.enemies.current() {
            Some(enemy) if !enemy.is_defeated() => {}
            _ => return Err(PlayError::NoActiveEnemy),
        }
        self.expect_state(GameState::Playing)?;
        self.current_player_hand().validate_combo(cards)
    }

    fn expect_state(&self, expected: GameState) -> Result<(), PlayError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(PlayError::IllegalState {
                expected,
                actual: self.state,
            })
        }
    }

    fn check_defeat(&mut self) {
        if self.is_defeat_condition() {
            self.game_over = true;
            self.state = GameState::Defeat;
            self.discard.clear();
            tracing::info!(
                turns = self.turn_count,
                defeated = self.enemies.defeated(),
                "defeat: deck and hands exhausted"
            );
        }
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push(ActionRecord::new(player, action, self.turn_count, sequence));
    }
}

impl RulesEngine for RegicideGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self) -> Vec<Action> {
        match self.state {
            GameState::Playing => self.possible_plays().into_iter().map(Action::Play).collect(),
            GameState::DiscardSelection => {
                let mut actions: Vec<Action> = self
                    .current_player_hand()
                    .cards()
                    .iter()
                    .map(|&card| Action::ToggleDiscard(card))
                    .collect();
                if self.can_confirm_discard() {
                    actions.push(Action::ConfirmDiscard);
                }
                actions
            }
            GameState::Menu | GameState::Victory | GameState::Defeat => Vec::new(),
        }
    }

    fn apply_action(&mut self, action: &Action) -> Result<ActionOutcome, PlayError> {
        match action {
            Action::Play(cards) => self.play_cards(cards).map(ActionOutcome::Battle),
            Action::ToggleDiscard(card) => self
                .toggle_discard_selection(*card)
                .map(|selected| ActionOutcome::Toggled { card: *card, selected }),
            Action::ConfirmDiscard => self.confirm_discard().map(ActionOutcome::Discarded),
        }
    }

    fn is_terminal(&self) -> Option<GameResult> {
        match self.state {
            GameState::Victory => Some(GameResult::Victory),
            GameState::Defeat => Some(GameResult::Defeat),
            _ => None,
        }
    }
}

/// Builds a session, optionally from a fixed scenario.
///
/// Without overrides `build` deals a normal random game. Overrides pin
/// parts of the layout; cards placed in hands or the discard pile are
/// removed from the dealt deck unless the deck is pinned too.
///
/// ```
/// use regicide_engine::game::{GameState, RegicideGameBuilder};
/// use regicide_engine::core::PlayerId;
///
/// let game = RegicideGameBuilder::new()
///     .seed(7)
///     .hand(PlayerId::new(0), &["5D".parse().unwrap(), "5H".parse().unwrap()])
///     .enemies(&["JH".parse().unwrap()])
///     .build()
///     .unwrap();
///
/// assert_eq!(game.state(), GameState::Playing);
/// assert_eq!(game.current_player_hand().len(), 2);
/// assert_eq!(game.cards_in_play(), 40);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RegicideGameBuilder {
    config: GameConfig,
    seed: u64,
    scenario: Scenario,
}

impl RegicideGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pin the deck; the last card is the top.
    #[must_use]
    pub fn deck(mut self, cards: &[Card]) -> Self {
        self.scenario.deck = Some(cards.to_vec());
        self
    }

    #[must_use]
    pub fn hand(mut self, player: PlayerId, cards: &[Card]) -> Self {
        self.scenario.hands.insert(player, cards.to_vec());
        self
    }

    /// Pin the enemy order; the first card is fought first.
    #[must_use]
    pub fn enemies(mut self, cards: &[Card]) -> Self {
        self.scenario.enemies = Some(cards.to_vec());
        self
    }

    #[must_use]
    pub fn discard_pile(mut self, cards: &[Card]) -> Self {
        self.scenario.discard = cards.to_vec();
        self
    }

    /// Validate, deal, and return a session in `Playing`.
    pub fn build(self) -> Result<RegicideGame, ConfigError> {
        if let Some(&player) = self
            .scenario
            .hands
            .keys()
            .find(|p| p.index() >= self.config.player_count)
        {
            return Err(ConfigError::ScenarioPlayer {
                player,
                players: self.config.player_count,
            });
        }

        let mut game = RegicideGame::new(self.config, self.seed)?;
        game.scenario = self.scenario;
        game.start_new_game();
        Ok(game)
    }
}
