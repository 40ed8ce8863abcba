//! Session lifecycle: dealing, the discard sub-protocol, victory, defeat,
//! determinism, and the generic `RulesEngine` driver.

mod common;

use common::{card, cards, fragile_enemies, init_logging, scenario, scenario_no_deck};
use regicide_engine::{
    Action, ActionOutcome, ConfigError, GameConfig, GameResult, GameState, GameStateInfo,
    PlayError, PlayerId, RegicideGame, RegicideGameBuilder, RulesEngine, Suit,
};

fn dealt(config: GameConfig, seed: u64) -> RegicideGame {
    init_logging();
    let mut game = RegicideGame::new(config, seed).unwrap();
    game.start_new_game();
    game
}

#[test]
fn test_new_game_layout() {
    let game = dealt(GameConfig::default(), 42);
    let info = game.game_state_info();

    assert_eq!(info.game_state, GameState::Playing);
    assert_eq!(info.deck_size, 32);
    assert_eq!(info.discard_pile_size, 0);
    assert_eq!(info.remaining_enemies, 12);
    assert_eq!(info.defeated_enemies, 0);
    assert_eq!(info.phase_label, "Phase 1: Jacks");
    assert_eq!(info.phase_progress, Some((0, 4)));
    assert_eq!(info.turn_count, 0);
    assert!(!info.victory);
    assert!(!info.game_over);

    let current = info.current_enemy.unwrap();
    assert_eq!(current.current_health, 20);
    assert_eq!(current.attack, 10);
    assert!(info.next_enemy.is_some());

    let hand = game.hand_info(PlayerId::new(0)).unwrap();
    assert_eq!(hand.size, 8);
    assert!(hand.cards.windows(2).all(|w| w[0] < w[1]));
    assert!(game.hand_info(PlayerId::new(1)).is_none());
}

#[test]
fn test_enemy_queue_is_phase_ordered() {
    let game = dealt(GameConfig::default(), 9);
    let ranks: Vec<u8> = game.enemies().enemies().iter().map(|e| e.card().rank.value()).collect();

    assert!(ranks[..4].iter().all(|&r| r == 11));
    assert!(ranks[4..8].iter().all(|&r| r == 12));
    assert!(ranks[8..].iter().all(|&r| r == 13));

    for phase in game.enemies().enemies().chunks(4) {
        let mut suits: Vec<Suit> = phase.iter().map(|e| e.card().suit).collect();
        suits.sort();
        assert_eq!(suits, Suit::ALL.to_vec());
    }
}

#[test]
fn test_multiplayer_deal() {
    let game = dealt(GameConfig::default().with_players(3), 4);

    assert_eq!(game.deck().len(), 40 - 3 * 8);
    for player in PlayerId::all(3) {
        assert_eq!(game.hand(player).unwrap().len(), 8);
    }
    assert_eq!(game.current_player(), PlayerId::new(0));
    assert_eq!(game.cards_in_play(), 40);
}

#[test]
fn test_invalid_configs_rejected() {
    assert!(matches!(
        RegicideGame::new(GameConfig::default().with_players(5), 1),
        Err(ConfigError::PlayerCount { got: 5, .. })
    ));
    assert!(matches!(
        RegicideGame::new(GameConfig::default().with_starting_hand(11), 1),
        Err(ConfigError::StartingHandOverCap { starting: 11, cap: 10 })
    ));
}

#[test]
fn test_config_from_partial_json() {
    let config: GameConfig = serde_json::from_str(r#"{"player_count": 2}"#).unwrap();
    assert_eq!(config.player_count, 2);
    assert_eq!(config.max_hand_size, 10);
    assert_eq!(config.starting_hand_size, 8);
}

#[test]
fn test_discard_protocol() {
    let mut game = scenario("2H 9S 4C 3C", "JS");
    game.play_cards(&cards("2H")).unwrap();

    assert_eq!(game.state(), GameState::DiscardSelection);
    assert_eq!(game.required_discard_value(), 10);
    assert!(!game.can_confirm_discard());

    // Plays are refused until the counter-damage is paid
    assert_eq!(
        game.play_cards(&cards("9S")),
        Err(PlayError::IllegalState {
            expected: GameState::Playing,
            actual: GameState::DiscardSelection,
        })
    );

    assert!(game.toggle_discard_selection(card("9S")).unwrap());
    assert_eq!(game.game_state_info().selected_discard_value, 9);
    assert_eq!(
        game.confirm_discard(),
        Err(PlayError::InsufficientDiscardValue { selected: 9, required: 10 })
    );
    assert_eq!(game.state(), GameState::DiscardSelection);

    // Deselect and reselect
    assert!(!game.toggle_discard_selection(card("9S")).unwrap());
    assert!(game.selected_for_discard().is_empty());
    game.toggle_discard_selection(card("9S")).unwrap();
    game.toggle_discard_selection(card("3C")).unwrap();
    assert!(game.can_confirm_discard());

    let discarded = game.confirm_discard().unwrap();
    assert_eq!(discarded, cards("9S 3C"));
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.current_player_hand().cards(), cards("4C").as_slice());
    assert_eq!(game.required_discard_value(), 0);
    assert_eq!(game.last_battle_result().unwrap().cards_discarded_to_enemy, 2);
    assert_eq!(game.discard_pile(), cards("2H 9S 3C").as_slice());
    assert_eq!(game.cards_in_play(), 40);
}

#[test]
fn test_toggle_rejections() {
    let mut game = scenario("2H 9S 8S", "JS");

    // Outside discard selection nothing happens
    assert!(matches!(
        game.toggle_discard_selection(card("9S")),
        Err(PlayError::IllegalState { actual: GameState::Playing, .. })
    ));
    assert!(matches!(game.confirm_discard(), Err(PlayError::IllegalState { .. })));
    assert!(!game.can_confirm_discard());

    game.play_cards(&cards("2H")).unwrap();
    assert_eq!(
        game.toggle_discard_selection(card("2H")),
        Err(PlayError::CardNotInHand(card("2H")))
    );
    assert!(game.selected_for_discard().is_empty());
}

#[test]
fn test_counter_damage_with_empty_hand_stays_playing() {
    let mut game = scenario("2H", "JH");

    let result = game.play_cards(&cards("2H")).unwrap();

    assert_eq!(result.counter_damage, 10);
    assert!(game.current_player_hand().is_empty());
    // The deck still has cards, so this is not a loss
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.required_discard_value(), 0);
}

#[test]
fn test_empty_hand_with_cards_in_deck_stalls() {
    let mut game = scenario("2H", "JH");
    game.play_cards(&cards("2H")).unwrap();

    assert_eq!(game.state(), GameState::Playing);
    assert!(!game.deck().is_empty());
    assert!(game.legal_actions().is_empty());
    assert_eq!(game.is_terminal(), None);
}

#[test]
fn test_unpayable_discard_stalls() {
    let mut game = scenario("2S 3H 4H", "KH");
    game.play_cards(&cards("2S")).unwrap();

    assert_eq!(game.state(), GameState::DiscardSelection);
    assert_eq!(game.required_discard_value(), 18);

    for c in cards("3H 4H") {
        game.toggle_discard_selection(c).unwrap();
    }
    let actions = game.legal_actions();
    assert_eq!(actions.len(), 2);
    assert!(!actions.contains(&Action::ConfirmDiscard));
    assert!(!game.can_confirm_discard());
    assert!(game.confirm_discard().is_err());
    assert_eq!(game.is_terminal(), None);
}

#[test]
fn test_defeat_when_deck_and_hand_exhausted() {
    let mut game = scenario_no_deck("2H", "JH");

    game.play_cards(&cards("2H")).unwrap();

    assert_eq!(game.state(), GameState::Defeat);
    assert!(game.game_state_info().game_over);
    assert_eq!(game.is_terminal(), Some(GameResult::Defeat));
    assert!(game.legal_actions().is_empty());
    assert!(game.play_cards(&cards("2H")).is_err());
}

#[test]
fn test_defeat_after_paying_counter_damage() {
    let mut game = scenario_no_deck("2H 10S", "JH");

    game.play_cards(&cards("2H")).unwrap();
    assert_eq!(game.state(), GameState::DiscardSelection);

    game.toggle_discard_selection(card("10S")).unwrap();
    game.confirm_discard().unwrap();

    assert_eq!(game.state(), GameState::Defeat);
}

#[test]
fn test_empty_deck_with_cards_in_hand_is_not_defeat() {
    let mut game = scenario_no_deck("2H 9S 8S 7S", "JH");

    game.play_cards(&cards("2H")).unwrap();
    game.toggle_discard_selection(card("9S")).unwrap();
    game.toggle_discard_selection(card("8S")).unwrap();
    game.confirm_discard().unwrap();

    assert!(game.deck().is_empty());
    assert_eq!(game.current_player_hand().len(), 1);
    assert_eq!(game.state(), GameState::Playing);
    assert!(!game.is_defeat_condition());
}

#[test]
fn test_other_hands_count_toward_defeat() {
    init_logging();
    let mut game = RegicideGameBuilder::new()
        .config(GameConfig::default().with_players(2))
        .deck(&[])
        .hand(PlayerId::new(0), &cards("2H"))
        .hand(PlayerId::new(1), &cards("3H"))
        .enemies(&cards("JH"))
        .build()
        .unwrap();

    game.play_cards(&cards("2H")).unwrap();

    assert!(game.current_player_hand().is_empty());
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn test_kings_defeated_in_sequence_is_victory() {
    init_logging();
    let mut game = RegicideGameBuilder::new()
        .config(fragile_enemies())
        .hand(PlayerId::new(0), &cards("2S 3S 4S 5S"))
        .enemies(&cards("KH KD KS KC"))
        .build()
        .unwrap();

    for play in ["2S", "3S", "4S"] {
        game.play_cards(&cards(play)).unwrap();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.game_state_info().phase_label, "Phase 3: Kings");
    }
    let last = game.play_cards(&cards("5S")).unwrap();

    assert!(last.enemy_defeated);
    let info = game.game_state_info();
    assert_eq!(info.game_state, GameState::Victory);
    assert!(info.victory);
    assert!(info.current_enemy.is_none());
    assert_eq!(info.phase_label, "Victory!");
    assert_eq!(game.is_terminal(), Some(GameResult::Victory));
    assert_eq!(game.play_cards(&cards("2S")), Err(PlayError::NoActiveEnemy));
}

#[test]
fn test_full_game_to_victory() {
    init_logging();
    let mut game = RegicideGameBuilder::new()
        .config(fragile_enemies())
        .seed(21)
        .hand(PlayerId::new(0), &cards("AD 2D 3D 4D 5D 6D 7D 8D 9D 10D"))
        .build()
        .unwrap();

    for _ in 0..12 {
        assert_eq!(game.state(), GameState::Playing);
        let hand = game.current_player_hand();
        let pick = hand
            .cards_of_suit(Suit::Diamonds)
            .first()
            .copied()
            .or_else(|| hand.cards().first().copied())
            .unwrap();
        let result = game.play_cards(&[pick]).unwrap();
        assert!(result.enemy_defeated);
        assert_eq!(game.cards_in_play(), 40);
        assert!(game.current_player_hand().len() <= 10);
    }

    assert_eq!(game.state(), GameState::Victory);
    assert_eq!(game.enemies().defeated(), 12);
    assert_eq!(game.history().len(), 12);
}

#[test]
fn test_turn_counter_and_history() {
    let mut game = scenario("10S 9S 5H", "JH QH");

    game.play_cards(&cards("10S")).unwrap();
    assert_eq!(game.turn_count(), 1);
    game.play_cards(&cards("9S")).unwrap();
    assert_eq!(game.turn_count(), 2);

    let turns: Vec<u32> = game.history().iter().map(|r| r.turn).collect();
    assert_eq!(turns, vec![0, 1]);
    assert_eq!(game.history()[1].action, Action::play(&cards("9S")));
}

#[test]
fn test_reset_and_restart() {
    let mut game = dealt(GameConfig::default(), 8);
    let first = game.current_player_hand().cards()[0];
    game.play_cards(&[first]).unwrap();

    game.reset_game();
    assert_eq!(game.state(), GameState::Menu);
    assert!(game.legal_actions().is_empty());

    game.start_new_game();
    let info = game.game_state_info();
    assert_eq!(info.game_state, GameState::Playing);
    assert_eq!(info.turn_count, 0);
    assert_eq!(info.deck_size, 32);
    assert!(game.history().is_empty());
}

#[test]
fn test_same_seed_replays_identically() {
    let mut a = dealt(GameConfig::default(), 1234);
    let mut b = dealt(GameConfig::default(), 1234);

    for _ in 0..6 {
        if a.state() == GameState::DiscardSelection {
            for game in [&mut a, &mut b] {
                let hand = game.current_player_hand().cards().to_vec();
                for c in hand.into_iter().rev() {
                    if !game.can_confirm_discard() {
                        game.toggle_discard_selection(c).unwrap();
                    }
                }
                if game.can_confirm_discard() {
                    game.confirm_discard().unwrap();
                }
            }
        }
        if a.state() != GameState::Playing {
            break;
        }
        let play = a.possible_plays().last().unwrap().to_vec();
        let ra = a.play_cards(&play).unwrap();
        let rb = b.play_cards(&play).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a.game_state_info(), b.game_state_info());
        assert_eq!(a.current_player_hand(), b.current_player_hand());
        assert_eq!(a.discard_pile(), b.discard_pile());
    }
}

#[test]
fn test_game_state_info_json() {
    let mut game = scenario("5D 5H 2S 3S", "JH QS");
    game.play_cards(&cards("5D 5H")).unwrap();

    let info = game.game_state_info();
    let json = serde_json::to_string(&info).unwrap();
    let back: GameStateInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, info);

    let value: serde_json::Value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["game_state"], "DiscardSelection");
    assert_eq!(value["required_discard_value"], 10);
    assert_eq!(value["current_enemy"]["current_health"], 8);
    assert_eq!(value["next_enemy"]["name"], "Queen of Spades");
}

#[test]
fn test_legal_actions_by_state() {
    let mut game = scenario("7H 7S 2C", "JH");

    let plays = game.legal_actions();
    assert_eq!(plays.len(), 4);
    assert!(game.is_legal(&Action::play(&cards("7H 7S"))));
    assert!(!game.is_legal(&Action::ConfirmDiscard));

    game.apply_action(&Action::play(&cards("2C"))).unwrap();
    assert_eq!(game.state(), GameState::DiscardSelection);

    let actions = game.legal_actions();
    assert_eq!(
        actions,
        vec![Action::ToggleDiscard(card("7H")), Action::ToggleDiscard(card("7S"))]
    );

    let outcome = game.apply_action(&Action::ToggleDiscard(card("7H"))).unwrap();
    assert_eq!(outcome, ActionOutcome::Toggled { card: card("7H"), selected: true });
    game.apply_action(&Action::ToggleDiscard(card("7S"))).unwrap();
    assert!(game.legal_actions().contains(&Action::ConfirmDiscard));

    let outcome = game.apply_action(&Action::ConfirmDiscard).unwrap();
    assert_eq!(outcome, ActionOutcome::Discarded(cards("7H 7S")));
}

/// Drive whole games through the trait only, checking conservation and
/// the hand cap after every action.
#[test]
fn test_generic_driver_keeps_invariants() {
    init_logging();
    for seed in 0..20 {
        let mut game = dealt(GameConfig::default(), seed);
        let mut steps = 0;

        while game.is_terminal().is_none() && steps < 500 {
            let actions = game.legal_actions();
            let action = match game.state() {
                GameState::Playing => actions.last().cloned(),
                GameState::DiscardSelection => actions
                    .iter()
                    .find(|a| **a == Action::ConfirmDiscard)
                    .or_else(|| {
                        actions.iter().find(|a| match a {
                            Action::ToggleDiscard(c) => !game.selected_for_discard().contains(c),
                            _ => false,
                        })
                    })
                    .cloned(),
                _ => None,
            };
            let Some(action) = action else { break };

            let health_before = game.enemies().current().map(|e| e.current_health());
            let outcome = game.apply_action(&action).unwrap();
            if let (ActionOutcome::Battle(result), Some(before)) = (&outcome, health_before) {
                assert_eq!(result.damage_dealt, result.total_attack.min(before));
            }

            assert_eq!(game.cards_in_play(), 40, "seed {seed} step {steps}");
            assert!(game.current_player_hand().len() <= 10);
            steps += 1;
        }
    }
}
