use std::collections::HashSet;

use crate::config::GameConfig;
use crate::domain::almanac::{GameMode, MoonPhase, Season};
use crate::domain::bidding::place_bid;
use crate::domain::round_lifecycle::{initialize_game, initialize_moon_bid_game};
use crate::domain::state::{GameState, Phase};
use crate::domain::test_state_helpers::{bid_all, game_with, quiet_game, set_hands};
use crate::domain::tricks::play_card;
use crate::domain::winners::get_game_winners;
use crate::errors::domain::{DomainError, ValidationKind};

/// Drive a game to the end: everyone bids 1, the player on turn plays the
/// first card in hand.
fn play_out(state: &mut GameState) {
    for _ in 0..10_000 {
        if state.winning_condition_met {
            return;
        }
        match state.current_phase {
            Phase::Bidding => {
                let ids: Vec<String> = state.players.iter().map(|p| p.id.clone()).collect();
                for id in ids {
                    place_bid(state, &id, 1).unwrap();
                }
            }
            Phase::Playing => {
                let player = &state.players[state.current_player_index];
                let (pid, cid) = (player.id.clone(), player.cards[0].id.clone());
                play_card(state, &pid, &cid).unwrap();
            }
            Phase::Scoring => unreachable!("scoring is only reached at game end"),
        }
    }
    panic!("game did not finish");
}

#[test]
fn initial_state_is_dealt_and_bidding() {
    let state = quiet_game(&["a", "b", "c"]);
    assert_eq!(state.current_phase, Phase::Bidding);
    assert_eq!(state.round_number, 1);
    assert_eq!(state.current_player_index, 0);
    assert!(state.players.iter().all(|p| p.cards.len() == 3 && p.bid.is_none()));
    assert_eq!(state.deck.len(), 52 - 9);
    assert_eq!(state.lunar_energy, 75);
    assert_eq!(state.team_score, None);

    let mut ids = HashSet::new();
    for card in state.players.iter().flat_map(|p| &p.cards).chain(&state.deck) {
        assert!(ids.insert(card.id.clone()), "duplicate {}", card.id);
    }
}

#[test]
fn default_game_uses_seven_cards_and_five_rounds() {
    let state = initialize_moon_bid_game(
        &["ash", "birch"],
        &["Ash", "Birch"],
        GameMode::Standard,
        MoonPhase::NewMoon,
        Season::Autumn,
    )
    .unwrap();
    assert_eq!(state.total_rounds, 5);
    assert!(state.players.iter().all(|p| p.cards.len() == 7));
    assert_eq!(state.trump_suit, None);
}

#[test]
fn default_game_shrinks_the_hand_for_eight_players() {
    let eight: Vec<String> = (0..8).map(|i| format!("p{i}")).collect();
    let state = initialize_moon_bid_game(
        &eight,
        &eight,
        GameMode::Standard,
        MoonPhase::FullMoon,
        Season::Spring,
    )
    .unwrap();
    assert_eq!(state.cards_per_player, 6);
    assert!(state.players.iter().all(|p| p.cards.len() == 6));
    assert_eq!(state.deck.len(), 52 - 48);

    let seven: Vec<String> = (0..7).map(|i| format!("p{i}")).collect();
    let state = initialize_moon_bid_game(
        &seven,
        &seven,
        GameMode::Standard,
        MoonPhase::FullMoon,
        Season::Spring,
    )
    .unwrap();
    assert_eq!(state.cards_per_player, 7);
}

#[test]
fn initialization_rejects_bad_tables() {
    let config = GameConfig::default();
    let init = |ids: &[&str], names: &[&str], mode| {
        initialize_game(ids, names, mode, MoonPhase::FullMoon, Season::Spring, &config)
    };

    assert!(matches!(
        init(&["solo"], &["Solo"], GameMode::Standard),
        Err(DomainError::Validation(ValidationKind::InvalidPlayerCount, _))
    ));
    assert!(matches!(
        init(&["a", "b"], &["A"], GameMode::Standard),
        Err(DomainError::Validation(ValidationKind::InvalidPlayerCount, _))
    ));
    assert!(matches!(
        init(&["a", "a"], &["A", "A2"], GameMode::Standard),
        Err(DomainError::Validation(ValidationKind::DuplicatePlayer, _))
    ));
    assert_eq!(
        init(&["a", "b"], &["A", "B"], GameMode::Solstice).unwrap_err(),
        DomainError::UnsupportedGameMode(GameMode::Solstice)
    );

    let greedy = GameConfig {
        cards_per_player: 13,
        ..GameConfig::default()
    };
    let eight: Vec<String> = (0..8).map(|i| format!("p{i}")).collect();
    assert_eq!(
        initialize_game(&eight, &eight, GameMode::Standard, MoonPhase::FullMoon, Season::Spring, &greedy)
            .unwrap_err(),
        DomainError::InsufficientCards {
            needed: 104,
            available: 52
        }
    );
}

#[test]
fn round_completion_scores_and_redeals() {
    let mut state = quiet_game(&["a", "b"]);
    set_hands(
        &mut state,
        &[&["herbs_9", "herbs_8", "herbs_7"], &["herbs_2", "herbs_3", "herbs_4"]],
    );
    bid_all(&mut state, &[3, 0]);

    for (a, b) in [("herbs_9", "herbs_2"), ("herbs_8", "herbs_3")] {
        play_card(&mut state, "a", a).unwrap();
        play_card(&mut state, "b", b).unwrap();
    }
    play_card(&mut state, "a", "herbs_7").unwrap();
    let outcome = play_card(&mut state, "b", "herbs_4").unwrap();

    let round = outcome.round.expect("round completed");
    assert_eq!(round.round_number, 1);
    assert!(!round.game_over);
    // a: 30 + 35; b: 0 + 20
    assert_eq!(state.players[0].score, 65);
    assert_eq!(state.players[1].score, 20);

    assert_eq!(state.round_number, 2);
    assert_eq!(state.current_phase, Phase::Bidding);
    assert_eq!(state.current_player_index, 1);
    assert!(state.completed_tricks.is_empty());
    for p in &state.players {
        assert_eq!(p.bid, None);
        assert_eq!(p.tricks, 0);
        assert!(p.winning_cards.is_empty());
        assert_eq!(p.cards.len(), 3);
    }
}

#[test]
fn final_round_sets_terminal_state() {
    let mut state = quiet_game(&["a", "b", "c"]);
    play_out(&mut state);

    assert!(state.winning_condition_met);
    assert_eq!(state.current_phase, Phase::Scoring);
    assert_eq!(state.round_number, state.total_rounds + 1);

    let winners = get_game_winners(&state);
    assert!(!winners.is_team_win);
    let top = state.players.iter().map(|p| p.score).max().unwrap();
    for id in &winners.winner_ids {
        assert_eq!(state.player(id).unwrap().score, top);
    }
}

#[test]
fn terminal_state_is_idempotent() {
    let mut state = quiet_game(&["a", "b"]);
    play_out(&mut state);
    let frozen = state.clone();

    let card = state.players[0].cards.first().map(|c| c.id.clone()).unwrap_or_default();
    assert_eq!(place_bid(&mut state, "a", 0).unwrap_err(), DomainError::GameFinished);
    assert_eq!(play_card(&mut state, "a", &card).unwrap_err(), DomainError::GameFinished);
    assert_eq!(state, frozen);
}

#[test]
fn winners_are_empty_until_the_end() {
    let state = quiet_game(&["a", "b"]);
    assert!(get_game_winners(&state).winner_ids.is_empty());
}

#[test]
fn tied_top_scores_share_the_win() {
    let mut state = quiet_game(&["a", "b", "c"]);
    state.winning_condition_met = true;
    for (p, score) in state.players.iter_mut().zip([40, 55, 55]) {
        p.score = score;
    }
    let winners = get_game_winners(&state);
    assert_eq!(winners.winner_ids, vec!["b".to_string(), "c".to_string()]);
    assert_eq!(winners.winner_names, vec!["b".to_string(), "c".to_string()]);
}

#[test]
fn cooperative_game_is_a_team_win_with_team_score() {
    let mut state = game_with(
        &["a", "b"],
        GameMode::Cooperative,
        MoonPhase::FirstQuarter,
        Season::Autumn,
        GameConfig {
            total_rounds: 1,
            cards_per_player: 2,
            seed: Some(5),
            ..GameConfig::default()
        },
    );
    assert_eq!(state.team_score, Some(0));
    play_out(&mut state);

    let total: i32 = state.players.iter().map(|p| p.score).sum();
    assert_eq!(state.team_score, Some(total));
    let winners = get_game_winners(&state);
    assert!(winners.is_team_win);
    assert_eq!(winners.winner_ids.len(), 2);
}

#[test]
fn same_seed_replays_the_same_game() {
    let mut a = quiet_game(&["a", "b", "c"]);
    let mut b = quiet_game(&["a", "b", "c"]);
    assert_eq!(a, b);
    play_out(&mut a);
    play_out(&mut b);
    assert_eq!(a, b);
}

#[test]
fn rounds_get_fresh_deals() {
    let mut state = quiet_game(&["a", "b"]);
    let first: Vec<String> = state.players[0].cards.iter().map(|c| c.id.clone()).collect();
    state.round_number = 2;
    crate::domain::round_lifecycle::deal_round(&mut state);
    let second: Vec<String> = state.players[0].cards.iter().map(|c| c.id.clone()).collect();
    assert_ne!(first, second);
}
