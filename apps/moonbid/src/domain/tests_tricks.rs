use crate::config::GameConfig;
use crate::domain::almanac::{GameMode, MoonPhase, Season};
use crate::domain::state::{Phase, Play, Trick};
use crate::domain::test_state_helpers::{bid_all, cards, game_with, quiet_game, set_hands};
use crate::domain::tricks::{apply_trick_result, determine_trick_winner, play_card};
use crate::domain::{find_card, Suit};
use crate::errors::domain::DomainError;

fn trick(plays: &[(&str, &str)]) -> Trick {
    Trick::from_plays(
        plays
            .iter()
            .map(|(who, id)| Play::new(*who, find_card(id).unwrap()))
            .collect(),
    )
    .unwrap()
}

#[test]
fn trump_beats_higher_lead_card() {
    let t = trick(&[("A", "crystals_9"), ("B", "stars_2")]);
    assert_eq!(determine_trick_winner(&t, Some(Suit::Stars)).as_deref(), Some("B"));
}

#[test]
fn off_suit_cannot_win() {
    let t = trick(&[("A", "herbs_13"), ("B", "crystals_2")]);
    assert_eq!(determine_trick_winner(&t, None).as_deref(), Some("A"));

    let low_lead = trick(&[("A", "herbs_2"), ("B", "crystals_13")]);
    assert_eq!(determine_trick_winner(&low_lead, None).as_deref(), Some("A"));
}

#[test]
fn highest_trump_wins_among_trumps() {
    let t = trick(&[("A", "herbs_13"), ("B", "potions_4"), ("C", "potions_11")]);
    assert_eq!(determine_trick_winner(&t, Some(Suit::Potions)).as_deref(), Some("C"));
}

#[test]
fn equal_value_tie_goes_to_first_played() {
    // special_witchlight is a 4 of stars, same as stars_4
    let t = trick(&[("A", "stars_4"), ("B", "special_witchlight")]);
    assert_eq!(determine_trick_winner(&t, None).as_deref(), Some("A"));
}

#[test]
fn doubled_trick_credits_two_and_void_credits_none() {
    let mut players = vec![
        crate::domain::Player::new("A", "A"),
        crate::domain::Player::new("B", "B"),
    ];

    let mut doubled = trick(&[("A", "herbs_9"), ("B", "herbs_3")]);
    doubled.double_points = true;
    doubled.winner = Some("A".into());
    assert_eq!(apply_trick_result(&doubled, &mut players), 2);
    assert_eq!(players[0].tricks, 2);
    assert_eq!(players[0].winning_cards.len(), 2);

    let mut void = trick(&[("A", "herbs_9"), ("B", "herbs_3")]);
    void.void_trick = true;
    void.winner = Some("A".into());
    assert_eq!(apply_trick_result(&void, &mut players), 0);
    assert_eq!(players[0].tricks, 2);
}

#[test]
fn play_card_rejects_wrong_phase_turn_and_card() {
    let mut state = quiet_game(&["a", "b"]);
    set_hands(&mut state, &[&["herbs_9", "stars_3", "potions_5"], &["herbs_2", "stars_8", "potions_1"]]);

    let err = play_card(&mut state, "a", "herbs_9").unwrap_err();
    assert!(matches!(err, DomainError::InvalidPhase { expected: Phase::Playing, .. }));

    bid_all(&mut state, &[1, 1]);
    let before = state.clone();

    assert_eq!(
        play_card(&mut state, "b", "herbs_2").unwrap_err(),
        DomainError::OutOfTurn {
            expected: "a".into(),
            actual: "b".into()
        }
    );
    assert_eq!(
        play_card(&mut state, "a", "herbs_2").unwrap_err(),
        DomainError::card_not_in_hand("a", "herbs_2")
    );
    assert_eq!(
        play_card(&mut state, "ghost", "herbs_2").unwrap_err(),
        DomainError::PlayerNotFound("ghost".into())
    );
    assert_eq!(state, before);
}

#[test]
fn winner_leads_the_next_trick() {
    let mut state = quiet_game(&["a", "b", "c"]);
    set_hands(
        &mut state,
        &[
            &["herbs_5", "stars_3", "potions_5"],
            &["herbs_12", "stars_8", "potions_1"],
            &["herbs_2", "stars_9", "potions_13"],
        ],
    );
    bid_all(&mut state, &[1, 1, 1]);

    play_card(&mut state, "a", "herbs_5").unwrap();
    play_card(&mut state, "b", "herbs_12").unwrap();
    let outcome = play_card(&mut state, "c", "herbs_2").unwrap();

    let summary = outcome.trick.unwrap();
    assert_eq!(summary.winner.as_deref(), Some("b"));
    assert_eq!(summary.next_leader, "b");
    assert_eq!(state.current_player_index, 1);
    assert_eq!(state.players[1].tricks, 1);
    assert_eq!(state.completed_tricks.len(), 1);
    assert!(state.current_trick.is_none());
}

#[test]
fn lead_suit_follows_the_first_card() {
    let mut state = quiet_game(&["a", "b"]);
    set_hands(&mut state, &[&["potions_2", "stars_3", "herbs_5"], &["herbs_12", "stars_8", "potions_1"]]);
    bid_all(&mut state, &[0, 0]);

    play_card(&mut state, "a", "potions_2").unwrap();
    assert_eq!(state.current_trick.as_ref().map(|t| t.lead_suit), Some(Suit::Potions));
    assert_eq!(state.current_player_index, 1);
    play_card(&mut state, "b", "herbs_12").unwrap();
    assert_eq!(state.players[0].tricks, 1);
}

fn special_game(moon_phase: MoonPhase, season: Season) -> crate::domain::GameState {
    game_with(
        &["a", "b"],
        GameMode::Standard,
        moon_phase,
        season,
        GameConfig {
            total_rounds: 2,
            cards_per_player: 3,
            include_special_cards: true,
            seed: Some(99),
            ..GameConfig::default()
        },
    )
}

#[test]
fn nullify_voids_the_trick_and_the_leader_leads_again() {
    let mut state = special_game(MoonPhase::WaxingGibbous, Season::Summer);
    set_hands(
        &mut state,
        &[&["herbs_13", "stars_3", "potions_5"], &["special_moonveil", "stars_8", "potions_1"]],
    );
    bid_all(&mut state, &[0, 0]);

    play_card(&mut state, "a", "herbs_13").unwrap();
    let outcome = play_card(&mut state, "b", "special_moonveil").unwrap();
    let summary = outcome.trick.unwrap();

    assert!(summary.void_trick);
    assert_eq!(summary.winner, None);
    assert_eq!(summary.tricks_credited, 0);
    assert_eq!(state.players.iter().map(|p| p.tricks).sum::<u8>(), 0);
    assert_eq!(state.current_player_index, 0);
    assert!(state.players[1].special_power_used);
}

#[test]
fn duplicate_counts_double() {
    let mut state = special_game(MoonPhase::WaxingGibbous, Season::Summer);
    set_hands(
        &mut state,
        &[&["potions_2", "stars_3", "herbs_5"], &["special_twin_flame", "stars_8", "herbs_1"]],
    );
    bid_all(&mut state, &[0, 2]);

    play_card(&mut state, "a", "potions_2").unwrap();
    let summary = play_card(&mut state, "b", "special_twin_flame")
        .unwrap()
        .trick
        .unwrap();
    assert!(summary.double_points);
    assert_eq!(summary.tricks_credited, 2);
    assert_eq!(state.players[1].tricks, 2);
}

#[test]
fn last_quarter_cancels_matched_winning_value() {
    let mut state = special_game(MoonPhase::LastQuarter, Season::Spring);
    set_hands(
        &mut state,
        &[&["potions_9", "stars_3", "herbs_5"], &["stars_9", "stars_8", "herbs_1"]],
    );
    bid_all(&mut state, &[0, 0]);

    play_card(&mut state, "a", "potions_9").unwrap();
    let summary = play_card(&mut state, "b", "stars_9").unwrap().trick.unwrap();
    assert!(summary.void_trick);
    assert_eq!(state.players[0].tricks, 0);
}

#[test]
fn boosted_suits_grant_lunar_favor() {
    // Full Moon boosts stars, Summer boosts stars: two favor for one win.
    let mut state = special_game(MoonPhase::FullMoon, Season::Summer);
    set_hands(
        &mut state,
        &[&["stars_12", "stars_3", "herbs_5"], &["stars_2", "potions_8", "herbs_1"]],
    );
    bid_all(&mut state, &[1, 0]);

    play_card(&mut state, "a", "stars_12").unwrap();
    play_card(&mut state, "b", "stars_2").unwrap();
    assert_eq!(state.players[0].lunar_favor, 2);

    // herbs are not boosted under this sky
    play_card(&mut state, "a", "herbs_5").unwrap();
    play_card(&mut state, "b", "herbs_1").unwrap();
    assert_eq!(state.players[0].lunar_favor, 2);
    assert_eq!(cards(&["stars_3"]), state.players[0].cards);
}
