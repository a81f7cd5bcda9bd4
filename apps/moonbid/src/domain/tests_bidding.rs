use crate::domain::bidding::{legal_bids, place_bid};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::quiet_game;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;

#[test]
fn last_bid_opens_play_with_round_leader() {
    let mut state = quiet_game(&["a", "b", "c"]);

    let first = place_bid(&mut state, "b", 1).unwrap();
    assert!(!first.all_bids_placed);
    assert_eq!(first.phase_after, Phase::Bidding);
    place_bid(&mut state, "c", 0).unwrap();

    let last = place_bid(&mut state, "a", 3).unwrap();
    assert!(last.all_bids_placed);
    assert_eq!(last.phase_after, Phase::Playing);
    assert_eq!(state.current_phase, Phase::Playing);
    assert_eq!(state.current_player_index, 0);
}

#[test]
fn bid_above_hand_size_is_rejected() {
    let mut state = quiet_game(&["a", "b"]);
    let before = state.clone();
    let err = place_bid(&mut state, "a", 4).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidBid);
    assert_eq!(state, before);
}

#[test]
fn rebidding_is_rejected() {
    let mut state = quiet_game(&["a", "b"]);
    place_bid(&mut state, "a", 2).unwrap();
    let err = place_bid(&mut state, "a", 1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::BidAlreadyPlaced, _)
    ));
    assert_eq!(state.players[0].bid, Some(2));
}

#[test]
fn unknown_player_and_wrong_phase() {
    let mut state = quiet_game(&["a", "b"]);
    assert_eq!(
        place_bid(&mut state, "zed", 0).unwrap_err(),
        DomainError::PlayerNotFound("zed".into())
    );

    place_bid(&mut state, "a", 0).unwrap();
    place_bid(&mut state, "b", 0).unwrap();
    let err = place_bid(&mut state, "a", 0).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidPhase {
            expected: Phase::Bidding,
            actual: Phase::Playing
        }
    );
}

#[test]
fn legal_bids_span_zero_to_hand_size() {
    let mut state = quiet_game(&["a", "b"]);
    assert_eq!(legal_bids(&state, "a"), vec![0, 1, 2, 3]);
    assert!(legal_bids(&state, "nobody").is_empty());

    place_bid(&mut state, "a", 1).unwrap();
    assert!(legal_bids(&state, "a").is_empty());
}

#[test]
fn finished_game_rejects_bids() {
    let mut state = quiet_game(&["a", "b"]);
    state.winning_condition_met = true;
    state.current_phase = Phase::Scoring;
    assert_eq!(place_bid(&mut state, "a", 0).unwrap_err(), DomainError::GameFinished);
}
