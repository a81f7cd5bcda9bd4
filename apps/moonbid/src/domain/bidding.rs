use tracing::{debug, info};

use crate::domain::state::{GameState, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of placing a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidOutcome {
    /// This bid completed the set.
    pub all_bids_placed: bool,
    /// Phase after the bid was recorded.
    pub phase_after: Phase,
}

/// Bids the player may place: `0..=hand size`, empty outside the bidding
/// phase or once the player has bid.
pub fn legal_bids(state: &GameState, player_id: &str) -> Vec<u8> {
    if state.require_phase(Phase::Bidding).is_err() {
        return Vec::new();
    }
    let Ok(player) = state.player(player_id) else {
        return Vec::new();
    };
    if player.bid.is_some() {
        return Vec::new();
    }
    let max = u8::try_from(player.cards.len()).unwrap_or(u8::MAX);
    (0..=max).collect()
}

/// Record a bid for `player_id`.
///
/// Bids are taken in any order. The bid that completes the set moves the game
/// to `Playing` with the round leader on turn.
pub fn place_bid(
    state: &mut GameState,
    player_id: &str,
    bid: u8,
) -> Result<BidOutcome, DomainError> {
    state.require_phase(Phase::Bidding)?;
    let idx = state.player_index(player_id)?;

    let player = &state.players[idx];
    if player.bid.is_some() {
        return Err(DomainError::validation(
            ValidationKind::BidAlreadyPlaced,
            format!("{player_id} has already bid this round"),
        ));
    }
    let hand_size = player.cards.len();
    if usize::from(bid) > hand_size {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("bid {bid} exceeds hand size {hand_size}"),
        ));
    }

    state.players[idx].bid = Some(bid);
    debug!(player_id, bid, round = state.round_number, "bid placed");

    let all_bids_placed = state.all_bids_placed();
    if all_bids_placed {
        state.current_phase = Phase::Playing;
        state.current_player_index = state.round_leader();
        info!(
            round = state.round_number,
            leader = %state.players[state.current_player_index].id,
            "all bids placed; playing begins"
        );
    }

    Ok(BidOutcome {
        all_bids_placed,
        phase_after: state.current_phase,
    })
}
