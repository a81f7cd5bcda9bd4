use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::cards_logic::{can_win, card_beats};
use crate::domain::lunar_rules::RuleSet;
use crate::domain::round_lifecycle::{finish_round, RoundSummary};
use crate::domain::state::{
    find_player_mut, next_seat, GameState, Phase, Play, Player, PlayerId, Trick,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// What a single `play_card` call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayOutcome {
    /// Present when this play completed a trick.
    pub trick: Option<TrickSummary>,
    /// Present when this play completed the round.
    pub round: Option<RoundSummary>,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickSummary {
    /// 1-based within the round.
    pub trick_number: usize,
    pub lead_suit: Suit,
    pub winner: Option<PlayerId>,
    /// Tricks credited to the winner (0 for a void trick).
    pub tricks_credited: u8,
    pub void_trick: bool,
    pub double_points: bool,
    /// Who leads the next trick.
    pub next_leader: PlayerId,
}

/// Cards the player may put down now. Follow-suit is not enforced, so this
/// is the whole hand while the game is in `Playing`.
pub fn legal_plays(state: &GameState, player_id: &str) -> Vec<Card> {
    if state.require_phase(Phase::Playing).is_err() {
        return Vec::new();
    }
    state
        .player(player_id)
        .map(|p| p.cards.clone())
        .unwrap_or_default()
}

/// Winner of a completed trick, or `None` for a void trick.
///
/// Only trump or lead-suit cards are candidates. Trump outranks lead suit,
/// value decides within a suit, and the earlier card keeps the trick on a
/// tie.
pub fn determine_trick_winner(trick: &Trick, trump_suit: Option<Suit>) -> Option<PlayerId> {
    if trick.void_trick {
        return None;
    }
    let lead = trick.lead_suit;
    let mut best: Option<&Play> = None;
    for play in &trick.cards {
        if !can_win(&play.card, lead, trump_suit) {
            continue;
        }
        match best {
            Some(current) if !card_beats(&play.card, &current.card, lead, trump_suit) => {}
            _ => best = Some(play),
        }
    }
    best.map(|p| p.player_id.clone())
}

/// Credit the trick's winner: one trick (two when doubled) and the cards.
/// Void or unresolved tricks credit nobody.
pub fn apply_trick_result(trick: &Trick, players: &mut [Player]) -> u8 {
    if trick.void_trick {
        return 0;
    }
    let Some(winner) = trick.winner.as_deref() else {
        return 0;
    };
    let Some(player) = find_player_mut(players, winner) else {
        return 0;
    };
    let credited = if trick.double_points { 2 } else { 1 };
    player.tricks = player.tricks.saturating_add(credited);
    player
        .winning_cards
        .extend(trick.cards.iter().map(|p| p.card.clone()));
    credited
}

/// Play `card_id` from `player_id`'s hand into the current trick.
///
/// All checks run before anything is mutated. Completing a trick resolves it
/// through the lunar rule pipeline; completing the last trick of a round
/// scores the round and either deals the next one or finishes the game.
pub fn play_card(
    state: &mut GameState,
    player_id: &str,
    card_id: &str,
) -> Result<PlayOutcome, DomainError> {
    state.require_phase(Phase::Playing)?;
    state.game_mode.ensure_supported()?;
    let idx = state.player_index(player_id)?;
    if idx != state.current_player_index {
        let expected = state
            .current_player()
            .map(|p| p.id.clone())
            .unwrap_or_default();
        return Err(DomainError::OutOfTurn {
            expected,
            actual: player_id.to_string(),
        });
    }
    let pos = state.players[idx]
        .hand_position(card_id)
        .ok_or_else(|| DomainError::card_not_in_hand(player_id, card_id))?;

    let card = state.players[idx].cards.remove(pos);
    debug!(player_id, card_id, round = state.round_number, "card played");

    let mut trick = state
        .current_trick
        .take()
        .unwrap_or_else(|| Trick::new(card.suit));
    trick.cards.push(Play::new(player_id, card));

    let player_count = state.players.len();
    if !trick.is_complete(player_count) {
        state.current_trick = Some(trick);
        state.current_player_index = next_seat(idx, player_count);
        return Ok(PlayOutcome {
            trick: None,
            round: None,
            game_over: false,
        });
    }

    let summary = complete_trick(state, trick);
    if !state.all_hands_empty() {
        return Ok(PlayOutcome {
            trick: Some(summary),
            round: None,
            game_over: false,
        });
    }

    let round = finish_round(state)?;
    Ok(PlayOutcome {
        trick: Some(summary),
        game_over: round.game_over,
        round: Some(round),
    })
}

fn complete_trick(state: &mut GameState, mut trick: Trick) -> TrickSummary {
    let rules = RuleSet::for_conditions(state.moon_phase, state.season);

    rules.review_trick(&mut trick, &mut state.players);
    trick.winner = determine_trick_winner(&trick, state.trump_suit);
    rules.judge_trick(&mut trick, &mut state.players);
    let tricks_credited = apply_trick_result(&trick, &mut state.players);

    // Void tricks go back to whoever led them.
    let next_leader = match trick.winner.as_deref() {
        Some(winner) => winner.to_string(),
        None => trick
            .cards
            .first()
            .map(|p| p.player_id.clone())
            .unwrap_or_default(),
    };
    if let Ok(seat) = state.player_index(&next_leader) {
        state.current_player_index = seat;
    }

    debug!(
        winner = ?trick.winner,
        void = trick.void_trick,
        doubled = trick.double_points,
        "trick resolved"
    );

    let summary = TrickSummary {
        trick_number: state.completed_tricks.len() + 1,
        lead_suit: trick.lead_suit,
        winner: trick.winner.clone(),
        tricks_credited,
        void_trick: trick.void_trick,
        double_points: trick.double_points,
        next_leader,
    };
    state.completed_tricks.push(trick);
    summary
}
