//! Game setup and the round boundary: dealing, scoring, and the terminal
//! transition.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GameConfig;
use crate::domain::almanac::{GameMode, MoonPhase, Season};
use crate::domain::catalog::build_deck;
use crate::domain::dealing::deal_cards;
use crate::domain::scoring::{calculate_round_scores, RoundScores};
use crate::domain::seed_derivation::dealing_rng;
use crate::domain::state::{GameState, Phase, Player, MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Report for a completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    /// The round that was just scored.
    pub round_number: u32,
    pub scores: RoundScores,
    pub game_over: bool,
}

/// Start a game with default configuration.
///
/// Tables too large for the default seven-card hand (eight players) get the
/// largest hand the deck can deal to everyone.
pub fn initialize_moon_bid_game<S: AsRef<str>>(
    player_ids: &[S],
    player_names: &[S],
    game_mode: GameMode,
    moon_phase: MoonPhase,
    season: Season,
) -> Result<GameState, DomainError> {
    initialize_game(
        player_ids,
        player_names,
        game_mode,
        moon_phase,
        season,
        &GameConfig::for_table(player_ids.len()),
    )
}

/// Start a game: seat the players and deal round 1.
///
/// The returned state is in `Bidding` with seat 0 on turn.
pub fn initialize_game<S: AsRef<str>>(
    player_ids: &[S],
    player_names: &[S],
    game_mode: GameMode,
    moon_phase: MoonPhase,
    season: Season,
    config: &GameConfig,
) -> Result<GameState, DomainError> {
    game_mode.ensure_supported()?;

    let count = player_ids.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("{count} players; a game seats {MIN_PLAYERS} to {MAX_PLAYERS}"),
        ));
    }
    if player_names.len() != count {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("{count} player ids but {} names", player_names.len()),
        ));
    }
    let mut seen = HashSet::with_capacity(count);
    for id in player_ids {
        if !seen.insert(id.as_ref()) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayer,
                format!("player id {} is seated twice", id.as_ref()),
            ));
        }
    }
    config.validate(count)?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let players = player_ids
        .iter()
        .zip(player_names)
        .map(|(id, name)| Player::new(id.as_ref(), name.as_ref()))
        .collect();

    let mut state = GameState {
        players,
        current_phase: Phase::Bidding,
        current_player_index: 0,
        round_number: 1,
        total_rounds: config.total_rounds,
        deck: Vec::new(),
        current_trick: None,
        completed_tricks: Vec::new(),
        trump_suit: config.trump_suit,
        game_mode,
        moon_phase,
        season,
        lunar_energy: moon_phase.modifier().lunar_energy,
        winning_condition_met: false,
        team_score: (game_mode == GameMode::Cooperative).then_some(0),
        seed,
        cards_per_player: config.cards_per_player,
        include_special_cards: config.include_special_cards,
    };
    deal_round(&mut state);

    info!(
        players = count,
        mode = %game_mode,
        moon_phase = %moon_phase,
        season = %season,
        rounds = state.total_rounds,
        seed,
        "game initialized"
    );
    Ok(state)
}

/// Deal the current round from a fresh deck and open bidding.
pub fn deal_round(state: &mut GameState) {
    let deck = build_deck(state.include_special_cards);
    let mut rng = dealing_rng(state.seed, state.round_number);
    state.deck = deal_cards(
        &deck,
        &mut state.players,
        usize::from(state.cards_per_player),
        &mut rng,
    );
    state.current_trick = None;
    state.completed_tricks.clear();
    state.current_phase = Phase::Bidding;
    state.current_player_index = state.round_leader();
}

/// Score the round that just ended and move to the next one, or finish.
pub(crate) fn finish_round(state: &mut GameState) -> Result<RoundSummary, DomainError> {
    let scores = calculate_round_scores(&mut state.players, state.moon_phase, state.game_mode)?;
    if let Some(team) = state.team_score.as_mut() {
        *team = team.saturating_add(scores.total());
    }

    let round_number = state.round_number;
    state.round_number += 1;
    let game_over = state.round_number > state.total_rounds;

    if game_over {
        state.current_phase = Phase::Scoring;
        state.winning_condition_met = true;
        state.current_trick = None;
        info!(rounds = round_number, "game finished");
    } else {
        for player in &mut state.players {
            player.reset_for_round();
        }
        deal_round(state);
        info!(round = state.round_number, "round dealt");
    }

    Ok(RoundSummary {
        round_number,
        scores,
        game_over,
    })
}
