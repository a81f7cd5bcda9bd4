//! In-memory game runner.
//!
//! Plays one full game per call, with one AI per seat, through the engine's
//! public operations and records every finished round.

use moonbid::ai::AiPlayer;
use moonbid::domain::player_view::CurrentRoundInfo;
use moonbid::domain::state::{MAX_PLAYERS, MIN_PLAYERS};
use moonbid::domain::RoundSummary;
use moonbid::{
    initialize_game, place_bid, play_card, AiError, DomainError, GameConfig, GameMode, GameState,
    MoonPhase, Phase, Season,
};
use tracing::debug;

/// Guards against a game that never reaches its terminal state.
const MAX_ACTIONS: usize = 1_000_000;

/// Table conditions shared by every simulated game.
#[derive(Debug, Clone)]
pub struct TableSetup {
    pub players: usize,
    pub game_mode: GameMode,
    pub moon_phase: MoonPhase,
    pub season: Season,
    pub config: GameConfig,
}

impl TableSetup {
    /// Reject a table no game could start on, before any game is run.
    pub fn validate(&self) -> Result<(), SimulatorError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(SimulatorError::InvalidSetup(format!(
                "{} players; a game seats {MIN_PLAYERS} to {MAX_PLAYERS}",
                self.players
            )));
        }
        self.game_mode.ensure_supported()?;
        self.config.validate(self.players)?;
        Ok(())
    }
}

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    pub final_state: GameState,
    pub rounds: Vec<RoundSummary>,
    pub actions: usize,
}

impl GameResult {
    pub fn final_scores(&self) -> Vec<i32> {
        self.final_state.players.iter().map(|p| p.score).collect()
    }
}

pub struct Simulator<'a> {
    setup: &'a TableSetup,
    ais: &'a [Box<dyn AiPlayer>],
}

impl<'a> Simulator<'a> {
    pub fn new(setup: &'a TableSetup, ais: &'a [Box<dyn AiPlayer>]) -> Self {
        Self { setup, ais }
    }

    /// Play one game from `seed` to the end.
    pub fn simulate_game(&self, seed: u64) -> Result<GameResult, SimulatorError> {
        let ids: Vec<String> = (0..self.setup.players).map(|i| format!("seat{i}")).collect();
        let names: Vec<String> = (0..self.setup.players).map(|i| format!("Seat {i}")).collect();
        if self.ais.len() != ids.len() {
            return Err(SimulatorError::InvalidSetup(format!(
                "{} AIs for {} seats",
                self.ais.len(),
                ids.len()
            )));
        }

        let config = GameConfig {
            seed: Some(seed),
            ..self.setup.config.clone()
        };
        let mut state = initialize_game(
            &ids,
            &names,
            self.setup.game_mode,
            self.setup.moon_phase,
            self.setup.season,
            &config,
        )?;

        let mut rounds = Vec::new();
        let mut actions = 0usize;
        while !state.winning_condition_met {
            if actions >= MAX_ACTIONS {
                return Err(SimulatorError::Stalled(actions));
            }
            actions += 1;
            match state.current_phase {
                Phase::Bidding => self.bid_next(&mut state)?,
                Phase::Playing => {
                    if let Some(round) = self.play_next(&mut state)? {
                        debug!(round = round.round_number, total = round.scores.total(), "round done");
                        rounds.push(round);
                    }
                }
                Phase::Scoring => {
                    return Err(SimulatorError::InvalidState(
                        "scoring phase before the game finished".into(),
                    ))
                }
            }
        }

        Ok(GameResult {
            seed,
            final_state: state,
            rounds,
            actions,
        })
    }

    /// Seats bid in turn order starting from the round leader.
    fn bid_next(&self, state: &mut GameState) -> Result<(), SimulatorError> {
        let n = state.players.len();
        let leader = state.round_leader();
        let seat = (0..n)
            .map(|offset| (leader + offset) % n)
            .find(|&s| state.players[s].bid.is_none())
            .ok_or_else(|| SimulatorError::InvalidState("bidding with every bid placed".into()))?;

        let id = state.players[seat].id.clone();
        let view = CurrentRoundInfo::for_player(state, &id)?;
        let bid = self.ais[seat]
            .choose_bid(&view)
            .map_err(|e| SimulatorError::Ai(seat, "bid", e))?;
        place_bid(state, &id, bid)?;
        Ok(())
    }

    fn play_next(&self, state: &mut GameState) -> Result<Option<RoundSummary>, SimulatorError> {
        let seat = state.current_player_index;
        let id = state.players[seat].id.clone();
        let view = CurrentRoundInfo::for_player(state, &id)?;
        let card = self.ais[seat]
            .choose_play(&view)
            .map_err(|e| SimulatorError::Ai(seat, "play", e))?;
        let outcome = play_card(state, &id, &card.id)?;
        Ok(outcome.round)
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// AI returned an error
    Ai(usize, &'static str, AiError),
    /// Engine rejected an action
    Domain(DomainError),
    InvalidSetup(String),
    InvalidState(String),
    Stalled(usize),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Ai(seat, action, err) => {
                write!(f, "AI error (seat {seat}, {action}): {err}")
            }
            SimulatorError::Domain(err) => write!(f, "Domain error [{}]: {err}", err.code()),
            SimulatorError::InvalidSetup(msg) => write!(f, "Invalid setup: {msg}"),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
            SimulatorError::Stalled(actions) => {
                write!(f, "Game did not finish after {actions} actions")
            }
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::Domain(err)
    }
}
