//! Per-game records written by the simulator.

use moonbid::domain::{RoundScores, RoundSummary};
use moonbid::{get_game_winners, GameState};
use serde::Serialize;

use crate::simulator::GameResult;

/// Complete record of one simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub setup: TableRecord,
    pub result: GameOutcome,
    pub rounds: Vec<RoundRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRecord {
    pub ai_type: String,
    pub players: usize,
    pub game_mode: String,
    pub moon_phase: String,
    pub season: String,
    pub total_rounds: u32,
    pub cards_per_player: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    pub final_scores: Vec<i32>,
    pub winner_ids: Vec<String>,
    pub is_team_win: bool,
    pub team_score: Option<i32>,
    pub actions: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    pub round_no: u32,
    pub bids: Vec<u8>,
    pub tricks: Vec<u8>,
    pub scores: Vec<i32>,
    pub exact_bids: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_exact: Option<bool>,
}

impl From<&RoundSummary> for RoundRecord {
    fn from(summary: &RoundSummary) -> Self {
        let RoundScores {
            players, team_exact, ..
        } = &summary.scores;
        Self {
            round_no: summary.round_number,
            bids: players.iter().map(|p| p.bid).collect(),
            tricks: players.iter().map(|p| p.tricks).collect(),
            scores: players.iter().map(|p| p.final_score).collect(),
            exact_bids: players.iter().filter(|p| p.exact).count(),
            team_exact: *team_exact,
        }
    }
}

impl GameRecord {
    pub fn new(
        game_id: u32,
        ai_type: &str,
        result: &GameResult,
        duration_ms: f64,
        timestamp: String,
    ) -> Self {
        let state: &GameState = &result.final_state;
        let winners = get_game_winners(state);
        Self {
            game_id,
            seed: result.seed,
            timestamp,
            setup: TableRecord {
                ai_type: ai_type.to_string(),
                players: state.players.len(),
                game_mode: state.game_mode.to_string(),
                moon_phase: state.moon_phase.to_string(),
                season: state.season.to_string(),
                total_rounds: state.total_rounds,
                cards_per_player: state.cards_per_player,
            },
            result: GameOutcome {
                final_scores: result.final_scores(),
                winner_ids: winners.winner_ids,
                is_team_win: winners.is_team_win,
                team_score: state.team_score,
                actions: result.actions,
                duration_ms,
            },
            rounds: result.rounds.iter().map(RoundRecord::from).collect(),
        }
    }
}

/// One CSV line per game. Seat scores are `;`-joined since the seat count
/// varies between runs.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub game_mode: String,
    pub moon_phase: String,
    pub season: String,
    pub winners: String,
    pub scores: String,
    pub team_score: Option<i32>,
    pub duration_ms: f64,
}

impl From<&GameRecord> for CsvSummaryRow {
    fn from(record: &GameRecord) -> Self {
        let join = |items: Vec<String>| items.join(";");
        Self {
            game_id: record.game_id,
            seed: record.seed,
            game_mode: record.setup.game_mode.clone(),
            moon_phase: record.setup.moon_phase.clone(),
            season: record.setup.season.clone(),
            winners: join(record.result.winner_ids.clone()),
            scores: join(
                record
                    .result
                    .final_scores
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            team_score: record.result.team_score,
            duration_ms: record.result.duration_ms,
        }
    }
}
