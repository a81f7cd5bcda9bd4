use serde::{Deserialize, Serialize};

use crate::domain::almanac::GameMode;
use crate::domain::state::{GameState, PlayerId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameWinners {
    pub winner_ids: Vec<PlayerId>,
    pub winner_names: Vec<String>,
    pub is_team_win: bool,
}

/// Winners of a finished game; empty while the game is still running.
///
/// Cooperative games are won by the whole table. Otherwise every player on
/// the top score wins, in seat order.
pub fn get_game_winners(state: &GameState) -> GameWinners {
    if !state.winning_condition_met {
        return GameWinners::default();
    }

    if state.game_mode == GameMode::Cooperative {
        return GameWinners {
            winner_ids: state.players.iter().map(|p| p.id.clone()).collect(),
            winner_names: state.players.iter().map(|p| p.name.clone()).collect(),
            is_team_win: true,
        };
    }

    let Some(top) = state.players.iter().map(|p| p.score).max() else {
        return GameWinners::default();
    };
    let (winner_ids, winner_names) = state
        .players
        .iter()
        .filter(|p| p.score == top)
        .map(|p| (p.id.clone(), p.name.clone()))
        .unzip();

    GameWinners {
        winner_ids,
        winner_names,
        is_team_win: false,
    }
}
