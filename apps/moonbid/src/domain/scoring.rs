use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::almanac::{GameMode, MoonPhase};
use crate::domain::lunar_rules::{RuleSet, ScoreContext};
use crate::domain::state::{Player, PlayerId};
use crate::errors::domain::DomainError;

/// One player's line in a round's score report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundScore {
    pub player_id: PlayerId,
    pub bid: u8,
    pub tricks: u8,
    /// Individual exact bid (standard) or exact team bid (cooperative).
    pub exact: bool,
    /// Score before the zero floor, lunar favor included.
    pub raw_score: i32,
    /// Amount added to the player's cumulative score.
    pub final_score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScores {
    pub players: Vec<PlayerRoundScore>,
    /// Cooperative mode only.
    pub team_bid: Option<u32>,
    pub team_tricks: Option<u32>,
    pub team_exact: Option<bool>,
}

impl RoundScores {
    /// Sum of final scores awarded this round.
    pub fn total(&self) -> i32 {
        self.players.iter().map(|p| p.final_score).sum()
    }
}

fn favor_bonus(lunar_favor: u32) -> i32 {
    i32::try_from(lunar_favor)
        .unwrap_or(i32::MAX)
        .saturating_mul(2)
}

/// Standard-mode round score before lunar favor and the floor.
///
/// `tricks * 10`, then the exact bonus `20 + bid * 5` or a miss penalty of
/// `|tricks - bid| * 5`, then the moon phase's scoring rules.
pub fn standard_score(bid: u8, tricks: u8, rules: &RuleSet) -> (bool, i32) {
    let exact = bid == tricks;
    let mut score = i32::from(tricks) * 10;
    let exact_bonus = if exact { 20 + i32::from(bid) * 5 } else { 0 };
    if exact {
        score += exact_bonus;
    } else {
        score -= (i32::from(tricks) - i32::from(bid)).abs() * 5;
    }
    let mut ctx = ScoreContext {
        exact,
        exact_bonus,
        score,
    };
    rules.adjust_score(&mut ctx);
    (exact, ctx.score)
}

/// Cooperative-mode round score before lunar favor and the floor.
pub fn cooperative_score(tricks: u8, team_bid: u32, team_tricks: u32) -> i32 {
    let team_bid = i64::from(team_bid);
    let team_tricks = i64::from(team_tricks);
    let score = if team_bid == team_tricks {
        50 + team_bid * 10
    } else {
        i64::from(tricks) * 5 - (team_tricks - team_bid).abs() * 10
    };
    i32::try_from(score).unwrap_or(if score < 0 { i32::MIN } else { i32::MAX })
}

/// Score the just-finished round and add each final score to the player's
/// cumulative total.
///
/// Unsupported modes are rejected before any player is touched.
pub fn calculate_round_scores(
    players: &mut [Player],
    moon_phase: MoonPhase,
    game_mode: GameMode,
) -> Result<RoundScores, DomainError> {
    game_mode.ensure_supported()?;

    let mut report = RoundScores {
        players: Vec::with_capacity(players.len()),
        team_bid: None,
        team_tricks: None,
        team_exact: None,
    };

    match game_mode {
        GameMode::Cooperative => {
            let team_bid: u32 = players.iter().map(|p| u32::from(p.bid.unwrap_or(0))).sum();
            let team_tricks: u32 = players.iter().map(|p| u32::from(p.tricks)).sum();
            let team_exact = team_bid == team_tricks;
            for player in players.iter_mut() {
                let raw = cooperative_score(player.tricks, team_bid, team_tricks)
                    .saturating_add(favor_bonus(player.lunar_favor));
                report.players.push(credit(player, team_exact, raw));
            }
            report.team_bid = Some(team_bid);
            report.team_tricks = Some(team_tricks);
            report.team_exact = Some(team_exact);
        }
        _ => {
            let rules = RuleSet::for_scoring(moon_phase);
            for player in players.iter_mut() {
                let (exact, score) = standard_score(player.bid.unwrap_or(0), player.tricks, &rules);
                let raw = score.saturating_add(favor_bonus(player.lunar_favor));
                report.players.push(credit(player, exact, raw));
            }
        }
    }

    debug!(
        mode = %game_mode,
        phase = %moon_phase,
        total = report.total(),
        "round scored"
    );
    Ok(report)
}

fn credit(player: &mut Player, exact: bool, raw_score: i32) -> PlayerRoundScore {
    let final_score = raw_score.max(0);
    player.score = player.score.saturating_add(final_score);
    PlayerRoundScore {
        player_id: player.id.clone(),
        bid: player.bid.unwrap_or(0),
        tricks: player.tricks,
        exact,
        raw_score,
        final_score,
    }
}
