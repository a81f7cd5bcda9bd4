//! What one player can see at a decision point.
//!
//! [`CurrentRoundInfo`] is the interface between the engine and AI players:
//! the player's own hand plus the public table state. Other hands are never
//! exposed.

use serde::{Deserialize, Serialize};

use crate::domain::almanac::{GameMode, MoonPhase, Season};
use crate::domain::bidding::legal_bids;
use crate::domain::state::{GameState, Phase, Play, PlayerId};
use crate::domain::tricks::legal_plays;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Public per-seat information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatInfo {
    pub player_id: PlayerId,
    pub name: String,
    pub bid: Option<u8>,
    pub tricks: u8,
    pub score: i32,
    pub lunar_favor: u32,
    pub cards_in_hand: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRoundInfo {
    pub player_id: PlayerId,
    /// Seat index, which is also turn order.
    pub seat: usize,
    pub phase: Phase,
    pub round_number: u32,
    pub total_rounds: u32,
    pub is_my_turn: bool,
    /// The viewing player's hand.
    pub hand: Vec<Card>,
    pub trump_suit: Option<Suit>,
    pub lead_suit: Option<Suit>,
    /// Plays so far in the trick being played.
    pub current_trick_plays: Vec<Play>,
    pub game_mode: GameMode,
    pub moon_phase: MoonPhase,
    pub season: Season,
    pub seats: Vec<SeatInfo>,
    legal_bids: Vec<u8>,
    legal_plays: Vec<Card>,
}

impl CurrentRoundInfo {
    pub fn for_player(state: &GameState, player_id: &str) -> Result<Self, DomainError> {
        let seat = state.player_index(player_id)?;
        let me = &state.players[seat];
        let trick = state.current_trick.as_ref();

        Ok(Self {
            player_id: me.id.clone(),
            seat,
            phase: state.current_phase,
            round_number: state.round_number,
            total_rounds: state.total_rounds,
            is_my_turn: !state.winning_condition_met && state.current_player_index == seat,
            hand: me.cards.clone(),
            trump_suit: state.trump_suit,
            lead_suit: trick.map(|t| t.lead_suit),
            current_trick_plays: trick.map(|t| t.cards.clone()).unwrap_or_default(),
            game_mode: state.game_mode,
            moon_phase: state.moon_phase,
            season: state.season,
            seats: state
                .players
                .iter()
                .map(|p| SeatInfo {
                    player_id: p.id.clone(),
                    name: p.name.clone(),
                    bid: p.bid,
                    tricks: p.tricks,
                    score: p.score,
                    lunar_favor: p.lunar_favor,
                    cards_in_hand: p.cards.len(),
                })
                .collect(),
            legal_bids: legal_bids(state, player_id),
            legal_plays: legal_plays(state, player_id),
        })
    }

    /// Bids this player may place now.
    pub fn legal_bids(&self) -> Vec<u8> {
        self.legal_bids.clone()
    }

    /// Cards this player may play now.
    pub fn legal_plays(&self) -> Vec<Card> {
        self.legal_plays.clone()
    }
}
