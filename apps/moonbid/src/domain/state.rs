use serde::{Deserialize, Serialize};

use crate::domain::almanac::{GameMode, MoonPhase, Season};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

pub type PlayerId = String;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Every player commits to a trick count.
    Bidding,
    /// Tricks are played one card per turn.
    Playing,
    /// Final round scored; terminal once `winning_condition_met` is set.
    Scoring,
}

/// A seated player. Persists for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Current hand.
    pub cards: Vec<Card>,
    /// Bid for this round; `None` until placed.
    pub bid: Option<u8>,
    /// Tricks won this round.
    pub tricks: u8,
    /// Cumulative score across rounds.
    pub score: i32,
    /// Cumulative bonus currency, added to every round score.
    pub lunar_favor: u32,
    pub special_power_used: bool,
    /// Cards collected from tricks won this round.
    pub winning_cards: Vec<Card>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cards: Vec::new(),
            bid: None,
            tricks: 0,
            score: 0,
            lunar_favor: 0,
            special_power_used: false,
            winning_cards: Vec::new(),
        }
    }

    /// Clear per-round fields. Score and favor carry over.
    pub fn reset_for_round(&mut self) {
        self.bid = None;
        self.tricks = 0;
        self.winning_cards.clear();
        self.special_power_used = false;
    }

    pub fn hand_position(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }
}

/// One card played into a trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub player_id: PlayerId,
    pub card: Card,
}

impl Play {
    pub fn new(player_id: impl Into<PlayerId>, card: Card) -> Self {
        Self {
            player_id: player_id.into(),
            card,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
    /// Suit of the first card played.
    pub lead_suit: Suit,
    /// Plays in order.
    pub cards: Vec<Play>,
    pub winner: Option<PlayerId>,
    /// Winner is credited two tricks.
    pub double_points: bool,
    /// Cancelled by a special effect; nobody is credited.
    pub void_trick: bool,
}

impl Trick {
    pub fn new(lead_suit: Suit) -> Self {
        Self {
            lead_suit,
            cards: Vec::new(),
            winner: None,
            double_points: false,
            void_trick: false,
        }
    }

    /// Build a trick from plays; the lead suit is taken from the first play.
    pub fn from_plays(plays: Vec<Play>) -> Option<Self> {
        let lead_suit = plays.first()?.card.suit;
        Some(Self {
            cards: plays,
            ..Self::new(lead_suit)
        })
    }

    pub fn is_complete(&self, player_count: usize) -> bool {
        self.cards.len() == player_count
    }

    /// The card the given player put into this trick.
    pub fn card_of(&self, player_id: &str) -> Option<&Card> {
        self.cards
            .iter()
            .find(|p| p.player_id == player_id)
            .map(|p| &p.card)
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Seat order defines turn rotation.
    pub players: Vec<Player>,
    pub current_phase: Phase,
    pub current_player_index: usize,
    /// 1-based.
    pub round_number: u32,
    pub total_rounds: u32,
    /// Cards left undealt this round.
    pub deck: Vec<Card>,
    pub current_trick: Option<Trick>,
    /// Tricks completed this round.
    pub completed_tricks: Vec<Trick>,
    pub trump_suit: Option<Suit>,
    pub game_mode: GameMode,
    pub moon_phase: MoonPhase,
    pub season: Season,
    pub lunar_energy: u8,
    pub winning_condition_met: bool,
    /// Cooperative mode only.
    pub team_score: Option<i32>,
    /// Base seed; each round's deal derives from it.
    pub seed: u64,
    pub cards_per_player: u8,
    pub include_special_cards: bool,
}

impl GameState {
    pub fn player_index(&self, player_id: &str) -> Result<usize, DomainError> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| DomainError::PlayerNotFound(player_id.to_string()))
    }

    pub fn player(&self, player_id: &str) -> Result<&Player, DomainError> {
        let idx = self.player_index(player_id)?;
        Ok(&self.players[idx])
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn all_bids_placed(&self) -> bool {
        self.players.iter().all(|p| p.bid.is_some())
    }

    pub fn all_hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.cards.is_empty())
    }

    /// Seat that opens bidding and leads the first trick of the current round.
    pub fn round_leader(&self) -> usize {
        let rounds_elapsed = self.round_number.saturating_sub(1) as usize;
        rounds_elapsed % self.players.len().max(1)
    }

    /// Reject mutation once finished, or outside the expected phase.
    pub fn require_phase(&self, expected: Phase) -> Result<(), DomainError> {
        if self.winning_condition_met {
            return Err(DomainError::GameFinished);
        }
        if self.current_phase != expected {
            return Err(DomainError::InvalidPhase {
                expected,
                actual: self.current_phase,
            });
        }
        Ok(())
    }
}

/// Seat / turn math helpers.
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: usize, delta: isize, player_count: usize) -> usize {
    let n = player_count.max(1) as isize;
    (seat as isize + delta).rem_euclid(n) as usize
}

/// Next seat clockwise, wrapping.
#[inline]
pub fn next_seat(seat: usize, player_count: usize) -> usize {
    seat_offset(seat, 1, player_count)
}

pub fn find_player_mut<'a>(players: &'a mut [Player], player_id: &str) -> Option<&'a mut Player> {
    players.iter_mut().find(|p| p.id == player_id)
}
