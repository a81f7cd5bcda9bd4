//! AI player trait definition.

use std::fmt;

use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI has nothing legal to choose from, or chose something illegal
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        DomainError::AiDecision(err.to_string())
    }
}

/// Trait for AI players.
///
/// Implementations see only what [`CurrentRoundInfo`] exposes and must pick
/// from its legal options.
pub trait AiPlayer: Send + Sync {
    /// Choose a bid from `state.legal_bids()`.
    fn choose_bid(&self, state: &CurrentRoundInfo) -> Result<u8, AiError>;

    /// Choose a card from `state.legal_plays()`.
    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError>;
}
