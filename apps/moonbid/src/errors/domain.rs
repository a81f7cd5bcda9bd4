//! Domain-level error type used across the engine, AI players and hosts.
//!
//! Every rejected operation leaves the `GameState` untouched, so callers can
//! report the error and carry on with the same snapshot.

use thiserror::Error;

use crate::domain::almanac::GameMode;
use crate::domain::state::Phase;
use crate::errors::ErrorCode;

/// Validation failure kinds that do not warrant their own top-level variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidBid,
    BidAlreadyPlaced,
    InvalidPlayerCount,
    DuplicatePlayer,
    InvalidConfig,
    ParseValue,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A bid or play referenced a player id that is not seated in this game.
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    /// The acting player does not hold the referenced card.
    #[error("card {card_id} is not in the hand of player {player_id}")]
    CardNotInHand { player_id: String, card_id: String },

    /// The action does not belong to the current phase.
    #[error("invalid phase: expected {expected:?}, game is in {actual:?}")]
    InvalidPhase { expected: Phase, actual: Phase },

    /// A card was played by someone other than the current player.
    #[error("out of turn: it is {expected}'s turn, not {actual}'s")]
    OutOfTurn { expected: String, actual: String },

    /// The deck cannot supply the requested hands.
    #[error("insufficient cards: need {needed}, deck holds {available}")]
    InsufficientCards { needed: usize, available: usize },

    /// The game mode is declared but has no rules.
    #[error("unsupported game mode: {0}")]
    UnsupportedGameMode(GameMode),

    /// The final round has been scored; no further mutation is valid.
    #[error("game is finished")]
    GameFinished,

    /// An AI player failed to produce a decision.
    #[error("ai decision failed: {0}")]
    AiDecision(String),

    /// Input or business rule violation.
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn card_not_in_hand(player_id: impl Into<String>, card_id: impl Into<String>) -> Self {
        Self::CardNotInHand {
            player_id: player_id.into(),
            card_id: card_id.into(),
        }
    }

    /// Stable wire code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::PlayerNotFound(_) => ErrorCode::PlayerNotFound,
            DomainError::CardNotInHand { .. } => ErrorCode::CardNotInHand,
            DomainError::InvalidPhase { .. } => ErrorCode::InvalidPhase,
            DomainError::OutOfTurn { .. } => ErrorCode::OutOfTurn,
            DomainError::InsufficientCards { .. } => ErrorCode::InsufficientCards,
            DomainError::UnsupportedGameMode(_) => ErrorCode::UnsupportedGameMode,
            DomainError::GameFinished => ErrorCode::GameFinished,
            DomainError::AiDecision(_) => ErrorCode::AiDecision,
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                ValidationKind::BidAlreadyPlaced => ErrorCode::BidAlreadyPlaced,
                ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
                ValidationKind::DuplicatePlayer => ErrorCode::DuplicatePlayer,
                ValidationKind::InvalidConfig => ErrorCode::ConfigError,
                ValidationKind::ParseValue => ErrorCode::ParseValue,
            },
        }
    }
}
