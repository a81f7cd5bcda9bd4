//! Error codes for the Moon Bid engine.
//!
//! Hosts put these strings on the wire when reporting a rejected action.
//! Add new codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes, one canonical SCREAMING_SNAKE_CASE string each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Action validation
    /// Bid outside `0..=hand size`
    InvalidBid,
    /// Player already bid this round
    BidAlreadyPlaced,
    /// Card not in the acting player's hand
    CardNotInHand,
    /// Not the acting player's turn
    OutOfTurn,
    /// Action does not belong to the current phase
    InvalidPhase,
    /// Game already finished
    GameFinished,

    // Lookups
    /// Unknown player id
    PlayerNotFound,

    // Setup
    /// Player count outside the supported range
    InvalidPlayerCount,
    /// Same player id seated twice
    DuplicatePlayer,
    /// Deck too small for the requested hands
    InsufficientCards,
    /// Declared game mode without rules
    UnsupportedGameMode,
    /// Invalid engine configuration
    ConfigError,
    /// Unparseable enum or card token
    ParseValue,

    // AI
    /// AI player failed to decide
    AiDecision,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBid => "INVALID_BID",
            Self::BidAlreadyPlaced => "BID_ALREADY_PLACED",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::InvalidPhase => "INVALID_PHASE",
            Self::GameFinished => "GAME_FINISHED",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::InsufficientCards => "INSUFFICIENT_CARDS",
            Self::UnsupportedGameMode => "UNSUPPORTED_GAME_MODE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::ParseValue => "PARSE_VALUE",

            Self::AiDecision => "AI_DECISION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
