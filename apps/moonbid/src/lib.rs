#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Moon Bid: the trick-taking card game engine.
//!
//! Everything is synchronous. Operations take `&mut GameState`, validate
//! fully, and then mutate; an `Err` leaves the state as it was.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod telemetry;

// Re-exports for public API
pub use ai::{create_ai, make_ai_bid, AiConfig, AiError, AiPlayer};
pub use config::GameConfig;
pub use domain::{
    calculate_round_scores, deal_cards, determine_trick_winner, generate_standard_deck,
    get_game_winners, initialize_game, initialize_moon_bid_game, place_bid, play_card, Card,
    CurrentRoundInfo, GameMode, GameState, GameWinners, MoonPhase, Phase, Player, Season, Suit,
    Trick,
};
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    moonbid_test_support::logging::init();
}
