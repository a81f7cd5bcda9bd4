//! AI players.
//!
//! - [`HeuristicPlayer`]: bids with [`make_ai_bid`], plays greedily
//! - [`RandomPlayer`]: uniformly random legal moves (seedable for tests)

mod config;
mod heuristic;
mod random;
mod trait_def;

pub use config::AiConfig;
pub use heuristic::{make_ai_bid, HeuristicPlayer};
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// AI types [`create_ai`] understands.
pub const AI_TYPES: [&str; 2] = ["heuristic", "random"];

/// Create an AI player from a type name and its configuration.
///
/// Returns `None` if `ai_type` is unrecognized.
pub fn create_ai(ai_type: &str, config: &AiConfig) -> Option<Box<dyn AiPlayer>> {
    match ai_type.to_ascii_lowercase().as_str() {
        "heuristic" => Some(Box::new(HeuristicPlayer::new(config.seed()))),
        "random" => Some(Box::new(RandomPlayer::new(config.seed()))),
        _ => None,
    }
}
