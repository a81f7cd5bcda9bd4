//! Domain layer: pure game logic types and helpers.

pub mod almanac;
pub mod bidding;
pub mod cards_logic;
pub mod cards_types;
pub mod catalog;
pub mod dealing;
pub mod lunar_rules;
pub mod player_view;
pub mod round_lifecycle;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;
pub mod winners;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_game_flow;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use almanac::{GameMode, MoonPhase, Season, SpecialRule};
pub use bidding::{legal_bids, place_bid, BidOutcome};
pub use cards_logic::{can_win, card_beats};
pub use cards_types::{Card, CardId, Element, Power, Suit};
pub use catalog::{build_deck, find_card, generate_standard_deck, special_cards};
pub use dealing::{deal_cards, shuffle_deck};
pub use player_view::CurrentRoundInfo;
pub use round_lifecycle::{initialize_game, initialize_moon_bid_game, RoundSummary};
pub use scoring::{calculate_round_scores, PlayerRoundScore, RoundScores};
pub use seed_derivation::{derive_ai_seed, derive_dealing_seed};
pub use state::{GameState, Phase, Play, Player, PlayerId, Trick};
pub use tricks::{
    apply_trick_result, determine_trick_winner, legal_plays, play_card, PlayOutcome, TrickSummary,
};
pub use winners::{get_game_winners, GameWinners};
