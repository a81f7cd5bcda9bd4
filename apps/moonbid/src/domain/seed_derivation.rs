//! RNG seed derivation utilities for deterministic game behavior.
//!
//! One base seed per game; every consumer (dealing, AI seats) derives its own
//! stream so a whole game replays from that one number.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive the seed used to deal a given round.
///
/// Same game seed + round number = same deal.
pub fn derive_dealing_seed(game_seed: u64, round_number: u32) -> u64 {
    game_seed
        .wrapping_add((round_number as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // offset keeps dealing apart from the AI streams
}

/// Derive the seed for an AI seat.
pub fn derive_ai_seed(game_seed: u64, seat: usize) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}

/// RNG for dealing a round.
pub fn dealing_rng(game_seed: u64, round_number: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_dealing_seed(game_seed, round_number))
}
