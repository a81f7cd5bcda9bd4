//! Heuristic player: estimated bids and a greedy card-play policy.
//!
//! Bidding counts likely winners in the hand. Play tries to win tricks
//! while the bid is still open, then tries to lose them.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::cards_logic::{card_beats, lowest_card};
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::state::Trick;
use crate::domain::tricks::determine_trick_winner;
use crate::domain::{Card, Suit};

const HIGH_CARD_VALUE: u8 = 10;
const HIGH_CARD_WEIGHT: f64 = 0.8;
const TRUMP_WEIGHT: f64 = 0.5;
const POWER_WEIGHT: f64 = 0.3;

/// Estimate a bid for `hand`.
///
/// Each card adds 0.8 if its value is 10 or more, 0.5 if it is trump and 0.3
/// if it carries a power. The floored total gets a jitter of -1, 0 or +1 and
/// is clamped to `0..=hand.len()`.
pub fn make_ai_bid<R: Rng + ?Sized>(hand: &[Card], trump_suit: Option<Suit>, rng: &mut R) -> u8 {
    let estimate: f64 = hand
        .iter()
        .map(|card| {
            let mut weight = 0.0;
            if card.value >= HIGH_CARD_VALUE {
                weight += HIGH_CARD_WEIGHT;
            }
            if Some(card.suit) == trump_suit {
                weight += TRUMP_WEIGHT;
            }
            if card.has_power() {
                weight += POWER_WEIGHT;
            }
            weight
        })
        .sum();

    let jitter: i64 = rng.random_range(-1..=1);
    let max = i64::try_from(hand.len()).unwrap_or(i64::MAX).min(i64::from(u8::MAX));
    let bid = (estimate.floor() as i64 + jitter).clamp(0, max);
    u8::try_from(bid).unwrap_or(0)
}

pub struct HeuristicPlayer {
    rng: Mutex<ChaCha8Rng>,
}

impl HeuristicPlayer {
    pub const NAME: &'static str = "HeuristicPlayer";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for HeuristicPlayer {
    fn choose_bid(&self, state: &CurrentRoundInfo) -> Result<u8, AiError> {
        let legal = state.legal_bids();
        let (Some(&min), Some(&max)) = (legal.first(), legal.last()) else {
            return Err(AiError::InvalidMove("No legal bids available".into()));
        };
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(make_ai_bid(&state.hand, state.trump_suit, &mut *rng).clamp(min, max))
    }

    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError> {
        let legal = state.legal_plays();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }

        let me = state
            .seats
            .get(state.seat)
            .ok_or_else(|| AiError::Internal(format!("no seat {}", state.seat)))?;
        let wants_tricks = me.bid.is_some_and(|bid| me.tricks < bid);

        let choice = match (state.lead_suit, current_best(state)) {
            (Some(lead), Some(best)) => {
                let beats = |c: &Card| card_beats(c, &best, lead, state.trump_suit);
                if wants_tricks {
                    // cheapest winner, else throw the lowest card away
                    let winners: Vec<Card> =
                        legal.iter().filter(|c| beats(*c)).cloned().collect();
                    lowest_card(&winners).or_else(|| lowest_card(&legal)).cloned()
                } else {
                    // highest card that still loses, else the lowest
                    legal
                        .iter()
                        .filter(|c| !beats(*c))
                        .max_by_key(|c| (c.value, c.suit))
                        .or_else(|| lowest_card(&legal))
                        .cloned()
                }
            }
            _ if wants_tricks => legal.iter().max_by_key(|c| (c.value, c.suit)).cloned(),
            _ => lowest_card(&legal).cloned(),
        };

        choice.ok_or_else(|| AiError::Internal("no card selected".into()))
    }
}

/// Card currently winning the open trick.
fn current_best(state: &CurrentRoundInfo) -> Option<Card> {
    let trick = Trick::from_plays(state.current_trick_plays.clone())?;
    let winner = determine_trick_winner(&trick, state.trump_suit)?;
    trick.card_of(&winner).cloned()
}
