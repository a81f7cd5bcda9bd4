// Drives a whole game with one AI per seat.

use moonbid::domain::player_view::CurrentRoundInfo;
use moonbid::{place_bid, play_card, AiPlayer, DomainError, GameState, Phase};

/// Step limit well above any legal game length.
const MAX_STEPS: usize = 100_000;

/// Let the AIs play until the game is finished. `ais[i]` plays seat `i`.
pub fn run_to_completion(
    state: &mut GameState,
    ais: &[Box<dyn AiPlayer>],
) -> Result<usize, DomainError> {
    for step in 0..MAX_STEPS {
        if state.winning_condition_met {
            return Ok(step);
        }
        match state.current_phase {
            Phase::Bidding => {
                let seat = state
                    .players
                    .iter()
                    .position(|p| p.bid.is_none())
                    .expect("bidding phase with every bid placed");
                let id = state.players[seat].id.clone();
                let view = CurrentRoundInfo::for_player(state, &id)?;
                let bid = ais[seat].choose_bid(&view)?;
                place_bid(state, &id, bid)?;
            }
            Phase::Playing => {
                let seat = state.current_player_index;
                let id = state.players[seat].id.clone();
                let view = CurrentRoundInfo::for_player(state, &id)?;
                let card = ais[seat].choose_play(&view)?;
                play_card(state, &id, &card.id)?;
            }
            Phase::Scoring => panic!("scoring phase without a finished game"),
        }
    }
    panic!("game did not finish within {MAX_STEPS} steps");
}
