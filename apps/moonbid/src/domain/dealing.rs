//! Shuffling and round-robin dealing.

use rand::Rng;
use tracing::warn;

use crate::domain::state::Player;
use crate::domain::Card;

/// Fisher-Yates shuffle driven by the supplied RNG.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// Deal `cards_per_player` cards to every player, one per player per pass.
///
/// Works on a shuffled copy of `deck`; the slice passed in is never touched.
/// Existing hands are cleared first. If the copy runs out, dealing stops
/// where it is and the short hands are left as they are.
///
/// Returns the undealt remainder.
pub fn deal_cards<R: Rng + ?Sized>(
    deck: &[Card],
    players: &mut [Player],
    cards_per_player: usize,
    rng: &mut R,
) -> Vec<Card> {
    let mut pile = deck.to_vec();
    shuffle_deck(&mut pile, rng);

    for player in players.iter_mut() {
        player.cards.clear();
    }

    let needed = cards_per_player * players.len();
    let mut draw = pile.into_iter();
    let mut dealt = 0usize;
    'passes: for _ in 0..cards_per_player {
        for player in players.iter_mut() {
            let Some(card) = draw.next() else {
                break 'passes;
            };
            player.cards.push(card);
            dealt += 1;
        }
    }

    if dealt < needed {
        warn!(needed, dealt, "deck exhausted while dealing; hands are short");
    }

    draw.collect()
}
