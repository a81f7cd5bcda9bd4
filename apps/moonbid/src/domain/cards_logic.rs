//! Card game logic: trick eligibility, comparing card strength

use super::cards_types::{Card, Suit};

/// Whether `card` is eligible to win a trick at all (trump or lead suit).
pub fn can_win(card: &Card, lead: Suit, trump: Option<Suit>) -> bool {
    card.suit == lead || Some(card.suit) == trump
}

/// Strictly beats: equal strength never beats, so the earlier card keeps the trick.
pub fn card_beats(a: &Card, b: &Card, lead: Suit, trump: Option<Suit>) -> bool {
    if let Some(trump_suit) = trump {
        let a_trump = a.suit == trump_suit;
        let b_trump = b.suit == trump_suit;
        if a_trump && !b_trump {
            return true;
        }
        if b_trump && !a_trump {
            return false;
        }
        if a_trump && b_trump {
            return a.value > b.value;
        }
    }

    // No trump involved: compare only if following lead
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.value > b.value;
    }
    false
}

/// Lowest card by value, suit order breaking ties.
pub fn lowest_card(cards: &[Card]) -> Option<&Card> {
    cards.iter().min_by_key(|c| (c.value, c.suit))
}
