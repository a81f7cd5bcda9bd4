//! Card catalog: the standard 52-card deck and the special-card expansion.

use once_cell::sync::Lazy;

use super::almanac::{MoonPhase, Season};
use super::cards_types::{Card, Element, Power, Suit};

pub const STANDARD_DECK_SIZE: usize = 52;

static STANDARD_DECK: Lazy<Vec<Card>> = Lazy::new(build_standard_deck);

static SPECIAL_CARDS: Lazy<Vec<Card>> = Lazy::new(build_special_cards);

/// The standard deck in catalog order (suit, then value 1..=13).
pub fn generate_standard_deck() -> Vec<Card> {
    STANDARD_DECK.clone()
}

/// Special cards with unique powers. Additive to the standard deck.
pub fn special_cards() -> Vec<Card> {
    SPECIAL_CARDS.clone()
}

/// Deck used for a game: standard cards, optionally followed by the specials.
pub fn build_deck(include_special: bool) -> Vec<Card> {
    let mut deck = generate_standard_deck();
    if include_special {
        deck.extend(special_cards());
    }
    deck
}

/// Look up a catalog card (standard or special) by id.
pub fn find_card(id: &str) -> Option<Card> {
    STANDARD_DECK
        .iter()
        .chain(SPECIAL_CARDS.iter())
        .find(|c| c.id == id)
        .cloned()
}

fn standard_name(suit: Suit, value: u8) -> String {
    let title = match value {
        1 => "Apprentice",
        11 => "Familiar",
        12 => "Elder",
        13 => "Witch",
        _ => return format!("{value} of {}", suit.title()),
    };
    format!("{title} of {}", suit.title())
}

fn build_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(STANDARD_DECK_SIZE);
    for suit in Suit::ALL {
        for value in Card::MIN_VALUE..=Card::MAX_VALUE {
            deck.push(Card {
                id: Card::standard_id(suit, value),
                suit,
                value,
                name: standard_name(suit, value),
                power: None,
                lunar_affinity: None,
                elemental_affinity: None,
                seasonal_affinity: None,
                is_special: false,
            });
        }
    }
    deck
}

struct SpecialTemplate {
    slug: &'static str,
    name: &'static str,
    suit: Suit,
    value: u8,
    power: Power,
    moon: MoonPhase,
    element: Element,
    season: Season,
}

const SPECIAL_TEMPLATES: [SpecialTemplate; 5] = [
    SpecialTemplate {
        slug: "moonveil",
        name: "Moonveil Shroud",
        suit: Suit::Crystals,
        value: 7,
        power: Power::Nullify,
        moon: MoonPhase::NewMoon,
        element: Element::Water,
        season: Season::Winter,
    },
    SpecialTemplate {
        slug: "seers_eye",
        name: "Seer's Eye",
        suit: Suit::Stars,
        value: 9,
        power: Power::Predict,
        moon: MoonPhase::FullMoon,
        element: Element::Air,
        season: Season::Summer,
    },
    SpecialTemplate {
        slug: "changeling_charm",
        name: "Changeling Charm",
        suit: Suit::Herbs,
        value: 6,
        power: Power::Swap,
        moon: MoonPhase::WaxingCrescent,
        element: Element::Earth,
        season: Season::Spring,
    },
    SpecialTemplate {
        slug: "twin_flame",
        name: "Twin Flame Elixir",
        suit: Suit::Potions,
        value: 8,
        power: Power::Duplicate,
        moon: MoonPhase::WaxingGibbous,
        element: Element::Fire,
        season: Season::Autumn,
    },
    SpecialTemplate {
        slug: "witchlight",
        name: "Witchlight Lantern",
        suit: Suit::Stars,
        value: 4,
        power: Power::Illuminate,
        moon: MoonPhase::WaningCrescent,
        element: Element::Fire,
        season: Season::Autumn,
    },
];

fn build_special_cards() -> Vec<Card> {
    SPECIAL_TEMPLATES
        .iter()
        .map(|t| Card {
            id: format!("special_{}", t.slug),
            suit: t.suit,
            value: t.value,
            name: t.name.to_string(),
            power: Some(t.power),
            lunar_affinity: Some(t.moon),
            elemental_affinity: Some(t.element),
            seasonal_affinity: Some(t.season),
            is_special: true,
        })
        .collect()
}
