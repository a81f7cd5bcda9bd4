//! Core card-related types: Card, Suit, Power, affinities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::almanac::{MoonPhase, Season};
use crate::errors::domain::{DomainError, ValidationKind};

pub type CardId = String;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Stars,
    Herbs,
    Potions,
    Crystals,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Stars, Suit::Herbs, Suit::Potions, Suit::Crystals];

    /// Lowercase token used in card ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Stars => "stars",
            Suit::Herbs => "herbs",
            Suit::Potions => "potions",
            Suit::Crystals => "crystals",
        }
    }

    /// Capitalized form used in display names.
    pub const fn title(self) -> &'static str {
        match self {
            Suit::Stars => "Stars",
            Suit::Herbs => "Herbs",
            Suit::Potions => "Potions",
            Suit::Crystals => "Crystals",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.as_str() == lowered)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseValue, format!("unknown suit: {s}"))
            })
    }
}

/// Special ability carried by a special card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    /// Cancels the trick it is played into.
    Nullify,
    /// Lets the holder preview a play (host-side effect).
    Predict,
    /// Lets the holder trade a card (host-side effect).
    Swap,
    /// The trick it is played into counts double.
    Duplicate,
    /// Reveals a hand to the table (host-side effect).
    Illuminate,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
}

/// Immutable card value. Standard cards have ids `"{suit}_{value}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    /// 1..=13
    pub value: u8,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<Power>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunar_affinity: Option<MoonPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elemental_affinity: Option<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_affinity: Option<Season>,
    #[serde(default)]
    pub is_special: bool,
}

impl Card {
    pub const MIN_VALUE: u8 = 1;
    pub const MAX_VALUE: u8 = 13;

    /// Canonical id for a standard card.
    pub fn standard_id(suit: Suit, value: u8) -> CardId {
        format!("{}_{}", suit.as_str(), value)
    }

    pub fn has_power(&self) -> bool {
        self.power.is_some()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
