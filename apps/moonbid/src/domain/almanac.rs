//! Moon phases, seasons, game modes and the modifier tables they drive.
//!
//! Each table entry is descriptive data plus the rule it switches on; the
//! rules themselves live in [`super::lunar_rules`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cards_types::Suit;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Modifier table entry for this phase.
    pub fn modifier(self) -> &'static MoonPhaseModifier {
        MOON_PHASE_MODIFIERS
            .iter()
            .find(|m| m.phase == self)
            .unwrap_or(&MOON_PHASE_MODIFIERS[0])
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoonPhase {
    type Err = DomainError;

    /// Accepts the display form ("Full Moon") as well as "full-moon" / "full_moon".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        MoonPhase::ALL
            .into_iter()
            .find(|p| normalize_token(p.as_str()) == wanted)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseValue, format!("unknown moon phase: {s}"))
            })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub const fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    pub fn modifier(self) -> &'static SeasonModifier {
        SEASON_MODIFIERS
            .iter()
            .find(|m| m.season == self)
            .unwrap_or(&SEASON_MODIFIERS[0])
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        Season::ALL
            .into_iter()
            .find(|season| normalize_token(season.as_str()) == wanted)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseValue, format!("unknown season: {s}"))
            })
    }
}

/// Game modes. Only `Standard` and `Cooperative` carry scoring rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Standard,
    Cooperative,
    Eclipse,
    Solstice,
    Equinox,
    Ancestral,
}

impl GameMode {
    pub const ALL: [GameMode; 6] = [
        GameMode::Standard,
        GameMode::Cooperative,
        GameMode::Eclipse,
        GameMode::Solstice,
        GameMode::Equinox,
        GameMode::Ancestral,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::Standard => "standard",
            GameMode::Cooperative => "cooperative",
            GameMode::Eclipse => "eclipse",
            GameMode::Solstice => "solstice",
            GameMode::Equinox => "equinox",
            GameMode::Ancestral => "ancestral",
        }
    }

    pub const fn is_supported(self) -> bool {
        matches!(self, GameMode::Standard | GameMode::Cooperative)
    }

    /// Fails with `UnsupportedGameMode` for modes without scoring rules.
    pub fn ensure_supported(self) -> Result<(), DomainError> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(DomainError::UnsupportedGameMode(self))
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        GameMode::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseValue, format!("unknown game mode: {s}"))
            })
    }
}

/// One-off rules a moon phase can switch on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialRule {
    /// Exact bids pay their bonus twice.
    ExactBidDouble,
    /// The whole round score is doubled, penalties included.
    DoubleRoundScore,
    /// A trick whose winning value is matched by another card is void.
    EqualValuesCancel,
}

#[derive(Debug, Clone, Copy)]
pub struct MoonPhaseModifier {
    pub phase: MoonPhase,
    pub description: &'static str,
    /// Ambient energy shown to players, 0..=100.
    pub lunar_energy: u8,
    /// Winning a trick with this suit earns lunar favor.
    pub boosted_suit: Option<Suit>,
    pub special_rule: Option<SpecialRule>,
}

#[derive(Debug, Clone, Copy)]
pub struct SeasonModifier {
    pub season: Season,
    pub description: &'static str,
    pub boosted_suit: Suit,
}

pub const MOON_PHASE_MODIFIERS: [MoonPhaseModifier; 8] = [
    MoonPhaseModifier {
        phase: MoonPhase::NewMoon,
        description: "The dark moon rewards certainty: exact bids score double.",
        lunar_energy: 10,
        boosted_suit: None,
        special_rule: Some(SpecialRule::ExactBidDouble),
    },
    MoonPhaseModifier {
        phase: MoonPhase::WaxingCrescent,
        description: "New growth stirs; herbs gather strength.",
        lunar_energy: 25,
        boosted_suit: Some(Suit::Herbs),
        special_rule: None,
    },
    MoonPhaseModifier {
        phase: MoonPhase::FirstQuarter,
        description: "Half-lit cauldrons bubble; potions are favored.",
        lunar_energy: 50,
        boosted_suit: Some(Suit::Potions),
        special_rule: None,
    },
    MoonPhaseModifier {
        phase: MoonPhase::WaxingGibbous,
        description: "Crystals hum as the moon swells.",
        lunar_energy: 75,
        boosted_suit: Some(Suit::Crystals),
        special_rule: None,
    },
    MoonPhaseModifier {
        phase: MoonPhase::FullMoon,
        description: "The full moon magnifies everything: round scores double.",
        lunar_energy: 100,
        boosted_suit: Some(Suit::Stars),
        special_rule: Some(SpecialRule::DoubleRoundScore),
    },
    MoonPhaseModifier {
        phase: MoonPhase::WaningGibbous,
        description: "Gratitude for the harvest; herbs are favored.",
        lunar_energy: 75,
        boosted_suit: Some(Suit::Herbs),
        special_rule: None,
    },
    MoonPhaseModifier {
        phase: MoonPhase::LastQuarter,
        description: "Balance returns: cards of equal value cancel each other.",
        lunar_energy: 50,
        boosted_suit: None,
        special_rule: Some(SpecialRule::EqualValuesCancel),
    },
    MoonPhaseModifier {
        phase: MoonPhase::WaningCrescent,
        description: "Quiet reflection; crystals hold the last light.",
        lunar_energy: 25,
        boosted_suit: Some(Suit::Crystals),
        special_rule: None,
    },
];

pub const SEASON_MODIFIERS: [SeasonModifier; 4] = [
    SeasonModifier {
        season: Season::Spring,
        description: "Spring gardens bloom; herbs are empowered.",
        boosted_suit: Suit::Herbs,
    },
    SeasonModifier {
        season: Season::Summer,
        description: "Long summer nights belong to the stars.",
        boosted_suit: Suit::Stars,
    },
    SeasonModifier {
        season: Season::Autumn,
        description: "Autumn harvest fills the potion shelves.",
        boosted_suit: Suit::Potions,
    },
    SeasonModifier {
        season: Season::Winter,
        description: "Winter frost grows crystals.",
        boosted_suit: Suit::Crystals,
    },
];

fn normalize_token(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
        .collect()
}
