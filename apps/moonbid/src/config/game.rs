//! Game configuration.
//!
//! Built from defaults, from a JSON object (as a host would store it), or
//! from `MOONBID_*` environment variables.
//!
//! ```json
//! {"totalRounds": 3, "cardsPerPlayer": 5, "trumpSuit": "stars", "seed": 42}
//! ```

use std::env;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::catalog::{special_cards, STANDARD_DECK_SIZE};
use crate::domain::Suit;
use crate::errors::domain::{DomainError, ValidationKind};

pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;
pub const DEFAULT_CARDS_PER_PLAYER: u8 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub total_rounds: u32,
    pub cards_per_player: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trump_suit: Option<Suit>,
    pub include_special_cards: bool,
    /// Base seed for dealing. Drawn from the OS RNG at game start when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
            trump_suit: None,
            include_special_cards: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse from optional JSON, falling back to defaults when absent or
    /// malformed. Missing fields take their default.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    /// Read overrides from the environment:
    /// `MOONBID_TOTAL_ROUNDS`, `MOONBID_CARDS_PER_PLAYER`, `MOONBID_TRUMP_SUIT`
    /// (a suit or `none`), `MOONBID_SPECIAL_CARDS` and `MOONBID_SEED`.
    pub fn from_env() -> Result<Self, DomainError> {
        let mut config = Self::default();
        if let Some(v) = var("MOONBID_TOTAL_ROUNDS") {
            config.total_rounds = parse("MOONBID_TOTAL_ROUNDS", &v)?;
        }
        if let Some(v) = var("MOONBID_CARDS_PER_PLAYER") {
            config.cards_per_player = parse("MOONBID_CARDS_PER_PLAYER", &v)?;
        }
        if let Some(v) = var("MOONBID_TRUMP_SUIT") {
            config.trump_suit = match v.to_ascii_lowercase().as_str() {
                "none" | "" => None,
                _ => Some(v.parse()?),
            };
        }
        if let Some(v) = var("MOONBID_SPECIAL_CARDS") {
            config.include_special_cards = parse_flag("MOONBID_SPECIAL_CARDS", &v)?;
        }
        if let Some(v) = var("MOONBID_SEED") {
            config.seed = Some(parse("MOONBID_SEED", &v)?);
        }
        Ok(config)
    }

    /// Cards in the deck this configuration deals from.
    pub fn deck_size(&self) -> usize {
        if self.include_special_cards {
            STANDARD_DECK_SIZE + special_cards().len()
        } else {
            STANDARD_DECK_SIZE
        }
    }

    /// Defaults, with the hand shrunk so `player_count` hands fit the deck.
    pub fn for_table(player_count: usize) -> Self {
        let mut config = Self::default();
        let fit = config.deck_size() / player_count.max(1);
        let fit = u8::try_from(fit).unwrap_or(u8::MAX).max(1);
        config.cards_per_player = config.cards_per_player.min(fit);
        config
    }

    /// Reject configurations no table of `player_count` can play.
    pub fn validate(&self, player_count: usize) -> Result<(), DomainError> {
        if self.total_rounds == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                "total_rounds must be at least 1",
            ));
        }
        if self.cards_per_player == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                "cards_per_player must be at least 1",
            ));
        }
        let needed = player_count * usize::from(self.cards_per_player);
        let available = self.deck_size();
        if needed > available {
            return Err(DomainError::InsufficientCards { needed, available });
        }
        Ok(())
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string())
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, DomainError> {
    value.parse().map_err(|_| {
        DomainError::validation(
            ValidationKind::InvalidConfig,
            format!("{key}: cannot parse {value:?}"),
        )
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, DomainError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidConfig,
            format!("{key}: expected a boolean, got {value:?}"),
        )),
    }
}
