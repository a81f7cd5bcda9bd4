//! Lunar rule pipeline.
//!
//! Every active almanac entry (and the special-card powers) becomes a
//! [`LunarRule`] attached to one hook point. A [`RuleSet`] applies the rules
//! for a hook in order:
//!
//! 1. special powers (trick review)
//! 2. the moon phase's special rule (trick verdict or scoring)
//! 3. the moon phase's boosted suit (trick verdict)
//! 4. the season's boosted suit (trick verdict)

use std::fmt;

use tracing::debug;

use crate::domain::almanac::{MoonPhase, Season, SpecialRule};
use crate::domain::cards_types::{Power, Suit};
use crate::domain::state::{find_player_mut, Player, Trick};

/// Where in the round a rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleHook {
    /// Completed trick, before the winner is determined.
    TrickReview,
    /// Completed trick, after the winner is determined and before it is credited.
    TrickVerdict,
    /// Per-player round score, before lunar favor and the zero floor.
    Scoring,
}

/// Working values for one player's standard-mode round score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreContext {
    pub exact: bool,
    /// `20 + bid * 5` when exact, otherwise 0.
    pub exact_bonus: i32,
    pub score: i32,
}

pub trait LunarRule: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn hook(&self) -> RuleHook;

    fn review_trick(&self, _trick: &mut Trick, _players: &mut [Player]) {}

    fn judge_trick(&self, _trick: &mut Trick, _players: &mut [Player]) {}

    fn adjust_score(&self, _ctx: &mut ScoreContext) {}
}

/// Nullify voids the trick, Duplicate doubles it. Each player's power fires
/// at most once per round; later power cards from the same player are inert.
#[derive(Debug)]
pub struct SpecialPowers;

impl LunarRule for SpecialPowers {
    fn name(&self) -> &'static str {
        "special_powers"
    }

    fn hook(&self) -> RuleHook {
        RuleHook::TrickReview
    }

    fn review_trick(&self, trick: &mut Trick, players: &mut [Player]) {
        for idx in 0..trick.cards.len() {
            let Some(power) = trick.cards[idx].card.power else {
                continue;
            };
            let Some(player) = find_player_mut(players, &trick.cards[idx].player_id) else {
                continue;
            };
            if player.special_power_used {
                continue;
            }
            player.special_power_used = true;
            match power {
                Power::Nullify => trick.void_trick = true,
                Power::Duplicate => trick.double_points = true,
                Power::Predict | Power::Swap | Power::Illuminate => {}
            }
            debug!(player_id = %player.id, ?power, "special power used");
        }
    }
}

#[derive(Debug)]
pub struct ExactBidDouble;

impl LunarRule for ExactBidDouble {
    fn name(&self) -> &'static str {
        "exact_bid_double"
    }

    fn hook(&self) -> RuleHook {
        RuleHook::Scoring
    }

    fn adjust_score(&self, ctx: &mut ScoreContext) {
        if ctx.exact {
            ctx.score += ctx.exact_bonus;
        }
    }
}

#[derive(Debug)]
pub struct DoubleRoundScore;

impl LunarRule for DoubleRoundScore {
    fn name(&self) -> &'static str {
        "double_round_score"
    }

    fn hook(&self) -> RuleHook {
        RuleHook::Scoring
    }

    fn adjust_score(&self, ctx: &mut ScoreContext) {
        ctx.score *= 2;
    }
}

#[derive(Debug)]
pub struct EqualValuesCancel;

impl LunarRule for EqualValuesCancel {
    fn name(&self) -> &'static str {
        "equal_values_cancel"
    }

    fn hook(&self) -> RuleHook {
        RuleHook::TrickVerdict
    }

    fn judge_trick(&self, trick: &mut Trick, _players: &mut [Player]) {
        let Some(winner) = trick.winner.as_deref() else {
            return;
        };
        let Some(winning_value) = trick.card_of(winner).map(|c| c.value) else {
            return;
        };
        let matched = trick
            .cards
            .iter()
            .filter(|p| p.card.value == winning_value)
            .count()
            > 1;
        if matched {
            debug!(value = winning_value, "equal values cancel; trick is void");
            trick.void_trick = true;
            trick.winner = None;
        }
    }
}

/// Winning a trick with a card of the boosted suit earns one lunar favor.
#[derive(Debug)]
pub struct BoostedSuitFavor {
    pub suit: Suit,
    pub source: &'static str,
}

impl LunarRule for BoostedSuitFavor {
    fn name(&self) -> &'static str {
        self.source
    }

    fn hook(&self) -> RuleHook {
        RuleHook::TrickVerdict
    }

    fn judge_trick(&self, trick: &mut Trick, players: &mut [Player]) {
        let Some(winner) = trick.winner.clone() else {
            return;
        };
        if trick.card_of(&winner).map(|c| c.suit) != Some(self.suit) {
            return;
        }
        if let Some(player) = find_player_mut(players, &winner) {
            player.lunar_favor += 1;
        }
    }
}

#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn LunarRule>>,
}

impl RuleSet {
    /// All rules active under the given sky.
    pub fn for_conditions(moon_phase: MoonPhase, season: Season) -> Self {
        let phase = moon_phase.modifier();
        let mut rules: Vec<Box<dyn LunarRule>> = vec![Box::new(SpecialPowers)];
        if let Some(rule) = phase.special_rule {
            rules.push(special_rule(rule));
        }
        if let Some(suit) = phase.boosted_suit {
            rules.push(Box::new(BoostedSuitFavor {
                suit,
                source: "moon_phase_boost",
            }));
        }
        rules.push(Box::new(BoostedSuitFavor {
            suit: season.modifier().boosted_suit,
            source: "season_boost",
        }));
        Self { rules }
    }

    /// Scoring rules of a moon phase only.
    pub fn for_scoring(moon_phase: MoonPhase) -> Self {
        let rules = moon_phase
            .modifier()
            .special_rule
            .map(special_rule)
            .into_iter()
            .filter(|r| r.hook() == RuleHook::Scoring)
            .collect();
        Self { rules }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    fn at(&self, hook: RuleHook) -> impl Iterator<Item = &dyn LunarRule> {
        self.rules
            .iter()
            .map(|r| r.as_ref())
            .filter(move |r| r.hook() == hook)
    }

    pub fn review_trick(&self, trick: &mut Trick, players: &mut [Player]) {
        for rule in self.at(RuleHook::TrickReview) {
            rule.review_trick(trick, players);
        }
    }

    pub fn judge_trick(&self, trick: &mut Trick, players: &mut [Player]) {
        for rule in self.at(RuleHook::TrickVerdict) {
            rule.judge_trick(trick, players);
        }
    }

    pub fn adjust_score(&self, ctx: &mut ScoreContext) {
        for rule in self.at(RuleHook::Scoring) {
            rule.adjust_score(ctx);
        }
    }
}

fn special_rule(rule: SpecialRule) -> Box<dyn LunarRule> {
    match rule {
        SpecialRule::ExactBidDouble => Box::new(ExactBidDouble),
        SpecialRule::DoubleRoundScore => Box::new(DoubleRoundScore),
        SpecialRule::EqualValuesCancel => Box::new(EqualValuesCancel),
    }
}
