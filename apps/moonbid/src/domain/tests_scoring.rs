use crate::domain::almanac::{GameMode, MoonPhase};
use crate::domain::lunar_rules::RuleSet;
use crate::domain::scoring::{calculate_round_scores, cooperative_score, standard_score};
use crate::domain::test_state_helpers::player;
use crate::errors::domain::DomainError;

fn score_one(bid: u8, tricks: u8, phase: MoonPhase) -> i32 {
    let mut players = vec![player("a", bid, tricks)];
    calculate_round_scores(&mut players, phase, GameMode::Standard).unwrap();
    players[0].score
}

#[test]
fn exact_bid_under_plain_moon_scores_65() {
    assert_eq!(score_one(3, 3, MoonPhase::WaxingGibbous), 65);
}

#[test]
fn full_moon_doubles_the_round() {
    assert_eq!(score_one(3, 3, MoonPhase::FullMoon), 130);
}

#[test]
fn new_moon_doubles_only_the_exact_bonus() {
    // 30 + 35 + 35
    assert_eq!(score_one(3, 3, MoonPhase::NewMoon), 100);
    // missed bid: no bonus to double
    assert_eq!(score_one(3, 1, MoonPhase::NewMoon), 0);
}

#[test]
fn missed_bid_is_floored_at_zero() {
    assert_eq!(score_one(5, 0, MoonPhase::WaxingGibbous), 0);

    let mut players = vec![player("a", 5, 0)];
    let report = calculate_round_scores(&mut players, MoonPhase::FirstQuarter, GameMode::Standard)
        .unwrap();
    assert_eq!(report.players[0].raw_score, -25);
    assert_eq!(report.players[0].final_score, 0);
}

#[test]
fn overtricks_are_penalized_too() {
    // 40 - 2 * 5
    assert_eq!(score_one(2, 4, MoonPhase::FirstQuarter), 30);
}

#[test]
fn lunar_favor_adds_after_moon_rules() {
    let mut players = vec![player("a", 3, 3)];
    players[0].lunar_favor = 3;
    calculate_round_scores(&mut players, MoonPhase::FullMoon, GameMode::Standard).unwrap();
    assert_eq!(players[0].score, 136);
}

#[test]
fn scores_accumulate_across_rounds() {
    let mut players = vec![player("a", 1, 1)];
    players[0].score = 50;
    calculate_round_scores(&mut players, MoonPhase::WaxingCrescent, GameMode::Standard).unwrap();
    // 10 + 25
    assert_eq!(players[0].score, 85);
}

#[test]
fn cooperative_exact_team_bid_scores_100_each() {
    let mut players = vec![player("a", 2, 2), player("b", 1, 1), player("c", 2, 2)];
    let report =
        calculate_round_scores(&mut players, MoonPhase::WaxingGibbous, GameMode::Cooperative)
            .unwrap();
    assert!(players.iter().all(|p| p.score == 100));
    assert_eq!(report.team_bid, Some(5));
    assert_eq!(report.team_tricks, Some(5));
    assert_eq!(report.team_exact, Some(true));
    assert_eq!(report.total(), 300);
}

#[test]
fn cooperative_miss_uses_team_gap() {
    // team bid 6, team tricks 5: tricks * 5 - 10
    let mut players = vec![player("a", 2, 3), player("b", 2, 1), player("c", 2, 1)];
    calculate_round_scores(&mut players, MoonPhase::WaxingGibbous, GameMode::Cooperative)
        .unwrap();
    let scores: Vec<i32> = players.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![5, 0, 0]);
}

#[test]
fn cooperative_ignores_moon_scoring_rules() {
    let mut players = vec![player("a", 1, 1), player("b", 1, 1)];
    calculate_round_scores(&mut players, MoonPhase::FullMoon, GameMode::Cooperative).unwrap();
    assert_eq!(players[0].score, 70);
}

#[test]
fn unsupported_modes_are_rejected_without_mutation() {
    for mode in [
        GameMode::Eclipse,
        GameMode::Solstice,
        GameMode::Equinox,
        GameMode::Ancestral,
    ] {
        let mut players = vec![player("a", 1, 1)];
        let before = players.clone();
        let err = calculate_round_scores(&mut players, MoonPhase::FullMoon, mode).unwrap_err();
        assert_eq!(err, DomainError::UnsupportedGameMode(mode));
        assert_eq!(players, before);
    }
}

#[test]
fn score_helpers_match_formulas() {
    let none = RuleSet::default();
    assert_eq!(standard_score(0, 0, &none), (true, 20));
    assert_eq!(standard_score(2, 0, &none), (false, -10));
    assert_eq!(cooperative_score(4, 3, 3), 80);
    assert_eq!(cooperative_score(4, 3, 5), 0);
}
