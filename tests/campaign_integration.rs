//! Integration tests for the campaign loop
//!
//! These drive a full session through the public API:
//! - Week and stash accounting across every time-consuming action
//! - Frontier growth (settlements are only ever added or defeated)
//! - The victory condition and its summary
//! - Determinism under a fixed seed

use goblin_commander::campaign::{Campaign, Recruitment, SurrenderOffer};
use goblin_commander::core::error::GameError;
use goblin_commander::core::GameConfig;
use goblin_commander::creature::{Creature, Species, Stats, Title};
use goblin_commander::data::Lexicon;
use goblin_commander::economy::Stash;
use goblin_commander::settlement::SettlementTier;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn campaign(seed: u64, title: Title) -> Campaign {
    Campaign::new(
        GameConfig::default(),
        Lexicon::embedded().expect("embedded lexicon should parse"),
        "Grubnik",
        title,
        ChaCha8Rng::seed_from_u64(seed),
    )
    .expect("default campaign should start")
}

fn brute(beef: i32) -> Creature {
    Creature {
        name: "Thud".into(),
        species: Species::Ogre,
        adjective: "huge".into(),
        stats: Stats::new(beef, 1, 4, 1.0),
        upkeep: Species::Ogre.upkeep(),
        is_commander: false,
    }
}

fn decline(_: &SurrenderOffer) -> bool {
    false
}

// ============================================================================
// Accounting
// ============================================================================

#[test]
fn test_recruitment_costs_weeks_and_upkeep() {
    let mut c = campaign(200, Title::Brainy);
    let upkeep = c.horde.upkeep();

    let turn = c.recruit(Recruitment::Orcs).unwrap();
    assert_eq!(turn.weeks, 4);
    assert_eq!(turn.week, 5);
    assert_eq!(turn.upkeep_paid, upkeep.times(4));
    assert_eq!(c.stash.food, 500 - upkeep.food * 4);
    assert!((4..=6).contains(&turn.outcome.recruited));
    assert_eq!(c.horde.count_of(Species::Orc), turn.outcome.recruited);
}

#[test]
fn test_refused_action_changes_nothing() {
    let mut c = campaign(201, Title::Swift);
    c.stash = Stash::new(0, 0);
    let horde = c.horde.clone();
    let settlements = c.frontier.len();

    let target = c.frontier.raid_targets()[0].id;
    assert!(matches!(
        c.raid(target, &mut decline),
        Err(GameError::InsufficientResources { .. })
    ));
    assert!(matches!(
        c.recruit(Recruitment::Goblins),
        Err(GameError::InsufficientResources { weeks: 2, .. })
    ));
    assert!(c.explore().is_err());

    assert_eq!(c.week, 1);
    assert_eq!(c.horde, horde);
    assert_eq!(c.frontier.len(), settlements);
    assert!(!c.frontier.get(target).unwrap().scouted);
}

#[test]
fn test_long_campaign_keeps_its_books() {
    let mut c = campaign(202, Title::Skullcracker);
    c.stash = Stash::new(100_000, 100_000);

    for step in 0..40 {
        let week = c.week;
        let settlements = c.frontier.len();
        let defeated: Vec<_> = c
            .frontier
            .all()
            .iter()
            .filter(|s| s.defeated)
            .map(|s| s.id)
            .collect();
        let stash = c.stash;
        let upkeep = c.horde.upkeep();
        let weakest = c.frontier.raid_targets().last().map(|s| s.id);

        let result = match step % 4 {
            0 | 2 => match weakest {
                Some(id) => c.raid(id, &mut decline).map(|t| (t.weeks, t.upkeep_paid, t.victory.is_some())),
                None => c.explore().map(|t| (t.weeks, t.upkeep_paid, false)),
            },
            1 => c.recruit(Recruitment::Goblins).map(|t| (t.weeks, t.upkeep_paid, false)),
            _ => c.explore().map(|t| (t.weeks, t.upkeep_paid, false)),
        };
        let (weeks, paid, won) = result.unwrap();

        assert_eq!(c.week, week + weeks);
        assert_eq!(paid, upkeep.times(weeks));
        assert!(c.stash.food + paid.food >= stash.food);
        assert!(c.frontier.len() >= settlements);
        for id in defeated {
            assert!(c.frontier.get(id).unwrap().defeated);
        }
        assert!(c.commander().is_some());
        if won {
            assert!(c.is_won());
            break;
        }
    }
}

#[test]
fn test_same_seed_same_campaign() {
    let run = |seed| {
        let mut c = campaign(seed, Title::Notorious);
        let target = c.frontier.raid_targets()[0].id;
        let _ = c.raid(target, &mut |_: &SurrenderOffer| true);
        let _ = c.recruit(Recruitment::Ogres);
        let _ = c.explore();
        (c.week, c.stash, c.horde.len(), c.frontier.len(), c.summary())
    };
    assert_eq!(run(203), run(203));
}

// ============================================================================
// Victory
// ============================================================================

#[test]
fn test_taking_the_last_castle_wins() {
    let mut c = campaign(204, Title::Skullcracker);
    c.stash = Stash::new(10_000, 10_000);
    c.horde.bolster(vec![brute(10); 50]);

    let castle = c
        .frontier
        .spawn(SettlementTier::GleamingCastle, &c.lexicon, &mut c.rng)
        .unwrap();
    let others: Vec<_> = c
        .frontier
        .all()
        .iter()
        .map(|s| s.id)
        .filter(|id| *id != castle)
        .collect();
    for id in others {
        c.frontier.get_mut(id).unwrap().defeated = true;
    }
    assert!(!c.is_won());

    let before = c.frontier.len();
    let turn = c.raid(castle, &mut decline).unwrap();
    assert!(turn.outcome.is_victory());

    let summary = turn.victory.expect("the last castle fell");
    assert!(c.is_won());
    assert!(turn.discovered.is_empty());
    assert_eq!(c.frontier.len(), before);
    assert_eq!(summary.settlements_conquered, before);
    assert_eq!(summary.weeks_elapsed, 2);
    assert_eq!(summary.commander_name, "Grubnik");
    assert_eq!(summary.stash, c.stash);
}

#[test]
fn test_all_defeated_without_castle_is_not_victory() {
    let mut c = campaign(205, Title::Skullcracker);
    c.stash = Stash::new(10_000, 10_000);
    c.horde.bolster(vec![brute(10); 50]);

    let ids: Vec<_> = c.frontier.all().iter().map(|s| s.id).collect();
    let (last, rest) = ids.split_last().unwrap();
    for id in rest {
        c.frontier.get_mut(*id).unwrap().defeated = true;
    }

    let turn = c.raid(*last, &mut decline).unwrap();
    assert!(turn.outcome.is_victory());
    assert!(turn.victory.is_none());
    // Nothing left to raid, so a fresh batch arrived
    assert_eq!(turn.discovered.len(), 3);
    assert!(!c.is_won());
}
