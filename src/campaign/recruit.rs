//! Recruitment of goblins, ogres and orcs into the horde
//!
//! Every recruit joins with its reputation lifted to a floor derived from
//! the horde's current average, so newcomers are never far behind.

use rand::Rng;

use crate::core::error::Result;
use crate::creature::{Creature, CreatureGroup, Species, REPUTATION_MAX};
use crate::data::Lexicon;

/// Recruits start at no less than this fraction of the horde's average reputation
pub const RECRUIT_REPUTATION_FLOOR: f64 = 0.9;

/// Average horde quickness above which ogres can be lured without bait
pub const OGRE_QUICKNESS_THRESHOLD: f64 = 6.0;

/// Goblins fed to the ogres when the horde is too slow to outrun them
pub const OGRE_BAIT: (u32, u32) = (3, 5);

pub const OGRE_RECRUITS: (u32, u32) = (2, 3);
pub const ORC_RECRUITS: (u32, u32) = (4, 6);

/// How far the commander's name carries, which sets the goblin turnout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renown {
    Legendary,
    Famous,
    Known,
    Rumoured,
    Obscure,
    Unknown,
}

impl Renown {
    pub fn from_reputation(reputation: f64) -> Self {
        if reputation >= REPUTATION_MAX {
            Renown::Legendary
        } else if reputation > 4.0 {
            Renown::Famous
        } else if reputation > 3.0 {
            Renown::Known
        } else if reputation > 2.0 {
            Renown::Rumoured
        } else if reputation > 1.0 {
            Renown::Obscure
        } else {
            Renown::Unknown
        }
    }

    /// Inclusive range of goblins that answer the call
    pub fn goblin_turnout(&self) -> (u32, u32) {
        match self {
            Renown::Legendary => (4, 5),
            Renown::Famous => (3, 4),
            Renown::Known => (2, 4),
            Renown::Rumoured => (1, 3),
            Renown::Obscure => (1, 2),
            Renown::Unknown => (0, 1),
        }
    }
}

/// Result of one recruitment action
#[derive(Debug, Clone, PartialEq)]
pub struct RecruitReport {
    pub species: Species,
    pub recruited: usize,
    /// Horde members lost while recruiting
    pub lost: Vec<Creature>,
    pub renown: Option<Renown>,
}

/// Add `min..=max` fresh creatures of `species` to the horde
///
/// The reputation floor is taken from the horde before anyone joins.
/// Returns how many joined.
pub fn add_recruits(
    horde: &mut CreatureGroup,
    species: Species,
    min: u32,
    max: u32,
    lexicon: &Lexicon,
    rng: &mut impl Rng,
) -> Result<usize> {
    let floor = if horde.is_empty() {
        0.0
    } else {
        RECRUIT_REPUTATION_FLOOR * horde.avg_reputation()
    };

    let (min, max) = if min > max { (max, min) } else { (min, max) };
    let count = rng.gen_range(min..=max);
    let mut recruits = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut creature = Creature::generate(species, lexicon, rng)?;
        creature.stats.raise_reputation_to(floor);
        recruits.push(creature);
    }

    tracing::debug!(?species, count, floor, "Recruits joined the horde");
    horde.bolster(recruits);
    Ok(count as usize)
}

/// Turnout is keyed off the commander's reputation, or the horde's
/// average if it has lost its commander
pub fn recruit_goblins(
    horde: &mut CreatureGroup,
    lexicon: &Lexicon,
    rng: &mut impl Rng,
) -> Result<RecruitReport> {
    let reputation = match horde.commander() {
        Some(commander) => commander.stats.reputation.value,
        None if horde.is_empty() => 0.0,
        None => horde.avg_reputation(),
    };
    let renown = Renown::from_reputation(reputation);
    let (min, max) = renown.goblin_turnout();
    let recruited = add_recruits(horde, Species::Goblin, min, max, lexicon, rng)?;

    Ok(RecruitReport {
        species: Species::Goblin,
        recruited,
        lost: Vec::new(),
        renown: Some(renown),
    })
}

/// A slow horde loses a few goblins to the ogres' appetite first
pub fn recruit_ogres(
    horde: &mut CreatureGroup,
    lexicon: &Lexicon,
    rng: &mut impl Rng,
) -> Result<RecruitReport> {
    let swift = !horde.is_empty() && horde.avg_quickness() > OGRE_QUICKNESS_THRESHOLD;
    let lost = if swift {
        Vec::new()
    } else {
        horde.cull(&[Species::Goblin], OGRE_BAIT.0, OGRE_BAIT.1, rng)
    };
    if !lost.is_empty() {
        tracing::info!(eaten = lost.len(), "Ogres ate goblins during recruitment");
    }

    let recruited = add_recruits(
        horde,
        Species::Ogre,
        OGRE_RECRUITS.0,
        OGRE_RECRUITS.1,
        lexicon,
        rng,
    )?;

    Ok(RecruitReport {
        species: Species::Ogre,
        recruited,
        lost,
        renown: None,
    })
}

pub fn recruit_orcs(
    horde: &mut CreatureGroup,
    lexicon: &Lexicon,
    rng: &mut impl Rng,
) -> Result<RecruitReport> {
    let recruited = add_recruits(horde, Species::Orc, ORC_RECRUITS.0, ORC_RECRUITS.1, lexicon, rng)?;
    Ok(RecruitReport {
        species: Species::Orc,
        recruited,
        lost: Vec::new(),
        renown: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::{Stats, Title};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn lexicon() -> Lexicon {
        Lexicon::embedded().expect("embedded lexicon should parse")
    }

    fn goblin(quickness: i32, reputation: f64) -> Creature {
        Creature {
            name: "Snik".into(),
            species: Species::Goblin,
            adjective: "grubby".into(),
            stats: Stats::new(2, 5, quickness, reputation),
            upkeep: Species::Goblin.upkeep(),
            is_commander: false,
        }
    }

    #[test]
    fn test_renown_bands() {
        assert_eq!(Renown::from_reputation(5.0), Renown::Legendary);
        assert_eq!(Renown::from_reputation(4.5), Renown::Famous);
        assert_eq!(Renown::from_reputation(4.0), Renown::Known);
        assert_eq!(Renown::from_reputation(3.0), Renown::Rumoured);
        assert_eq!(Renown::from_reputation(2.0), Renown::Obscure);
        assert_eq!(Renown::from_reputation(1.0), Renown::Unknown);
        assert_eq!(Renown::Unknown.goblin_turnout(), (0, 1));
    }

    #[test]
    fn test_recruits_meet_reputation_floor() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let mut horde = CreatureGroup::from_members(vec![goblin(5, 4.0), goblin(5, 4.0)]);

        let added = add_recruits(&mut horde, Species::Orc, 6, 6, &lexicon, &mut rng).unwrap();
        assert_eq!(added, 6);
        assert_eq!(horde.len(), 8);
        assert!(horde.members[2..]
            .iter()
            .all(|c| c.species == Species::Orc && c.stats.reputation.value >= 3.6));
    }

    #[test]
    fn test_zero_recruits_is_fine() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        let mut horde = CreatureGroup::from_members(vec![goblin(5, 1.0)]);
        let added = add_recruits(&mut horde, Species::Goblin, 0, 0, &lexicon, &mut rng).unwrap();
        assert_eq!(added, 0);
        assert_eq!(horde.len(), 1);
    }

    #[test]
    fn test_legendary_commander_draws_crowds() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(33);
        let commander = Creature::commander("Grub", Title::Notorious, &lexicon, &mut rng).unwrap();
        let mut horde = CreatureGroup::from_members(vec![commander]);

        let report = recruit_goblins(&mut horde, &lexicon, &mut rng).unwrap();
        assert_eq!(report.renown, Some(Renown::Legendary));
        assert!((4..=5).contains(&report.recruited));
        assert_eq!(horde.count_of(Species::Goblin), report.recruited);
    }

    #[test]
    fn test_slow_horde_feeds_the_ogres() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(34);
        let mut horde = CreatureGroup::from_members(vec![goblin(2, 2.0); 6]);

        let report = recruit_ogres(&mut horde, &lexicon, &mut rng).unwrap();
        assert!((3..=5).contains(&report.lost.len()));
        assert!((2..=3).contains(&report.recruited));
        assert_eq!(horde.count_of(Species::Goblin), 6 - report.lost.len());
        assert_eq!(horde.count_of(Species::Ogre), report.recruited);
    }

    #[test]
    fn test_swift_horde_keeps_its_goblins() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(35);
        let mut horde = CreatureGroup::from_members(vec![goblin(7, 2.0); 4]);

        let report = recruit_ogres(&mut horde, &lexicon, &mut rng).unwrap();
        assert!(report.lost.is_empty());
        assert_eq!(horde.count_of(Species::Goblin), 4);
    }

    #[test]
    fn test_recruit_orcs_band() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(36);
        for _ in 0..10 {
            let mut horde = CreatureGroup::from_members(vec![goblin(5, 2.0)]);
            let report = recruit_orcs(&mut horde, &lexicon, &mut rng).unwrap();
            assert!((4..=6).contains(&report.recruited));
            assert_eq!(horde.count_of(Species::Orc), report.recruited);
        }
    }
}
