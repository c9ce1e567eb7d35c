//! Individual creatures and their generation

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{GameError, Result};
use crate::creature::adjective::pick_adjective;
use crate::creature::species::{Species, StatRanges};
use crate::creature::stat::Stats;
use crate::data::Lexicon;
use crate::economy::Upkeep;

/// Commander stats before the title bonus
pub const COMMANDER_BASE_STATS: (i32, i32, i32, f64) = (3, 8, 5, 3.0);

/// Bonus applied to the titled stat
pub const TITLE_STAT_BONUS: i32 = 5;
pub const TITLE_REPUTATION_BONUS: f64 = 2.0;

/// What the commander is known for; grants a one-time bonus to one stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    /// +5 Beef
    Skullcracker,
    /// +5 Cunning
    Brainy,
    /// +5 Quickness
    Swift,
    /// +2.0 Reputation
    Notorious,
}

impl Title {
    pub const ALL: [Title; 4] = [Title::Skullcracker, Title::Brainy, Title::Swift, Title::Notorious];

    pub fn name(&self) -> &'static str {
        match self {
            Title::Skullcracker => "Skullcracker",
            Title::Brainy => "Brainy",
            Title::Swift => "Swift",
            Title::Notorious => "Notorious",
        }
    }

    /// Apply this title's bonus to a set of stats
    pub fn apply(&self, stats: &mut Stats) {
        match self {
            Title::Skullcracker => stats.beef.value += TITLE_STAT_BONUS,
            Title::Brainy => stats.cunning.value += TITLE_STAT_BONUS,
            Title::Swift => stats.quickness.value += TITLE_STAT_BONUS,
            Title::Notorious => stats.reputation.value += TITLE_REPUTATION_BONUS,
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Title {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Title::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::InvalidConfig(format!("unknown title '{s}'")))
    }
}

/// Draw Beef/Cunning/Quickness from the species ranges and Reputation from
/// the universal half-point scale {0.5, 1.0, ..., 5.0}
pub fn generate_stats(ranges: &StatRanges, rng: &mut impl Rng) -> Stats {
    Stats::new(
        rng.gen_range(ranges.beef.min..=ranges.beef.max),
        rng.gen_range(ranges.cunning.min..=ranges.cunning.max),
        rng.gen_range(ranges.quickness.min..=ranges.quickness.max),
        0.5 * rng.gen_range(1..=10) as f64,
    )
}

/// A single combatant in a horde or militia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub species: Species,
    pub adjective: String,
    pub stats: Stats,
    pub upkeep: Upkeep,
    /// The player's avatar; never culled or listed with the rank and file
    pub is_commander: bool,
}

/// Caller-supplied parts of a creature; anything left `None` is generated
#[derive(Debug, Clone, Default)]
pub struct CreatureOverrides {
    pub name: Option<String>,
    pub adjective: Option<String>,
    pub stats: Option<Stats>,
    pub upkeep: Option<Upkeep>,
    pub is_commander: bool,
}

impl Creature {
    /// Generate a random creature of `species`
    pub fn generate(species: Species, lexicon: &Lexicon, rng: &mut impl Rng) -> Result<Self> {
        Self::generate_with(species, CreatureOverrides::default(), lexicon, rng)
    }

    /// Generate a creature, keeping any fields the caller supplied
    ///
    /// Fails when the species' name pool is empty, even if a name was
    /// supplied: the lexicon must be populated before anything spawns.
    pub fn generate_with(
        species: Species,
        overrides: CreatureOverrides,
        lexicon: &Lexicon,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let names = lexicon.names(species)?;
        let profile = species.profile();

        let name = match overrides.name {
            Some(name) => name,
            None => names
                .choose(rng)
                .cloned()
                .ok_or(GameError::EmptyNamePool(species))?,
        };
        let stats = overrides
            .stats
            .unwrap_or_else(|| generate_stats(&profile.ranges, rng));
        let adjective = match overrides.adjective {
            Some(adjective) => adjective,
            None => pick_adjective(&stats, &profile.ranges, lexicon, rng)?,
        };

        Ok(Self {
            name,
            species,
            adjective,
            stats,
            upkeep: overrides.upkeep.unwrap_or(profile.upkeep),
            is_commander: overrides.is_commander,
        })
    }

    /// The player's goblin commander: fixed base stats plus the title bonus,
    /// free upkeep, and the title as adjective
    pub fn commander(
        name: impl Into<String>,
        title: Title,
        lexicon: &Lexicon,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let (beef, cunning, quickness, reputation) = COMMANDER_BASE_STATS;
        let mut stats = Stats::new(beef, cunning, quickness, reputation);
        title.apply(&mut stats);

        Self::generate_with(
            Species::Goblin,
            CreatureOverrides {
                name: Some(name.into()),
                adjective: Some(title.name().to_string()),
                stats: Some(stats),
                upkeep: Some(Upkeep::default()),
                is_commander: true,
            },
            lexicon,
            rng,
        )
    }

    /// "A {adjective} {species} named {name}."
    pub fn describe(&self) -> String {
        format!("A {} {} named {}.", self.adjective, self.species.label(), self.name)
    }

    /// Inline stat summary, e.g. "BF: 3, CUN: 8, QCK: 5, REP: 3.00"
    pub fn stats_line(&self) -> String {
        format!(
            "{}: {}, {}: {}, {}: {}, {}: {:.2}",
            self.stats.beef.short_name(),
            self.stats.beef.value,
            self.stats.cunning.short_name(),
            self.stats.cunning.value,
            self.stats.quickness.short_name(),
            self.stats.quickness.value,
            self.stats.reputation.short_name(),
            self.stats.reputation.value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn lexicon() -> Lexicon {
        Lexicon::embedded().expect("embedded lexicon should parse")
    }

    #[test]
    fn test_generated_stats_within_species_ranges() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for species in Species::ALL {
            let ranges = species.ranges();
            for _ in 0..50 {
                let creature = Creature::generate(species, &lexicon, &mut rng).unwrap();
                assert!(ranges.beef.contains(creature.stats.beef.value));
                assert!(ranges.cunning.contains(creature.stats.cunning.value));
                assert!(ranges.quickness.contains(creature.stats.quickness.value));
                let doubled = creature.stats.reputation.value * 2.0;
                assert_eq!(doubled.fract(), 0.0);
                assert!((1.0..=10.0).contains(&doubled));
                assert_eq!(creature.upkeep, species.upkeep());
                assert!(!creature.is_commander);
            }
        }
    }

    #[test]
    fn test_commander_title_bonus() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let brute = Creature::commander("Grub", Title::Skullcracker, &lexicon, &mut rng).unwrap();
        assert_eq!(brute.stats.beef.value, 8);
        assert_eq!(brute.stats.cunning.value, 8);

        let famous = Creature::commander("Grub", Title::Notorious, &lexicon, &mut rng).unwrap();
        assert_eq!(famous.stats.reputation.value, 5.0);
        assert_eq!(famous.stats.beef.value, 3);

        assert!(famous.is_commander);
        assert_eq!(famous.upkeep, Upkeep::default());
        assert_eq!(famous.adjective, "Notorious");
        assert_eq!(famous.species, Species::Goblin);
    }

    #[test]
    fn test_empty_name_pool_fails() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = Creature::generate(Species::Ogre, &Lexicon::default(), &mut rng).unwrap_err();
        assert!(matches!(err, GameError::EmptyNamePool(Species::Ogre)));
    }

    #[test]
    fn test_describe() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let commander = Creature::commander("Snaggle", Title::Swift, &lexicon, &mut rng).unwrap();
        assert_eq!(commander.describe(), "A Swift goblin named Snaggle.");
        assert_eq!(commander.stats_line(), "BF: 3, CUN: 8, QCK: 10, REP: 3.00");
    }

    #[test]
    fn test_title_from_str() {
        assert_eq!("brainy".parse::<Title>().unwrap(), Title::Brainy);
        assert!("Sneaky".parse::<Title>().is_err());
    }
}
