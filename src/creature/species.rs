//! Species table - stat ranges and upkeep per kind of creature
//!
//! Every species shares one `Creature` record; what differs is the data
//! here. Adding a species means adding a variant and its profile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::economy::Upkeep;

/// Kinds of creature that can join a horde or defend a settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Base horde unit, cheap to keep
    Goblin,
    /// Settlement militia
    Human,
    /// Heavy recruit: lots of Beef, little Cunning
    Ogre,
    /// Balanced recruit
    Orc,
}

/// Inclusive range a freshly generated stat is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: i32,
    pub max: i32,
}

impl StatRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Midpoint of the range, used for "expected" previews
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }
}

/// Stat ranges used for generation and adjective classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRanges {
    pub beef: StatRange,
    pub cunning: StatRange,
    pub quickness: StatRange,
}

/// Everything that distinguishes one species from another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesProfile {
    pub ranges: StatRanges,
    pub upkeep: Upkeep,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Goblin, Species::Human, Species::Ogre, Species::Orc];

    /// Species that serve in the horde and can be lost in battle
    pub const HORDE_SPECIES: [Species; 3] = [Species::Goblin, Species::Ogre, Species::Orc];

    pub fn profile(&self) -> SpeciesProfile {
        match self {
            Species::Goblin => SpeciesProfile {
                ranges: StatRanges {
                    beef: StatRange::new(1, 4),
                    cunning: StatRange::new(2, 10),
                    quickness: StatRange::new(2, 7),
                },
                upkeep: Upkeep::new(5, 1),
            },
            Species::Human => SpeciesProfile {
                ranges: StatRanges {
                    beef: StatRange::new(1, 6),
                    cunning: StatRange::new(3, 10),
                    quickness: StatRange::new(1, 6),
                },
                upkeep: Upkeep::new(10, 4),
            },
            Species::Ogre => SpeciesProfile {
                ranges: StatRanges {
                    beef: StatRange::new(6, 10),
                    cunning: StatRange::new(1, 3),
                    quickness: StatRange::new(2, 4),
                },
                upkeep: Upkeep::new(12, 4),
            },
            Species::Orc => SpeciesProfile {
                ranges: StatRanges {
                    beef: StatRange::new(4, 7),
                    cunning: StatRange::new(1, 6),
                    quickness: StatRange::new(2, 6),
                },
                upkeep: Upkeep::new(8, 2),
            },
        }
    }

    pub fn ranges(&self) -> StatRanges {
        self.profile().ranges
    }

    pub fn upkeep(&self) -> Upkeep {
        self.profile().upkeep
    }

    /// Lowercase singular noun used in narrative text
    pub fn label(&self) -> &'static str {
        match self {
            Species::Goblin => "goblin",
            Species::Human => "human",
            Species::Ogre => "ogre",
            Species::Orc => "orc",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Goblin => "Goblin",
            Species::Human => "Human",
            Species::Ogre => "Ogre",
            Species::Orc => "Orc",
        };
        f.write_str(name)
    }
}
