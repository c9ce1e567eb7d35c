//! Creatures: stats, species, adjectives and groups

pub mod adjective;
pub mod group;
pub mod individual;
pub mod species;
pub mod stat;

pub use adjective::{pick_adjective, stat_rating, AdjectiveBucket, StatProfile};
pub use group::{CreatureGroup, GroupTotals};
pub use individual::{generate_stats, Creature, CreatureOverrides, Title};
pub use species::{Species, SpeciesProfile, StatRange, StatRanges};
pub use stat::{Stat, StatKind, Stats, REPUTATION_MAX, REPUTATION_MIN};
