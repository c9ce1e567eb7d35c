//! Settlement tiers, from nomad camps up to castles

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::creature::StatRange;

/// Difficulty tier of a raid target, ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementTier {
    NomadEncampment,
    QuietVillage,
    BusyTown,
    BustlingCity,
    GleamingCastle,
}

/// Generation parameters shared by every settlement of a tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProfile {
    pub militia_size: StatRange,
    /// Food reward per militia member
    pub food_multiplier: StatRange,
    /// Gold reward per militia member
    pub gold_multiplier: StatRange,
    /// Reputation every horde member gains on victory (and loses on defeat)
    pub reputation_gain: f64,
}

impl SettlementTier {
    pub const ALL: [SettlementTier; 5] = [
        SettlementTier::NomadEncampment,
        SettlementTier::QuietVillage,
        SettlementTier::BusyTown,
        SettlementTier::BustlingCity,
        SettlementTier::GleamingCastle,
    ];

    /// The tier whose conquest is required for victory
    pub const TOP: SettlementTier = SettlementTier::GleamingCastle;

    pub fn profile(&self) -> TierProfile {
        match self {
            SettlementTier::NomadEncampment => TierProfile {
                militia_size: StatRange::new(2, 4),
                food_multiplier: StatRange::new(5, 15),
                gold_multiplier: StatRange::new(1, 5),
                reputation_gain: 0.05,
            },
            SettlementTier::QuietVillage => TierProfile {
                militia_size: StatRange::new(3, 8),
                food_multiplier: StatRange::new(10, 20),
                gold_multiplier: StatRange::new(2, 6),
                reputation_gain: 0.1,
            },
            SettlementTier::BusyTown => TierProfile {
                militia_size: StatRange::new(4, 10),
                food_multiplier: StatRange::new(12, 24),
                gold_multiplier: StatRange::new(3, 7),
                reputation_gain: 0.15,
            },
            SettlementTier::BustlingCity => TierProfile {
                militia_size: StatRange::new(6, 15),
                food_multiplier: StatRange::new(15, 35),
                gold_multiplier: StatRange::new(4, 9),
                reputation_gain: 0.25,
            },
            SettlementTier::GleamingCastle => TierProfile {
                militia_size: StatRange::new(10, 30),
                food_multiplier: StatRange::new(20, 40),
                gold_multiplier: StatRange::new(6, 10),
                reputation_gain: 0.5,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettlementTier::NomadEncampment => "nomad encampment",
            SettlementTier::QuietVillage => "quiet village",
            SettlementTier::BusyTown => "busy town",
            SettlementTier::BustlingCity => "bustling city",
            SettlementTier::GleamingCastle => "gleaming castle",
        }
    }
}

impl fmt::Display for SettlementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
