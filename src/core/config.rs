//! Campaign configuration with documented constants
//!
//! Starting conditions, world generation knobs and the week cost of every
//! player action live here so a campaign can be tuned from a TOML file
//! without touching the rules themselves.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{GameError, Result};

/// Configuration for a campaign
///
/// These values reproduce the pacing of the standard game. Changing them
/// shifts how quickly upkeep drains the stash relative to raid income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === STASH ===
    /// Food in the stash when a new campaign starts
    ///
    /// With a default horde of ~6 goblins (30 food per week) this lasts
    /// around 16 weeks before any raid income.
    pub starting_food: u32,

    /// Gold in the stash when a new campaign starts
    ///
    /// Goblins cost 1 gold per week each, so gold is rarely the first
    /// resource to run out unless ogres or orcs join.
    pub starting_gold: u32,

    // === HORDE ===
    /// Minimum number of goblins following the commander at the start
    pub starting_horde_min: u32,

    /// Maximum number of goblins following the commander at the start
    pub starting_horde_max: u32,

    // === WORLD ===
    /// Minimum number of settlements known at the start
    pub starting_settlements_min: u32,

    /// Maximum number of settlements known at the start
    pub starting_settlements_max: u32,

    /// Chance per refresh that a new settlement appears
    ///
    /// Only rolled while fewer settlements are active than weeks elapsed,
    /// so the world grows slowly early and catches up later.
    pub settlement_discovery_chance: f64,

    // === ACTION COSTS (weeks) ===
    pub raid_weeks: u32,
    pub scout_weeks: u32,
    pub explore_weeks: u32,
    pub recruit_goblins_weeks: u32,
    pub recruit_ogres_weeks: u32,
    pub recruit_orcs_weeks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Stash
            starting_food: 500,
            starting_gold: 100,

            // Horde (commander is added on top)
            starting_horde_min: 1,
            starting_horde_max: 10,

            // World
            starting_settlements_min: 5,
            starting_settlements_max: 10,
            settlement_discovery_chance: 0.2,

            // Action costs
            raid_weeks: 1,
            scout_weeks: 1,
            explore_weeks: 1,
            recruit_goblins_weeks: 2,
            recruit_ogres_weeks: 2,
            recruit_orcs_weeks: 4,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; omitted fields keep their defaults
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.starting_horde_min > self.starting_horde_max {
            return Err(GameError::InvalidConfig(format!(
                "starting_horde_min ({}) should be <= starting_horde_max ({})",
                self.starting_horde_min, self.starting_horde_max
            )));
        }

        if self.starting_settlements_min == 0
            || self.starting_settlements_min > self.starting_settlements_max
        {
            return Err(GameError::InvalidConfig(format!(
                "starting settlements range {}..={} must be non-empty and start above zero",
                self.starting_settlements_min, self.starting_settlements_max
            )));
        }

        if !(0.0..=1.0).contains(&self.settlement_discovery_chance) {
            return Err(GameError::InvalidConfig(format!(
                "settlement_discovery_chance ({}) must be within 0.0..=1.0",
                self.settlement_discovery_chance
            )));
        }

        let costs = [
            self.raid_weeks,
            self.scout_weeks,
            self.explore_weeks,
            self.recruit_goblins_weeks,
            self.recruit_ogres_weeks,
            self.recruit_orcs_weeks,
        ];
        if costs.contains(&0) {
            return Err(GameError::InvalidConfig(
                "every action must cost at least one week".into(),
            ));
        }

        Ok(())
    }
}
