//! Settlements - raid targets guarded by a human militia

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::types::SettlementId;
use crate::creature::{CreatureGroup, Species, StatRange};
use crate::data::Lexicon;
use crate::economy::Stash;
use crate::settlement::tier::SettlementTier;

/// Estimated strength and spoils before a settlement is scouted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedValues {
    pub beef: f64,
    pub food: f64,
    pub gold: f64,
}

/// What the player knows about a settlement's defenses
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettlementIntel {
    /// Exact figures, revealed by scouting or a raid
    Scouted { beef: i32, reward: Stash },
    /// Midpoint estimates from the tier's ranges
    Estimated(ExpectedValues),
}

/// A human settlement the horde can raid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: SettlementId,
    pub name: String,
    pub description: String,
    pub tier: SettlementTier,
    /// Terminal once set
    pub defeated: bool,
    pub scouted: bool,
    pub militia: CreatureGroup,
    pub reward: Stash,
    pub reputation_gain: f64,
    pub militia_size: StatRange,
    pub food_multiplier: StatRange,
    pub gold_multiplier: StatRange,
    pub expected: ExpectedValues,
}

impl Settlement {
    /// Generate a settlement of `tier`: militia, reward and previews
    pub fn generate(
        id: SettlementId,
        tier: SettlementTier,
        lexicon: &Lexicon,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let pool = lexicon.settlement_pool(tier)?;
        let name = pool
            .names
            .choose(rng)
            .cloned()
            .ok_or(GameError::EmptySettlementPool(tier))?;
        let description = pool
            .descriptions
            .choose(rng)
            .cloned()
            .ok_or(GameError::EmptySettlementPool(tier))?;

        let profile = tier.profile();
        let militia = CreatureGroup::generate(
            &[Species::Human],
            None,
            profile.militia_size.min.max(0) as u32,
            profile.militia_size.max.max(0) as u32,
            None,
            lexicon,
            rng,
        )?;

        let size = militia.len() as u32;
        let food_per_head = rng.gen_range(profile.food_multiplier.min..=profile.food_multiplier.max);
        let gold_per_head = rng.gen_range(profile.gold_multiplier.min..=profile.gold_multiplier.max);
        let reward = Stash::new(food_per_head.max(0) as u32 * size, gold_per_head.max(0) as u32 * size);

        let expected = ExpectedValues {
            beef: Species::Human.ranges().beef.midpoint() * size as f64,
            food: profile.food_multiplier.midpoint() * size as f64,
            gold: profile.gold_multiplier.midpoint() * size as f64,
        };

        tracing::debug!(?id, %tier, %name, militia = size, "Generated settlement");

        Ok(Self {
            id,
            name,
            description,
            tier,
            defeated: false,
            scouted: false,
            militia,
            reward,
            reputation_gain: profile.reputation_gain,
            militia_size: profile.militia_size,
            food_multiplier: profile.food_multiplier,
            gold_multiplier: profile.gold_multiplier,
            expected,
        })
    }

    /// Active and still defended
    pub fn is_raidable(&self) -> bool {
        !self.defeated && !self.militia.is_empty()
    }

    /// Exact figures once scouted, estimates otherwise
    pub fn intel(&self) -> SettlementIntel {
        if self.scouted {
            SettlementIntel::Scouted {
                beef: self.militia.total_beef(),
                reward: self.reward,
            }
        } else {
            SettlementIntel::Estimated(self.expected)
        }
    }

    /// "{name}, a {tier}."
    pub fn describe(&self) -> String {
        format!("{}, a {}.", self.name, self.tier)
    }
}
