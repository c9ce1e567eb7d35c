//! Campaign session - owns the horde, the frontier, the stash and the clock
//!
//! Every player action goes through here. Actions that take time are
//! paid for in weeks of upkeep; the frontier is refreshed once the time
//! has passed.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::frontier::Frontier;
use super::raid::{resolve_raid, RaidReport, SurrenderDecision};
use super::recruit::{recruit_goblins, recruit_ogres, recruit_orcs, RecruitReport};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::{SettlementId, Week};
use crate::creature::{Creature, CreatureGroup, Species, Title};
use crate::data::Lexicon;
use crate::economy::Stash;

/// Kinds of recruitment drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recruitment {
    Goblins,
    Ogres,
    Orcs,
}

impl Recruitment {
    pub fn species(&self) -> Species {
        match self {
            Recruitment::Goblins => Species::Goblin,
            Recruitment::Ogres => Species::Ogre,
            Recruitment::Orcs => Species::Orc,
        }
    }

    pub fn weeks(&self, config: &GameConfig) -> u32 {
        match self {
            Recruitment::Goblins => config.recruit_goblins_weeks,
            Recruitment::Ogres => config.recruit_ogres_weeks,
            Recruitment::Orcs => config.recruit_orcs_weeks,
        }
    }
}

/// What scouting revealed about a settlement
#[derive(Debug, Clone, PartialEq)]
pub struct ScoutReport {
    pub settlement: SettlementId,
    pub settlement_name: String,
    pub beef: i32,
    pub reward: Stash,
}

/// Result of one time-consuming action
#[derive(Debug, Clone, PartialEq)]
pub struct Turn<T> {
    pub outcome: T,
    pub weeks: u32,
    pub upkeep_paid: Stash,
    /// Week number after the action
    pub week: Week,
    /// Settlements added by the refresh that followed
    pub discovered: Vec<SettlementId>,
    /// Set when this action completed the conquest; no refresh runs then
    pub victory: Option<CampaignSummary>,
}

/// End-of-campaign record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub commander_name: String,
    pub commander_title: String,
    pub settlements_conquered: usize,
    pub weeks_elapsed: Week,
    pub horde_size: usize,
    pub stash: Stash,
}

impl CampaignSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for CampaignSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The horde of {} the {} has swarmed over the land, conquering {} settlements in {} weeks.",
            self.commander_name, self.commander_title, self.settlements_conquered, self.weeks_elapsed
        )?;
        write!(
            f,
            "Your horde had {} food and {} gold remaining.",
            self.stash.food, self.stash.gold
        )
    }
}

/// Suggest a commander name from the goblin name pool
pub fn random_commander_name(lexicon: &Lexicon, rng: &mut impl Rng) -> Result<String> {
    lexicon
        .names(Species::Goblin)?
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyNamePool(Species::Goblin))
}

/// A single-player campaign in progress
pub struct Campaign {
    pub config: GameConfig,
    pub lexicon: Lexicon,
    pub horde: CreatureGroup,
    pub frontier: Frontier,
    pub stash: Stash,
    /// Starts at 1
    pub week: Week,
    /// Random number generator (deterministic)
    pub rng: ChaCha8Rng,
}

impl Campaign {
    /// Start a new campaign led by `commander_name` the `title`
    ///
    /// Configuration and lexicon problems surface here, before play starts.
    pub fn new(
        config: GameConfig,
        lexicon: Lexicon,
        commander_name: impl Into<String>,
        title: Title,
        mut rng: ChaCha8Rng,
    ) -> Result<Self> {
        config.validate()?;
        lexicon.validate()?;

        let commander = Creature::commander(commander_name, title, &lexicon, &mut rng)?;
        let horde = CreatureGroup::generate(
            &[Species::Goblin],
            None,
            config.starting_horde_min,
            config.starting_horde_max,
            Some(commander),
            &lexicon,
            &mut rng,
        )?;
        let frontier = Frontier::starting(
            config.starting_settlements_min,
            config.starting_settlements_max,
            &lexicon,
            &mut rng,
        )?;
        let stash = Stash::new(config.starting_food, config.starting_gold);

        tracing::info!(
            horde = horde.len(),
            settlements = frontier.len(),
            "New campaign started"
        );

        Ok(Self {
            config,
            lexicon,
            horde,
            frontier,
            stash,
            week: 1,
            rng,
        })
    }

    pub fn commander(&self) -> Option<&Creature> {
        self.horde.commander()
    }

    /// Advance `weeks` weeks, paying the horde's upkeep for each
    ///
    /// A dry run only checks the stash. Either way nothing changes when the
    /// stash falls short. Returns the total upkeep.
    pub fn pass_weeks(&mut self, weeks: u32, dry_run: bool) -> Result<Stash> {
        let cost = self.horde.upkeep().times(weeks);
        self.charge(weeks, cost, dry_run)
    }

    fn charge(&mut self, weeks: u32, cost: Stash, dry_run: bool) -> Result<Stash> {
        let paid = if dry_run {
            self.stash.covers(&cost)
        } else {
            self.stash.try_spend(&cost)
        };
        if !paid {
            tracing::warn!(weeks, ?cost, stash = ?self.stash, "Stash cannot cover upkeep");
            return Err(GameError::InsufficientResources {
                weeks,
                required: cost,
                available: self.stash,
            });
        }
        if dry_run {
            return Ok(cost);
        }

        self.week += weeks;
        tracing::info!(weeks, week = self.week, food = cost.food, gold = cost.gold, "Weeks passed");
        Ok(cost)
    }

    /// Weeks of upkeep the stash can still pay; `None` for a free horde
    pub fn weeks_of_supply(&self) -> Option<u32> {
        self.stash.weeks_covered(&self.horde.upkeep())
    }

    /// Raid a settlement
    ///
    /// The week's upkeep is checked before the raid and paid after it, so
    /// creatures gained or lost in the raid do not change the bill.
    pub fn raid(
        &mut self,
        target: SettlementId,
        decision: &mut impl SurrenderDecision,
    ) -> Result<Turn<RaidReport>> {
        let weeks = self.config.raid_weeks;
        let cost = self.pass_weeks(weeks, true)?;

        let settlement = self.frontier.get_mut(target)?;
        let report = resolve_raid(
            &mut self.horde,
            settlement,
            &mut self.stash,
            &self.lexicon,
            &mut self.rng,
            decision,
        )?;

        self.charge(weeks, cost, false)?;
        self.finish_turn(report, weeks, cost)
    }

    /// Send scouts to an active, unscouted settlement
    pub fn scout(&mut self, target: SettlementId) -> Result<Turn<ScoutReport>> {
        let settlement = self.frontier.get(target)?;
        if !settlement.is_raidable() {
            return Err(GameError::InvalidRaidTarget {
                settlement: settlement.name.clone(),
                reason: "there is nothing left to scout".into(),
            });
        }
        if settlement.scouted {
            return Err(GameError::InvalidRaidTarget {
                settlement: settlement.name.clone(),
                reason: "it has already been scouted".into(),
            });
        }

        let weeks = self.config.scout_weeks;
        let cost = self.pass_weeks(weeks, false)?;

        let settlement = self.frontier.get_mut(target)?;
        settlement.scouted = true;
        let report = ScoutReport {
            settlement: target,
            settlement_name: settlement.name.clone(),
            beef: settlement.militia.total_beef(),
            reward: settlement.reward,
        };
        tracing::info!(settlement = %report.settlement_name, beef = report.beef, "Settlement scouted");

        self.finish_turn(report, weeks, cost)
    }

    /// Search the land for a new settlement; always finds one
    pub fn explore(&mut self) -> Result<Turn<SettlementId>> {
        let weeks = self.config.explore_weeks;
        let cost = self.pass_weeks(weeks, false)?;
        let found = self.frontier.discover(self.week, &self.lexicon, &mut self.rng)?;
        tracing::info!(settlement = ?found, week = self.week, "Explorers found a settlement");
        self.finish_turn(found, weeks, cost)
    }

    /// Run a recruitment drive
    pub fn recruit(&mut self, kind: Recruitment) -> Result<Turn<RecruitReport>> {
        let weeks = kind.weeks(&self.config);
        let cost = self.pass_weeks(weeks, false)?;

        let report = match kind {
            Recruitment::Goblins => recruit_goblins(&mut self.horde, &self.lexicon, &mut self.rng)?,
            Recruitment::Ogres => recruit_ogres(&mut self.horde, &self.lexicon, &mut self.rng)?,
            Recruitment::Orcs => recruit_orcs(&mut self.horde, &self.lexicon, &mut self.rng)?,
        };
        tracing::info!(
            species = ?report.species,
            recruited = report.recruited,
            lost = report.lost.len(),
            "Recruitment finished"
        );

        self.finish_turn(report, weeks, cost)
    }

    /// Send away up to `count` random non-commander members of `species`
    ///
    /// Takes no time.
    pub fn dismiss(&mut self, species: Species, count: usize) -> Vec<Creature> {
        let dismissed = self.horde.remove_random(&[species], count, &mut self.rng);
        tracing::info!(?species, count = dismissed.len(), "Horde members dismissed");
        dismissed
    }

    /// All known settlements defeated, with a castle among them
    pub fn is_won(&self) -> bool {
        self.frontier.is_conquered()
    }

    pub fn summary(&self) -> CampaignSummary {
        let (name, title) = match self.commander() {
            Some(c) => (c.name.clone(), c.adjective.clone()),
            None => (String::from("the nameless"), String::from("Forgotten")),
        };
        CampaignSummary {
            commander_name: name,
            commander_title: title,
            settlements_conquered: self.frontier.defeated_count(),
            weeks_elapsed: self.week,
            horde_size: self.horde.len(),
            stash: self.stash,
        }
    }

    /// Check for victory, then refresh the frontier; a won campaign is
    /// left as it is
    fn finish_turn<T>(&mut self, outcome: T, weeks: u32, upkeep_paid: Stash) -> Result<Turn<T>> {
        let (discovered, victory) = if self.is_won() {
            tracing::info!(week = self.week, "Campaign won");
            (Vec::new(), Some(self.summary()))
        } else {
            let discovered = self.frontier.refresh(
                self.week,
                self.config.settlement_discovery_chance,
                &self.lexicon,
                &mut self.rng,
            )?;
            (discovered, None)
        };

        Ok(Turn {
            outcome,
            weeks,
            upkeep_paid,
            week: self.week,
            discovered,
            victory,
        })
    }
}
