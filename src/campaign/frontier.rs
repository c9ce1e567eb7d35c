//! The frontier - every settlement the horde knows about
//!
//! Settlements are never removed, only marked defeated. The refresh
//! policy tops up the list as weeks pass, leaning towards harder tiers
//! the longer the campaign runs.

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::types::{SettlementId, Week};
use crate::data::Lexicon;
use crate::settlement::SettlementTier::{
    BusyTown, BustlingCity, GleamingCastle, NomadEncampment, QuietVillage,
};
use crate::settlement::{Settlement, SettlementTier};

/// Tiers available at the start of a campaign, and their relative weights
pub const STARTING_TIERS: [(SettlementTier, u32); 3] =
    [(NomadEncampment, 55), (QuietVillage, 35), (BusyTown, 10)];

/// Refresh behaviour for one stretch of the campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshBand {
    /// Generated together when nothing is left to raid
    pub batch: &'static [SettlementTier],
    /// One of these may be discovered while targets are scarce
    pub discoveries: &'static [SettlementTier],
}

impl RefreshBand {
    pub fn for_week(week: Week) -> Self {
        match week {
            0..=4 => RefreshBand {
                batch: &[NomadEncampment, QuietVillage, QuietVillage],
                discoveries: &[NomadEncampment, QuietVillage],
            },
            5..=9 => RefreshBand {
                batch: &[QuietVillage, QuietVillage, BusyTown],
                discoveries: &[QuietVillage, BusyTown, BustlingCity],
            },
            10..=14 => RefreshBand {
                batch: &[BusyTown, BusyTown, BustlingCity],
                discoveries: &[QuietVillage, BusyTown, BustlingCity, GleamingCastle],
            },
            _ => RefreshBand {
                batch: &[BusyTown, BustlingCity, BustlingCity],
                discoveries: &[BustlingCity, GleamingCastle],
            },
        }
    }
}

/// Known settlements plus the id counter for new ones
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontier {
    settlements: Vec<Settlement>,
    next_id: u32,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the opening set of `min..=max` settlements
    pub fn starting(min: u32, max: u32, lexicon: &Lexicon, rng: &mut impl Rng) -> Result<Self> {
        let index = WeightedIndex::new(STARTING_TIERS.iter().map(|(_, w)| *w))
            .map_err(|e| GameError::InvalidConfig(format!("bad starting tier weights: {e}")))?;

        let mut frontier = Self::new();
        let count = rng.gen_range(min.min(max)..=max.max(min));
        for _ in 0..count {
            let tier = STARTING_TIERS[index.sample(rng)].0;
            frontier.spawn(tier, lexicon, rng)?;
        }
        Ok(frontier)
    }

    /// Generate a settlement of `tier` and add it to the frontier
    pub fn spawn(
        &mut self,
        tier: SettlementTier,
        lexicon: &Lexicon,
        rng: &mut impl Rng,
    ) -> Result<SettlementId> {
        let id = SettlementId::new(self.next_id);
        let settlement = Settlement::generate(id, tier, lexicon, rng)?;
        self.next_id += 1;
        self.settlements.push(settlement);
        Ok(id)
    }

    pub fn all(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn len(&self) -> usize {
        self.settlements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }

    pub fn get(&self, id: SettlementId) -> Result<&Settlement> {
        self.settlements
            .iter()
            .find(|s| s.id == id)
            .ok_or(GameError::UnknownSettlement(id))
    }

    pub fn get_mut(&mut self, id: SettlementId) -> Result<&mut Settlement> {
        self.settlements
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(GameError::UnknownSettlement(id))
    }

    pub fn active(&self) -> impl Iterator<Item = &Settlement> {
        self.settlements.iter().filter(|s| !s.defeated)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn defeated_count(&self) -> usize {
        self.settlements.iter().filter(|s| s.defeated).count()
    }

    /// Raidable settlements, strongest expected militia first
    pub fn raid_targets(&self) -> Vec<&Settlement> {
        let mut targets: Vec<&Settlement> = self.settlements.iter().filter(|s| s.is_raidable()).collect();
        targets.sort_by(|a, b| b.expected.beef.total_cmp(&a.expected.beef));
        targets
    }

    /// Raid targets that have not been scouted yet
    pub fn scout_targets(&self) -> Vec<&Settlement> {
        let mut targets = self.raid_targets();
        targets.retain(|s| !s.scouted);
        targets
    }

    /// Weekly top-up of the frontier
    ///
    /// With nothing left to raid, the band's whole batch arrives. Otherwise,
    /// while fewer settlements are active than weeks elapsed, one may be
    /// discovered with probability `discovery_chance`.
    pub fn refresh(
        &mut self,
        week: Week,
        discovery_chance: f64,
        lexicon: &Lexicon,
        rng: &mut impl Rng,
    ) -> Result<Vec<SettlementId>> {
        let band = RefreshBand::for_week(week);
        let active = self.active_count();
        let mut added = Vec::new();

        if active == 0 {
            for &tier in band.batch {
                added.push(self.spawn(tier, lexicon, rng)?);
            }
        } else if active < week as usize && rng.gen_bool(discovery_chance) {
            added.push(self.discover(week, lexicon, rng)?);
        }

        if !added.is_empty() {
            tracing::info!(week, count = added.len(), "New settlements discovered");
        }
        Ok(added)
    }

    /// Add one settlement drawn from the week's discovery pool
    pub fn discover(&mut self, week: Week, lexicon: &Lexicon, rng: &mut impl Rng) -> Result<SettlementId> {
        let band = RefreshBand::for_week(week);
        let tier = *band
            .discoveries
            .choose(rng)
            .ok_or_else(|| GameError::InvalidConfig(format!("no discoverable tiers in week {week}")))?;
        self.spawn(tier, lexicon, rng)
    }

    /// All known settlements defeated, and a castle among them
    pub fn is_conquered(&self) -> bool {
        self.settlements.iter().all(|s| s.defeated)
            && self.settlements.iter().any(|s| s.tier == SettlementTier::TOP)
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
    fn test_starting_frontier() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(41);
        for _ in 0..10 {
            let frontier = Frontier::starting(5, 10, &lexicon, &mut rng).unwrap();
            assert!((5..=10).contains(&frontier.len()));
            assert!(frontier
                .all()
                .iter()
                .all(|s| s.tier <= SettlementTier::BusyTown));
        }
    }

    #[test]
    fn test_ids_are_unique_and_sequential() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut frontier = Frontier::new();
        let a = frontier.spawn(QuietVillage, &lexicon, &mut rng).unwrap();
        let b = frontier.spawn(BusyTown, &lexicon, &mut rng).unwrap();
        assert_eq!(a, SettlementId(0));
        assert_eq!(b, SettlementId(1));
        assert_eq!(frontier.get(b).unwrap().tier, BusyTown);
        assert!(matches!(
            frontier.get(SettlementId(9)),
            Err(GameError::UnknownSettlement(SettlementId(9)))
        ));
    }

    #[test]
    fn test_refresh_batch_when_all_defeated() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        let mut frontier = Frontier::new();
        frontier.spawn(NomadEncampment, &lexicon, &mut rng).unwrap();
        frontier.settlements[0].defeated = true;

        let added = frontier.refresh(12, 0.0, &lexicon, &mut rng).unwrap();
        assert_eq!(added.len(), 3);
        let tiers: Vec<_> = added.iter().map(|id| frontier.get(*id).unwrap().tier).collect();
        assert_eq!(tiers, vec![BusyTown, BusyTown, BustlingCity]);
        assert_eq!(frontier.len(), 4);
    }

    #[test]
    fn test_refresh_discovery_gated_by_week() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(44);
        let mut frontier = Frontier::new();
        for _ in 0..3 {
            frontier.spawn(QuietVillage, &lexicon, &mut rng).unwrap();
        }

        // Three active settlements by week 3: no discovery even at certainty
        assert!(frontier.refresh(3, 1.0, &lexicon, &mut rng).unwrap().is_empty());

        let added = frontier.refresh(20, 1.0, &lexicon, &mut rng).unwrap();
        assert_eq!(added.len(), 1);
        let tier = frontier.get(added[0]).unwrap().tier;
        assert!(matches!(tier, BustlingCity | GleamingCastle));

        assert!(frontier.refresh(20, 0.0, &lexicon, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_refresh_bands() {
        assert_eq!(RefreshBand::for_week(1).batch, &[NomadEncampment, QuietVillage, QuietVillage]);
        assert_eq!(RefreshBand::for_week(5).discoveries, &[QuietVillage, BusyTown, BustlingCity]);
        assert!(RefreshBand::for_week(14).discoveries.contains(&GleamingCastle));
        assert_eq!(RefreshBand::for_week(15).discoveries, &[BustlingCity, GleamingCastle]);
    }

    #[test]
    fn test_targets_sorted_by_expected_beef() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(45);
        let mut frontier = Frontier::starting(8, 8, &lexicon, &mut rng).unwrap();
        frontier.settlements[0].defeated = true;
        frontier.settlements[1].scouted = true;

        let targets = frontier.raid_targets();
        assert_eq!(targets.len(), 7);
        assert!(targets
            .windows(2)
            .all(|w| w[0].expected.beef >= w[1].expected.beef));
        assert_eq!(frontier.scout_targets().len(), 6);
    }

    #[test]
    fn test_conquest_needs_a_castle() {
        let lexicon = lexicon();
        let mut rng = ChaCha8Rng::seed_from_u64(46);
        let mut frontier = Frontier::new();
        assert!(!frontier.is_conquered());

        frontier.spawn(BustlingCity, &lexicon, &mut rng).unwrap();
        frontier.settlements[0].defeated = true;
        assert!(!frontier.is_conquered());

        frontier.spawn(GleamingCastle, &lexicon, &mut rng).unwrap();
        assert!(!frontier.is_conquered());

        frontier.settlements[1].defeated = true;
        assert!(frontier.is_conquered());
    }
}
