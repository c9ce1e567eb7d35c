//! Creature groups - a horde or a settlement militia
//!
//! Aggregates run over every member, the commander included. Averages
//! assume a non-empty group: a horde always carries its commander and a
//! militia that reaches zero members is treated as defeated before anyone
//! asks for its averages.

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::creature::individual::Creature;
use crate::creature::species::Species;
use crate::data::Lexicon;
use crate::economy::Upkeep;

/// Summed stat totals of a group
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupTotals {
    pub beef: i32,
    pub cunning: i32,
    pub quickness: i32,
    pub reputation: f64,
}

/// An ordered, mutable collection of creatures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatureGroup {
    pub members: Vec<Creature>,
}

impl CreatureGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: Vec<Creature>) -> Self {
        Self { members }
    }

    /// Generate a group of `min_size..=max_size` creatures
    ///
    /// The size range is coerced rather than rejected: swapped when
    /// inverted, min floored at 1, max floored at min. Species are drawn
    /// by `weights` (uniform when `None`). A commander, if given, is
    /// appended on top of the drawn count.
    pub fn generate(
        species: &[Species],
        weights: Option<&[u32]>,
        min_size: u32,
        max_size: u32,
        commander: Option<Creature>,
        lexicon: &Lexicon,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let (mut min_size, mut max_size) = if min_size > max_size {
            (max_size, min_size)
        } else {
            (min_size, max_size)
        };
        min_size = min_size.max(1);
        max_size = max_size.max(min_size);

        let uniform = vec![1; species.len()];
        let weights = weights.unwrap_or(&uniform);
        let index = WeightedIndex::new(weights).map_err(|e| {
            GameError::InvalidConfig(format!("bad species weights {weights:?}: {e}"))
        })?;

        let count = rng.gen_range(min_size..=max_size);
        let mut members = Vec::with_capacity(count as usize + 1);
        for _ in 0..count {
            let kind = species[index.sample(rng)];
            members.push(Creature::generate(kind, lexicon, rng)?);
        }
        members.extend(commander);

        tracing::debug!(count, ?species, "Generated creature group");
        Ok(Self { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn commander(&self) -> Option<&Creature> {
        self.members.iter().find(|m| m.is_commander)
    }

    /// Members other than the commander, in order
    pub fn rank_and_file(&self) -> impl Iterator<Item = &Creature> {
        self.members.iter().filter(|m| !m.is_commander)
    }

    /// Number of non-commander members of `species`
    pub fn count_of(&self, species: Species) -> usize {
        self.rank_and_file().filter(|m| m.species == species).count()
    }

    /// Summed weekly upkeep of every member
    pub fn upkeep(&self) -> Upkeep {
        self.members.iter().map(|m| m.upkeep).sum()
    }

    pub fn totals(&self) -> GroupTotals {
        self.members.iter().fold(GroupTotals::default(), |mut acc, m| {
            acc.beef += m.stats.beef.value;
            acc.cunning += m.stats.cunning.value;
            acc.quickness += m.stats.quickness.value;
            acc.reputation += m.stats.reputation.value;
            acc
        })
    }

    pub fn total_beef(&self) -> i32 {
        self.members.iter().map(|m| m.stats.beef.value).sum()
    }

    pub fn total_cunning(&self) -> i32 {
        self.members.iter().map(|m| m.stats.cunning.value).sum()
    }

    pub fn total_quickness(&self) -> i32 {
        self.members.iter().map(|m| m.stats.quickness.value).sum()
    }

    pub fn total_reputation(&self) -> f64 {
        self.members.iter().map(|m| m.stats.reputation.value).sum()
    }

    pub fn avg_beef(&self) -> f64 {
        self.average(self.total_beef() as f64)
    }

    pub fn avg_cunning(&self) -> f64 {
        self.average(self.total_cunning() as f64)
    }

    pub fn avg_quickness(&self) -> f64 {
        self.average(self.total_quickness() as f64)
    }

    pub fn avg_reputation(&self) -> f64 {
        self.average(self.total_reputation())
    }

    fn average(&self, total: f64) -> f64 {
        debug_assert!(!self.members.is_empty(), "average over an empty group");
        total / self.members.len() as f64
    }

    /// Append creatures to the group
    pub fn bolster(&mut self, new_creatures: impl IntoIterator<Item = Creature>) {
        self.members.extend(new_creatures);
    }

    /// Remove every member, returning them
    pub fn disband(&mut self) -> Vec<Creature> {
        std::mem::take(&mut self.members)
    }

    /// Shift every member's reputation by `delta`, clamped to 0.0..=5.0
    pub fn adjust_reputation(&mut self, delta: f64) {
        for member in &mut self.members {
            member.stats.adjust_reputation(delta);
        }
    }

    /// Remove a random `min..=max` non-commander members whose species is
    /// in `filter`. The count is clamped to the candidate pool; the removed
    /// creatures are returned (empty when nothing qualified).
    pub fn cull(
        &mut self,
        filter: &[Species],
        min: u32,
        max: u32,
        rng: &mut impl Rng,
    ) -> Vec<Creature> {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let rolled = rng.gen_range(min..=max) as usize;
        self.remove_random(filter, rolled, rng)
    }

    /// Remove exactly `count` random candidates (or all, if fewer qualify)
    pub fn remove_random(
        &mut self,
        filter: &[Species],
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<Creature> {
        let candidates: Vec<usize> = self
            .members
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_commander && filter.contains(&m.species))
            .map(|(i, _)| i)
            .collect();

        let count = count.min(candidates.len());
        if count == 0 {
            return Vec::new();
        }

        let mut chosen: Vec<usize> = candidates.choose_multiple(rng, count).copied().collect();
        // Remove from the back so earlier indices stay valid
        chosen.sort_unstable_by(|a, b| b.cmp(a));
        let mut removed: Vec<Creature> = chosen.into_iter().map(|i| self.members.remove(i)).collect();
        removed.reverse();
        removed
    }
}
