//! Stash - the horde's banked food and gold

use serde::{Deserialize, Serialize};

/// A pair of resource counters: the player's banked resources, a raid
/// reward, or a creature's weekly upkeep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stash {
    pub food: u32,
    pub gold: u32,
}

/// Weekly food/gold cost of a creature or group
pub type Upkeep = Stash;

impl Stash {
    pub fn new(food: u32, gold: u32) -> Self {
        Self { food, gold }
    }

    /// Add another stash into this one
    pub fn add(&mut self, other: Stash) {
        self.food = self.food.saturating_add(other.food);
        self.gold = self.gold.saturating_add(other.gold);
    }

    /// This amount repeated `n` times (e.g. `n` weeks of upkeep)
    pub fn times(&self, n: u32) -> Stash {
        Stash {
            food: self.food.saturating_mul(n),
            gold: self.gold.saturating_mul(n),
        }
    }

    /// Check if this stash holds at least `cost` of both resources
    pub fn covers(&self, cost: &Stash) -> bool {
        self.food >= cost.food && self.gold >= cost.gold
    }

    /// Remove `cost`, returns true if successful. Nothing is removed when
    /// either resource falls short.
    pub fn try_spend(&mut self, cost: &Stash) -> bool {
        if !self.covers(cost) {
            return false;
        }
        self.food -= cost.food;
        self.gold -= cost.gold;
        true
    }

    /// Whole weeks this stash can pay `upkeep` for; `None` when the upkeep is free
    pub fn weeks_covered(&self, upkeep: &Upkeep) -> Option<u32> {
        let by_food = (upkeep.food > 0).then(|| self.food / upkeep.food);
        let by_gold = (upkeep.gold > 0).then(|| self.gold / upkeep.gold);
        match (by_food, by_gold) {
            (Some(f), Some(g)) => Some(f.min(g)),
            (Some(f), None) => Some(f),
            (None, Some(g)) => Some(g),
            (None, None) => None,
        }
    }
}

impl std::ops::Add for Stash {
    type Output = Stash;

    fn add(mut self, rhs: Stash) -> Stash {
        Stash::add(&mut self, rhs);
        self
    }
}

impl std::ops::AddAssign for Stash {
    fn add_assign(&mut self, rhs: Stash) {
        Stash::add(self, rhs);
    }
}

impl std::iter::Sum for Stash {
    fn sum<I: Iterator<Item = Stash>>(iter: I) -> Self {
        iter.fold(Stash::default(), |acc, s| acc + s)
    }
}
