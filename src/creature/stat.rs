//! Creature stats - Beef, Cunning, Quickness and Reputation

use serde::{Deserialize, Serialize};

/// Reputation lives on a universal 0.0..=5.0 scale for every species
pub const REPUTATION_MIN: f64 = 0.0;
pub const REPUTATION_MAX: f64 = 5.0;

/// The four canonical stat kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Beef,
    Cunning,
    Quickness,
    Reputation,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Beef,
        StatKind::Cunning,
        StatKind::Quickness,
        StatKind::Reputation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Beef => "Beef",
            StatKind::Cunning => "Cunning",
            StatKind::Quickness => "Quickness",
            StatKind::Reputation => "Reputation",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            StatKind::Beef => "BF",
            StatKind::Cunning => "CUN",
            StatKind::Quickness => "QCK",
            StatKind::Reputation => "REP",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StatKind::Beef => "A creature's strength and hardiness.",
            StatKind::Cunning => "A creature's mental sharpness and aptitude for conniving.",
            StatKind::Quickness => "A creature's physical speed and circus capabilities.",
            StatKind::Reputation => "A creature's status among goblins and other creatures.",
        }
    }
}

/// A single stat value tagged with its kind
///
/// No bounds are enforced here; callers clamp where the rules require it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stat<T> {
    pub kind: StatKind,
    pub value: T,
}

impl<T> Stat<T> {
    pub fn new(kind: StatKind, value: T) -> Self {
        Self { kind, value }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn short_name(&self) -> &'static str {
        self.kind.short_name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// One instance of each stat kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub beef: Stat<i32>,
    pub cunning: Stat<i32>,
    pub quickness: Stat<i32>,
    pub reputation: Stat<f64>,
}

impl Stats {
    pub fn new(beef: i32, cunning: i32, quickness: i32, reputation: f64) -> Self {
        Self {
            beef: Stat::new(StatKind::Beef, beef),
            cunning: Stat::new(StatKind::Cunning, cunning),
            quickness: Stat::new(StatKind::Quickness, quickness),
            reputation: Stat::new(StatKind::Reputation, reputation),
        }
    }

    /// Read any stat as a float (Reputation is already one)
    pub fn value_of(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Beef => self.beef.value as f64,
            StatKind::Cunning => self.cunning.value as f64,
            StatKind::Quickness => self.quickness.value as f64,
            StatKind::Reputation => self.reputation.value,
        }
    }

    /// Shift reputation by `delta`, keeping it on the 0.0..=5.0 scale
    pub fn adjust_reputation(&mut self, delta: f64) {
        self.reputation.value =
            (self.reputation.value + delta).clamp(REPUTATION_MIN, REPUTATION_MAX);
    }

    /// Raise reputation to at least `floor`; never lowers it
    pub fn raise_reputation_to(&mut self, floor: f64) {
        self.reputation.value = self.reputation.value.max(floor);
    }
}
