//! Lexicon - name pools and word lists used by the generators
//!
//! Loaded once at startup from TOML. The default lexicon ships embedded in
//! the binary; a custom one can be supplied with `--lexicon`.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{GameError, Result};
use crate::creature::{AdjectiveBucket, Species};
use crate::settlement::SettlementTier;

const EMBEDDED_LEXICON: &str = include_str!("../../data/lexicon.toml");

/// Names and flavor descriptions for one settlement tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementPool {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

/// All generator word lists, keyed by species, adjective bucket and tier
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    names: AHashMap<Species, Vec<String>>,
    adjectives: AHashMap<AdjectiveBucket, Vec<String>>,
    settlements: AHashMap<SettlementTier, SettlementPool>,
}

impl Lexicon {
    /// The lexicon bundled with the game
    pub fn embedded() -> Result<Self> {
        Self::parse_toml(EMBEDDED_LEXICON)
    }

    /// Load a lexicon from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a lexicon from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let raw: TomlLexicon = toml::from_str(content)?;
        Ok(raw.into_lexicon())
    }

    /// Name pool for a species; empty pools are a configuration error
    pub fn names(&self, species: Species) -> Result<&[String]> {
        match self.names.get(&species) {
            Some(names) if !names.is_empty() => Ok(names),
            _ => Err(GameError::EmptyNamePool(species)),
        }
    }

    /// Word list for an adjective bucket
    pub fn adjectives(&self, bucket: AdjectiveBucket) -> Result<&[String]> {
        match self.adjectives.get(&bucket) {
            Some(words) if !words.is_empty() => Ok(words),
            _ => Err(GameError::EmptyAdjectiveBucket(bucket)),
        }
    }

    /// Name and description pools for a settlement tier
    pub fn settlement_pool(&self, tier: SettlementTier) -> Result<&SettlementPool> {
        match self.settlements.get(&tier) {
            Some(pool) if !pool.names.is_empty() && !pool.descriptions.is_empty() => Ok(pool),
            _ => Err(GameError::EmptySettlementPool(tier)),
        }
    }

    pub fn set_names(&mut self, species: Species, names: Vec<String>) {
        self.names.insert(species, names);
    }

    pub fn set_adjectives(&mut self, bucket: AdjectiveBucket, words: Vec<String>) {
        self.adjectives.insert(bucket, words);
    }

    pub fn set_settlement_pool(&mut self, tier: SettlementTier, pool: SettlementPool) {
        self.settlements.insert(tier, pool);
    }

    /// Check every list the generators may reach for is populated
    pub fn validate(&self) -> Result<()> {
        for species in Species::ALL {
            self.names(species)?;
        }
        for bucket in AdjectiveBucket::ALL {
            self.adjectives(bucket)?;
        }
        for tier in SettlementTier::ALL {
            self.settlement_pool(tier)?;
        }
        Ok(())
    }
}

/// TOML representation of the lexicon file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlLexicon {
    names: TomlNames,
    adjectives: TomlAdjectives,
    settlements: TomlSettlements,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlNames {
    goblin: Vec<String>,
    human: Vec<String>,
    ogre: Vec<String>,
    orc: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlAdjectives {
    generic: Vec<String>,
    strong: Vec<String>,
    weak: Vec<String>,
    himbo: Vec<String>,
    smart: Vec<String>,
    dumb: Vec<String>,
    fast: Vec<String>,
    slow: Vec<String>,
    popular: Vec<String>,
    unpopular: Vec<String>,
    rounded: Vec<String>,
    useless: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlSettlements {
    nomad_encampment: SettlementPool,
    quiet_village: SettlementPool,
    busy_town: SettlementPool,
    bustling_city: SettlementPool,
    gleaming_castle: SettlementPool,
}

impl TomlLexicon {
    fn into_lexicon(self) -> Lexicon {
        let mut lexicon = Lexicon::default();

        let n = self.names;
        for (species, names) in [
            (Species::Goblin, n.goblin),
            (Species::Human, n.human),
            (Species::Ogre, n.ogre),
            (Species::Orc, n.orc),
        ] {
            lexicon.set_names(species, names);
        }

        let a = self.adjectives;
        for (bucket, words) in [
            (AdjectiveBucket::Generic, a.generic),
            (AdjectiveBucket::Strong, a.strong),
            (AdjectiveBucket::Weak, a.weak),
            (AdjectiveBucket::Himbo, a.himbo),
            (AdjectiveBucket::Smart, a.smart),
            (AdjectiveBucket::Dumb, a.dumb),
            (AdjectiveBucket::Fast, a.fast),
            (AdjectiveBucket::Slow, a.slow),
            (AdjectiveBucket::Popular, a.popular),
            (AdjectiveBucket::Unpopular, a.unpopular),
            (AdjectiveBucket::Rounded, a.rounded),
            (AdjectiveBucket::Useless, a.useless),
        ] {
            lexicon.set_adjectives(bucket, words);
        }

        let s = self.settlements;
        for (tier, pool) in [
            (SettlementTier::NomadEncampment, s.nomad_encampment),
            (SettlementTier::QuietVillage, s.quiet_village),
            (SettlementTier::BusyTown, s.busy_town),
            (SettlementTier::BustlingCity, s.bustling_city),
            (SettlementTier::GleamingCastle, s.gleaming_castle),
        ] {
            lexicon.set_settlement_pool(tier, pool);
        }

        lexicon
    }
}
