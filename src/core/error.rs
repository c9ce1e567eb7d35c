use thiserror::Error;

use crate::core::types::SettlementId;
use crate::creature::{AdjectiveBucket, Species};
use crate::economy::Stash;
use crate::settlement::SettlementTier;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("No names configured for {0:?}; populate the lexicon before generating creatures")]
    EmptyNamePool(Species),

    #[error("No adjectives configured for the {0:?} bucket")]
    EmptyAdjectiveBucket(AdjectiveBucket),

    #[error("No names or descriptions configured for {0:?} settlements")]
    EmptySettlementPool(SettlementTier),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{settlement} is not a valid target: {reason}")]
    InvalidRaidTarget { settlement: String, reason: String },

    #[error("Settlement not found: {0:?}")]
    UnknownSettlement(SettlementId),

    #[error(
        "Maintaining the horde for {weeks} week(s) requires {} food and {} gold, \
         but the stash holds {} food and {} gold",
        required.food, required.gold, available.food, available.gold
    )]
    InsufficientResources {
        weeks: u32,
        required: Stash,
        available: Stash,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl GameError {
    /// True for errors that must be fixed in configuration before play can start
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GameError::EmptyNamePool(_)
                | GameError::EmptyAdjectiveBucket(_)
                | GameError::EmptySettlementPool(_)
                | GameError::InvalidConfig(_)
                | GameError::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_resources_message() {
        let err = GameError::InsufficientResources {
            weeks: 2,
            required: Stash::new(60, 12),
            available: Stash::new(50, 20),
        };
        let msg = err.to_string();
        assert!(msg.contains("2 week(s)"));
        assert!(msg.contains("60 food and 12 gold"));
        assert!(msg.contains("50 food and 20 gold"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_configuration_errors_flagged() {
        assert!(GameError::EmptyNamePool(Species::Ogre).is_configuration());
        assert!(GameError::InvalidConfig("bad".into()).is_configuration());
        assert!(!GameError::UnknownSettlement(SettlementId(3)).is_configuration());
    }
}
