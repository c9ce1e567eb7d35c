//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for settlements within a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SettlementId(pub u32);

impl SettlementId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// In-game week counter (campaign time unit)
pub type Week = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settlement_id_equality() {
        let a = SettlementId(1);
        let b = SettlementId::new(1);
        let c = SettlementId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_settlement_id_hash() {
        use std::collections::HashMap;
        let mut map: HashMap<SettlementId, &str> = HashMap::new();
        map.insert(SettlementId(7), "Camesettle");
        assert_eq!(map.get(&SettlementId(7)), Some(&"Camesettle"));
    }
}
