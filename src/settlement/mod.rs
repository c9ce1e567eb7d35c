//! Settlements and their tiers

pub mod site;
pub mod tier;

pub use site::{ExpectedValues, Settlement, SettlementIntel};
pub use tier::{SettlementTier, TierProfile};
