//! Goblin Commander - turn-based horde raiding game
//!
//! Lead a goblin horde, raid human settlements for food and gold, and keep
//! the stash ahead of the horde's weekly upkeep until every settlement,
//! castles included, has fallen.

pub mod campaign;
pub mod core;
pub mod creature;
pub mod data;
pub mod economy;
pub mod settlement;
pub mod ui;
