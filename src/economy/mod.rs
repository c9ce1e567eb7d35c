//! Resource bookkeeping for the horde

pub mod stash;

pub use stash::{Stash, Upkeep};
