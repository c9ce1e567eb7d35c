//! Static game data provisioned from TOML

pub mod lexicon;

pub use lexicon::{Lexicon, SettlementPool};
