//! Campaign layer: the session, raids, recruitment and the frontier

pub mod frontier;
pub mod raid;
pub mod recruit;
pub mod session;

pub use frontier::{Frontier, RefreshBand};
pub use raid::{
    assess, resolve_raid, RaidAssessment, RaidInputs, RaidModifier, RaidOutcome, RaidReport,
    SurrenderDecision, SurrenderOffer,
};
pub use recruit::{add_recruits, RecruitReport, Renown};
pub use session::{
    random_commander_name, Campaign, CampaignSummary, Recruitment, ScoutReport, Turn,
};
