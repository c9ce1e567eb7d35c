//! Raid resolution
//!
//! A raid compares the horde's Beef against the militia's after a fixed
//! sequence of modifiers (reputation, quickness, cunning). The modifiers
//! only touch local working totals; the creatures' stats are changed
//! afterwards by the outcome (recruits, casualties, reputation).

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::recruit::add_recruits;
use crate::core::error::{GameError, Result};
use crate::core::types::SettlementId;
use crate::creature::{Creature, CreatureGroup, Species};
use crate::data::Lexicon;
use crate::economy::Stash;
use crate::settlement::Settlement;

/// Average horde reputation above which defenders lose their nerve
pub const INTIMIDATION_REPUTATION: f64 = 4.5;

/// Average militia cunning above which a famous horde is offered surrender
pub const SURRENDER_MILITIA_CUNNING: f64 = 7.0;

/// Militia cunning kept after intimidation
pub const INTIMIDATION_CUNNING_FACTOR: f64 = 0.7;

/// Beef kept by the side caught off guard
pub const SURPRISE_BEEF_FACTOR: f64 = 0.9;

/// Beef multiplier for the side with the tactical edge
pub const TACTICAL_EDGE_FACTOR: f64 = 1.1;

/// Goblins drawn to the horde after a victory
pub const VICTORY_RECRUITS: (u32, u32) = (1, 3);

/// Horde members lost after a defeat
pub const DEFEAT_CASUALTIES: (u32, u32) = (3, 5);

/// Aggregates read from both sides at the start of a raid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaidInputs {
    pub horde_beef: f64,
    pub horde_avg_cunning: f64,
    pub horde_avg_quickness: f64,
    pub horde_avg_reputation: f64,
    pub militia_beef: f64,
    pub militia_cunning: f64,
    pub militia_avg_cunning: f64,
    pub militia_avg_quickness: f64,
    pub militia_size: usize,
    pub scouted: bool,
}

impl RaidInputs {
    /// Measure a horde and a settlement; both groups must be non-empty
    pub fn measure(horde: &CreatureGroup, settlement: &Settlement) -> Self {
        let militia = &settlement.militia;
        Self {
            horde_beef: horde.total_beef() as f64,
            horde_avg_cunning: horde.avg_cunning(),
            horde_avg_quickness: horde.avg_quickness(),
            horde_avg_reputation: horde.avg_reputation(),
            militia_beef: militia.total_beef() as f64,
            militia_cunning: militia.total_cunning() as f64,
            militia_avg_cunning: militia.avg_cunning(),
            militia_avg_quickness: militia.avg_quickness(),
            militia_size: militia.len(),
            scouted: settlement.scouted,
        }
    }

    /// A famous horde facing a clever militia is offered its surrender
    pub fn offers_surrender(&self) -> bool {
        self.horde_avg_reputation > INTIMIDATION_REPUTATION
            && self.militia_avg_cunning > SURRENDER_MILITIA_CUNNING
    }
}

/// One narrative beat of a raid and the numbers it moved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RaidModifier {
    /// [REP] the horde's fame rattles the defenders
    Intimidation { militia_cunning_lost: f64 },
    /// [QCK] the faster horde caught the militia unprepared
    SurpriseAttack { militia_beef_lost: f64 },
    /// [QCK] the militia rallied, but scouting exposed a flaw (no change)
    ScoutedRally,
    /// [QCK] the militia rallied before the horde arrived
    DefenderRally { horde_beef_lost: f64 },
    /// [CUN] scouting reports gave the horde the edge
    ScoutIntel { horde_beef_gained: f64 },
    /// [CUN] the defenders were outwitted
    OutwittedDefenders { horde_beef_gained: f64 },
    /// [CUN] the defenders were sharper than expected
    SharpDefenders { militia_beef_gained: f64 },
}

/// Working totals after every modifier, plus the beats that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaidAssessment {
    pub base_horde_beef: f64,
    pub base_militia_beef: f64,
    pub horde_beef: f64,
    pub militia_beef: f64,
    pub militia_cunning: f64,
    pub modifiers: Vec<RaidModifier>,
}

impl RaidAssessment {
    /// Ties go to the defender
    pub fn horde_wins(&self) -> bool {
        self.horde_beef > self.militia_beef
    }
}

/// Apply the reputation, quickness and cunning modifiers in order
///
/// Assumes surrender was not accepted.
pub fn assess(inputs: &RaidInputs) -> RaidAssessment {
    let mut horde_beef = inputs.horde_beef;
    let mut militia_beef = inputs.militia_beef;
    let mut militia_cunning = inputs.militia_cunning;
    let mut modifiers = Vec::with_capacity(3);

    if inputs.horde_avg_reputation > INTIMIDATION_REPUTATION {
        let lost = militia_cunning * (1.0 - INTIMIDATION_CUNNING_FACTOR);
        militia_cunning *= INTIMIDATION_CUNNING_FACTOR;
        modifiers.push(RaidModifier::Intimidation {
            militia_cunning_lost: lost,
        });
    }

    if inputs.horde_avg_quickness > inputs.militia_avg_quickness {
        let lost = militia_beef * (1.0 - SURPRISE_BEEF_FACTOR);
        militia_beef *= SURPRISE_BEEF_FACTOR;
        modifiers.push(RaidModifier::SurpriseAttack {
            militia_beef_lost: lost,
        });
    } else if inputs.scouted {
        modifiers.push(RaidModifier::ScoutedRally);
    } else {
        let lost = horde_beef * (1.0 - SURPRISE_BEEF_FACTOR);
        horde_beef *= SURPRISE_BEEF_FACTOR;
        modifiers.push(RaidModifier::DefenderRally { horde_beef_lost: lost });
    }

    // Compares against the intimidated cunning, not the militia's raw average
    let outwitted = inputs.horde_avg_cunning > militia_cunning / inputs.militia_size as f64;
    if inputs.scouted || outwitted {
        let gained = horde_beef * (TACTICAL_EDGE_FACTOR - 1.0);
        horde_beef *= TACTICAL_EDGE_FACTOR;
        modifiers.push(if inputs.scouted {
            RaidModifier::ScoutIntel {
                horde_beef_gained: gained,
            }
        } else {
            RaidModifier::OutwittedDefenders {
                horde_beef_gained: gained,
            }
        });
    } else {
        let gained = militia_beef * (TACTICAL_EDGE_FACTOR - 1.0);
        militia_beef *= TACTICAL_EDGE_FACTOR;
        modifiers.push(RaidModifier::SharpDefenders {
            militia_beef_gained: gained,
        });
    }

    for modifier in &modifiers {
        tracing::debug!(?modifier, "Raid modifier applied");
    }

    RaidAssessment {
        base_horde_beef: inputs.horde_beef,
        base_militia_beef: inputs.militia_beef,
        horde_beef,
        militia_beef,
        militia_cunning,
        modifiers,
    }
}

/// The herald's offer, shown to the player before combat
#[derive(Debug, Clone, PartialEq)]
pub struct SurrenderOffer {
    pub settlement: SettlementId,
    pub settlement_name: String,
    pub militia_size: usize,
    pub commander_name: Option<String>,
    pub commander_title: Option<String>,
}

/// Decides whether a surrender offer is accepted
pub trait SurrenderDecision {
    fn accept(&mut self, offer: &SurrenderOffer) -> bool;
}

impl<F> SurrenderDecision for F
where
    F: FnMut(&SurrenderOffer) -> bool,
{
    fn accept(&mut self, offer: &SurrenderOffer) -> bool {
        self(offer)
    }
}

/// How a raid ended
#[derive(Debug, Clone, PartialEq)]
pub enum RaidOutcome {
    /// The militia joined the horde without a fight
    Surrendered { absorbed: usize },
    /// The militia was wiped out and the settlement plundered
    Victory { recruits: usize, reward: Stash },
    /// The horde was beaten back
    Defeat { casualties: Vec<Creature> },
}

/// Everything that happened during a raid
#[derive(Debug, Clone, PartialEq)]
pub struct RaidReport {
    pub settlement: SettlementId,
    pub settlement_name: String,
    pub description: String,
    pub surrender_offered: bool,
    /// `None` when the militia surrendered before any fighting
    pub assessment: Option<RaidAssessment>,
    pub outcome: RaidOutcome,
    /// Applied to every horde member, before clamping
    pub reputation_change: f64,
}

impl RaidReport {
    pub fn is_victory(&self) -> bool {
        !matches!(self.outcome, RaidOutcome::Defeat { .. })
    }
}

/// Resolve a raid by `horde` on `settlement`
///
/// Refuses defeated or undefended settlements without changing anything.
/// On success the settlement is always left scouted.
pub fn resolve_raid(
    horde: &mut CreatureGroup,
    settlement: &mut Settlement,
    stash: &mut Stash,
    lexicon: &Lexicon,
    rng: &mut impl Rng,
    decision: &mut impl SurrenderDecision,
) -> Result<RaidReport> {
    if settlement.defeated {
        return Err(GameError::InvalidRaidTarget {
            settlement: settlement.name.clone(),
            reason: "it has already been defeated".into(),
        });
    }
    if settlement.militia.is_empty() {
        return Err(GameError::InvalidRaidTarget {
            settlement: settlement.name.clone(),
            reason: "it has no militia left to fight".into(),
        });
    }
    if horde.is_empty() {
        return Err(GameError::InvalidRaidTarget {
            settlement: settlement.name.clone(),
            reason: "the horde has no one to send".into(),
        });
    }

    let inputs = RaidInputs::measure(horde, settlement);
    tracing::info!(
        settlement = %settlement.name,
        horde_beef = inputs.horde_beef,
        militia_beef = inputs.militia_beef,
        "Raid begins"
    );

    let mut report = RaidReport {
        settlement: settlement.id,
        settlement_name: settlement.name.clone(),
        description: settlement.description.clone(),
        surrender_offered: false,
        assessment: None,
        outcome: RaidOutcome::Victory {
            recruits: 0,
            reward: Stash::default(),
        },
        reputation_change: settlement.reputation_gain,
    };

    if inputs.offers_surrender() {
        report.surrender_offered = true;
        let commander = horde.commander();
        let offer = SurrenderOffer {
            settlement: settlement.id,
            settlement_name: settlement.name.clone(),
            militia_size: settlement.militia.len(),
            commander_name: commander.map(|c| c.name.clone()),
            commander_title: commander.map(|c| c.adjective.clone()),
        };

        if decision.accept(&offer) {
            let absorbed = settlement.militia.disband();
            let count = absorbed.len();
            horde.bolster(absorbed);
            settlement.defeated = true;
            settlement.scouted = true;
            horde.adjust_reputation(settlement.reputation_gain);

            tracing::info!(settlement = %settlement.name, absorbed = count, "Militia surrendered");
            report.outcome = RaidOutcome::Surrendered { absorbed: count };
            return Ok(report);
        }
        tracing::info!(settlement = %settlement.name, "Surrender refused");
    }

    let assessment = assess(&inputs);

    if assessment.horde_wins() {
        settlement.defeated = true;
        settlement.militia.disband();
        let recruits = add_recruits(
            horde,
            Species::Goblin,
            VICTORY_RECRUITS.0,
            VICTORY_RECRUITS.1,
            lexicon,
            rng,
        )?;
        stash.add(settlement.reward);
        horde.adjust_reputation(settlement.reputation_gain);

        tracing::info!(settlement = %settlement.name, recruits, "Raid victory");
        report.outcome = RaidOutcome::Victory {
            recruits,
            reward: settlement.reward,
        };
    } else {
        let casualties = horde.cull(
            &Species::HORDE_SPECIES,
            DEFEAT_CASUALTIES.0,
            DEFEAT_CASUALTIES.1,
            rng,
        );
        horde.adjust_reputation(-settlement.reputation_gain);

        tracing::info!(settlement = %settlement.name, lost = casualties.len(), "Raid defeat");
        report.outcome = RaidOutcome::Defeat { casualties };
        report.reputation_change = -settlement.reputation_gain;
    }

    settlement.scouted = true;
    report.assessment = Some(assessment);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> RaidInputs {
        RaidInputs {
            horde_beef: 30.0,
            horde_avg_cunning: 6.0,
            horde_avg_quickness: 5.0,
            horde_avg_reputation: 3.0,
            militia_beef: 28.0,
            militia_cunning: 40.0,
            militia_avg_cunning: 5.0,
            militia_avg_quickness: 4.0,
            militia_size: 8,
            scouted: false,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_assess_victory_by_hand() {
        // QCK 5 > 4: militia beef 28 -> 25.2
        // CUN 6 > 40/8: horde beef 30 -> 33
        let a = assess(&inputs());
        assert!(close(a.militia_beef, 25.2));
        assert!(close(a.horde_beef, 33.0));
        assert!(a.horde_wins());
        assert_eq!(a.modifiers.len(), 2);
        assert!(matches!(a.modifiers[0], RaidModifier::SurpriseAttack { militia_beef_lost } if close(militia_beef_lost, 2.8)));
        assert!(matches!(a.modifiers[1], RaidModifier::OutwittedDefenders { horde_beef_gained } if close(horde_beef_gained, 3.0)));
    }

    #[test]
    fn test_assess_defeat_by_hand() {
        // QCK 3 < 4, unscouted: horde beef 30 -> 27
        // CUN 4 < 40/8: militia beef 28 -> 30.8
        let a = assess(&RaidInputs {
            horde_avg_quickness: 3.0,
            horde_avg_cunning: 4.0,
            ..inputs()
        });
        assert!(close(a.horde_beef, 27.0));
        assert!(close(a.militia_beef, 30.8));
        assert!(!a.horde_wins());
        assert!(matches!(a.modifiers[0], RaidModifier::DefenderRally { .. }));
        assert!(matches!(a.modifiers[1], RaidModifier::SharpDefenders { .. }));
    }

    #[test]
    fn test_intimidation_feeds_cunning_check() {
        // Raw militia cunning per head is 5.0 > 4.0, but 0.7 * 40 / 8 = 3.5 < 4.0
        let a = assess(&RaidInputs {
            horde_avg_reputation: 4.75,
            horde_avg_cunning: 4.0,
            ..inputs()
        });
        assert!(close(a.militia_cunning, 28.0));
        assert!(matches!(a.modifiers[0], RaidModifier::Intimidation { militia_cunning_lost } if close(militia_cunning_lost, 12.0)));
        assert!(matches!(a.modifiers[2], RaidModifier::OutwittedDefenders { .. }));
    }

    #[test]
    fn test_scouted_rally_and_intel() {
        let a = assess(&RaidInputs {
            horde_avg_quickness: 2.0,
            horde_avg_cunning: 1.0,
            scouted: true,
            ..inputs()
        });
        assert_eq!(a.modifiers[0], RaidModifier::ScoutedRally);
        assert!(matches!(a.modifiers[1], RaidModifier::ScoutIntel { .. }));
        assert!(close(a.horde_beef, 33.0));
        assert!(close(a.militia_beef, 28.0));
    }

    #[test]
    fn test_tie_goes_to_defender() {
        let a = RaidAssessment {
            base_horde_beef: 10.0,
            base_militia_beef: 10.0,
            horde_beef: 11.0,
            militia_beef: 11.0,
            militia_cunning: 0.0,
            modifiers: vec![],
        };
        assert!(!a.horde_wins());
    }

    #[test]
    fn test_surrender_gate() {
        assert!(!inputs().offers_surrender());
        let famous = RaidInputs {
            horde_avg_reputation: 4.6,
            militia_avg_cunning: 7.5,
            ..inputs()
        };
        assert!(famous.offers_surrender());
        let dull = RaidInputs {
            militia_avg_cunning: 7.0,
            ..famous
        };
        assert!(!dull.offers_surrender());
    }
}
