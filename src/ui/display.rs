//! Plain-text rendering of campaign state and action reports

use crate::campaign::{
    CampaignSummary, RaidModifier, RaidOutcome, RaidReport, RecruitReport, Renown, ScoutReport,
    SurrenderOffer, Turn,
};
use crate::creature::{Creature, CreatureGroup, Species, StatKind};
use crate::economy::{Stash, Upkeep};
use crate::settlement::{Settlement, SettlementIntel};

/// Rank-and-file table followed by totals and averages
///
/// The commander is left out of the rows but counted in the aggregates.
pub fn group_table(group: &CreatureGroup) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "{:<16} {:<8} {:<14} {:>4} {:>4} {:>4} {:>5}\n",
        "Name", "Species", "Adjective", "BF", "CUN", "QCK", "REP"
    ));
    for member in group.rank_and_file() {
        s.push_str(&format!(
            "{:<16} {:<8} {:<14} {:>4} {:>4} {:>4} {:>5.2}\n",
            member.name,
            member.species.to_string(),
            member.adjective,
            member.stats.beef.value,
            member.stats.cunning.value,
            member.stats.quickness.value,
            member.stats.reputation.value,
        ));
    }

    if group.is_empty() {
        s.push_str("(nobody)\n");
        return s;
    }

    let totals = group.totals();
    s.push_str(&format!(
        "{:<40} {:>4} {:>4} {:>4} {:>5.2}\n",
        "Total", totals.beef, totals.cunning, totals.quickness, totals.reputation
    ));
    let average_label = if group.commander().is_some() { "Average*" } else { "Average" };
    s.push_str(&format!(
        "{:<40} {:>4.1} {:>4.1} {:>4.1} {:>5.2}\n",
        average_label,
        group.avg_beef(),
        group.avg_cunning(),
        group.avg_quickness(),
        group.avg_reputation()
    ));
    if group.commander().is_some() {
        s.push_str("*Averages include your stats\n");
    }

    let counts: Vec<String> = Species::ALL
        .iter()
        .map(|species| (species, group.count_of(*species)))
        .filter(|(_, n)| *n > 0)
        .map(|(species, n)| format!("{n} {species}"))
        .collect();
    if !counts.is_empty() {
        s.push_str(&format!("Rank and file: {}\n", counts.join(", ")));
    }
    s
}

/// Stash contents, weekly upkeep and how long the stash lasts
pub fn stash_report(stash: &Stash, upkeep: &Upkeep, weeks: Option<u32>) -> String {
    let mut s = format!(
        "Your stash holds {} food and {} gold. The horde needs {} food and {} gold each week.",
        stash.food, stash.gold, upkeep.food, upkeep.gold
    );
    match weeks {
        Some(w) => s.push_str(&format!(
            " This is enough to keep your horde happy for {w} week(s)."
        )),
        None => s.push_str(" Your horde asks for nothing."),
    }
    s
}

/// Commander profile: description, stats and what each stat does
pub fn profile(commander: &Creature) -> String {
    let mut s = format!("{}\n{}\n", commander.describe(), commander.stats_line());
    for kind in StatKind::ALL {
        s.push_str(&format!("  {:<10} {}\n", kind.name(), kind.description()));
    }
    s
}

/// One line per settlement: exact figures if scouted, estimates otherwise
pub fn settlement_line(settlement: &Settlement) -> String {
    match settlement.intel() {
        SettlementIntel::Scouted { beef, reward } => format!(
            "{} Beef: {}, reward: {} food, {} gold",
            settlement.describe(),
            beef,
            reward.food,
            reward.gold
        ),
        SettlementIntel::Estimated(expected) => format!(
            "{} Beef: ~{:.0}, reward: ~{:.0} food, ~{:.0} gold",
            settlement.describe(),
            expected.beef,
            expected.food,
            expected.gold
        ),
    }
}

/// Numbered settlement menu
pub fn settlement_menu(settlements: &[&Settlement]) -> String {
    let mut s = String::new();
    for (i, settlement) in settlements.iter().enumerate() {
        s.push_str(&format!("{:>2}. {}\n", i + 1, settlement_line(settlement)));
    }
    s.push_str(" b. Back\n");
    s
}

pub fn surrender_prompt(offer: &SurrenderOffer) -> String {
    let leader = match (&offer.commander_name, &offer.commander_title) {
        (Some(name), Some(title)) => format!("{name} the {title}"),
        (Some(name), None) => name.clone(),
        _ => String::from("the horde"),
    };
    format!(
        "A herald rides out from {}. The {} defenders will lay down their arms and join {} \
         rather than face them. Accept their surrender? (y/n)",
        offer.settlement_name, offer.militia_size, leader
    )
}

fn modifier_line(name: &str, modifier: &RaidModifier) -> String {
    match modifier {
        RaidModifier::Intimidation { militia_cunning_lost } => format!(
            "[REP] The defenders of {name} lose their nerve before your famous horde. \
             (-{militia_cunning_lost:.2} militia Cunning)"
        ),
        RaidModifier::SurpriseAttack { militia_beef_lost } => format!(
            "[QCK] Your horde is on {name} before the militia can form up. \
             (-{militia_beef_lost:.2} militia Beef)"
        ),
        RaidModifier::ScoutedRally => format!(
            "[QCK] The {name} militia rallies fast, but your scouts already know where it is weak. \
             (No change)"
        ),
        RaidModifier::DefenderRally { horde_beef_lost } => format!(
            "[QCK] The {name} militia is waiting at the walls. \
             (-{horde_beef_lost:.2} horde Beef)"
        ),
        RaidModifier::ScoutIntel { horde_beef_gained } => format!(
            "[CUN] Your scouts' reports give the horde the upper hand. \
             (+{horde_beef_gained:.2} horde Beef)"
        ),
        RaidModifier::OutwittedDefenders { horde_beef_gained } => format!(
            "[CUN] The defenders of {name} walk straight into your trap. \
             (+{horde_beef_gained:.2} horde Beef)"
        ),
        RaidModifier::SharpDefenders { militia_beef_gained } => format!(
            "[CUN] The men of {name} see through your tricks. \
             (+{militia_beef_gained:.2} militia Beef)"
        ),
    }
}

/// Narrative of a raid, from the settlement's description to the outcome
pub fn raid_report(report: &RaidReport) -> String {
    let name = &report.settlement_name;
    let mut s = format!("{}\n", report.description);

    if let Some(a) = &report.assessment {
        s.push_str(&format!("\nBase horde Beef: {:.2}\n", a.base_horde_beef));
        s.push_str(&format!("Base militia Beef: {:.2}\n\n", a.base_militia_beef));
        for modifier in &a.modifiers {
            s.push_str(&format!("{}\n", modifier_line(name, modifier)));
        }
        s.push_str(&format!("\nAdjusted horde Beef: {:.2}\n", a.horde_beef));
        s.push_str(&format!("Adjusted militia Beef: {:.2}\n\n", a.militia_beef));
    }

    match &report.outcome {
        RaidOutcome::Surrendered { absorbed } => {
            s.push_str("VICTORY\n");
            s.push_str(&format!(
                "The {absorbed} men of the {name} militia have joined your horde!\n"
            ));
        }
        RaidOutcome::Victory { recruits, reward } => {
            s.push_str("VICTORY\n");
            s.push_str(&format!("The defenses of {name} crumble before your horde.\n"));
            s.push_str(&format!(
                "The raid added {} food and {} gold to the stash.\n",
                reward.food, reward.gold
            ));
            if *recruits > 0 {
                s.push_str(&format!("{recruits} goblin(s) heard of the victory and joined up.\n"));
            }
        }
        RaidOutcome::Defeat { casualties } => {
            s.push_str("DEFEAT\n");
            s.push_str(&format!("Your horde was beaten back from {name}.\n"));
            for fallen in casualties {
                s.push_str(&format!(
                    "  {} the {} {} didn't make it back.\n",
                    fallen.name,
                    fallen.adjective,
                    fallen.species.label()
                ));
            }
        }
    }
    s.push_str(&format!(
        "Reputation {:+.2} for every member of the horde.",
        report.reputation_change
    ));
    s
}

pub fn scout_report(report: &ScoutReport) -> String {
    format!(
        "Your scouts report on {}: Beef: {}, reward: {} food, {} gold",
        report.settlement_name, report.beef, report.reward.food, report.reward.gold
    )
}

pub fn recruit_report(report: &RecruitReport, commander_name: &str) -> String {
    let mut s = String::new();
    if let Some(renown) = report.renown {
        let opener = match renown {
            Renown::Legendary => format!("Every goblin alive has heard of {commander_name}. They come running."),
            Renown::Famous => format!("The name {commander_name} carries far. Recruits are easy to find."),
            Renown::Known => format!("Goblins nearby are starting to recognise {commander_name}."),
            Renown::Rumoured => String::from("Nobody knows your name yet, but some goblins need the work."),
            Renown::Obscure => format!("{commander_name} is better known for losing. A few goblins sign up anyway."),
            Renown::Unknown => String::from("Hardly anyone wants to join a horde this unlucky."),
        };
        s.push_str(&format!("{opener}\n"));
    }
    if !report.lost.is_empty() {
        s.push_str(&format!(
            "The {}s were hungry on the way back: {} goblin(s) were eaten.\n",
            report.species.label(),
            report.lost.len()
        ));
    }
    s.push_str(&format!(
        "{} {}(s) joined the horde.",
        report.recruited,
        report.species.label()
    ));
    s
}

/// Time and upkeep spent, plus any settlements that appeared
pub fn turn_footer<T>(turn: &Turn<T>, settlements: &[Settlement]) -> String {
    let mut s = format!(
        "{} week(s) have passed. In this time, your horde has required {} food and {} gold to stay happy.",
        turn.weeks, turn.upkeep_paid.food, turn.upkeep_paid.gold
    );
    for id in &turn.discovered {
        if let Some(found) = settlements.iter().find(|found| found.id == *id) {
            s.push_str(&format!("\nWord arrives of a new settlement: {}", found.describe()));
        }
    }
    s
}

pub fn victory_banner(summary: &CampaignSummary) -> String {
    format!("Congratulations, commander!\n{summary}")
}
