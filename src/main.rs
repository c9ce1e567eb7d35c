//! Goblin Commander - Entry Point
//!
//! Reads menu choices from stdin, drives a campaign and prints what
//! happened. All rules live in the library; this file only talks to the
//! player.

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use goblin_commander::campaign::{random_commander_name, Campaign, SurrenderOffer, Turn};
use goblin_commander::core::error::{GameError, Result};
use goblin_commander::core::{GameConfig, SettlementId};
use goblin_commander::creature::Title;
use goblin_commander::data::Lexicon;
use goblin_commander::ui::display;
use goblin_commander::ui::input::{parse_dismissal, parse_selection, parse_title, parse_yes_no};
use goblin_commander::ui::{GameAction, MainMenuChoice};

const DEFAULT_LOG_FILTER: &str = "goblin_commander=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

/// Goblin Commander - raid, recruit and conquer
#[derive(Parser, Debug)]
#[command(name = "goblin-commander")]
#[command(about = "Lead a goblin horde against the settlements of men")]
struct Args {
    /// Random seed for deterministic campaigns
    #[arg(long)]
    seed: Option<u64>,

    /// Campaign configuration (TOML); defaults are used for missing fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name and word lists (TOML); the bundled lexicon is used otherwise
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Log filter, e.g. "goblin_commander=debug"; overrides RUST_LOG
    #[arg(long)]
    log: Option<String>,

    /// How to print the summary after a victory
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary: SummaryFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &args.config {
        Some(path) => GameConfig::load_from_toml(path)?,
        None => GameConfig::default(),
    };
    let lexicon = match &args.lexicon {
        Some(path) => Lexicon::load_from_toml(path)?,
        None => Lexicon::embedded()?,
    };
    config.validate()?;
    lexicon.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "Goblin Commander starting");

    let mut games = 0u64;
    loop {
        println!();
        println!("=== GOBLIN COMMANDER ===");
        println!("1. New game");
        println!("2. Quit");

        let Some(line) = prompt("> ")? else { break };
        match MainMenuChoice::parse(&line) {
            Some(MainMenuChoice::NewGame) => {
                let rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(games));
                games += 1;
                let Some(mut campaign) = new_game(config.clone(), lexicon.clone(), rng)? else {
                    break;
                };
                if !play(&mut campaign, args.summary)? {
                    break;
                }
            }
            Some(MainMenuChoice::Quit) => break,
            None => println!("Please select a different option."),
        }
    }

    println!("Goodbye, commander.");
    Ok(())
}

/// Print `message` and read one trimmed line; `None` at end of input
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Name the commander, pick a title and set up the campaign
fn new_game(config: GameConfig, lexicon: Lexicon, mut rng: ChaCha8Rng) -> Result<Option<Campaign>> {
    let suggestion = random_commander_name(&lexicon, &mut rng)?;
    println!();
    println!("Every horde needs a commander. What is your name?");
    let Some(name) = prompt(&format!("Name (blank for {suggestion}): "))? else {
        return Ok(None);
    };
    let name = if name.is_empty() { suggestion } else { name };

    println!();
    println!("What is {name} known for?");
    for (i, title) in Title::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, title);
    }
    let title = loop {
        let Some(line) = prompt("> ")? else { return Ok(None) };
        match parse_title(&line) {
            Some(title) => break title,
            None => println!("Please select a different option."),
        }
    };

    let campaign = Campaign::new(config, lexicon, name, title, rng)?;
    println!();
    if let Some(commander) = campaign.commander() {
        println!("{}", commander.describe());
    }
    println!(
        "{} goblin(s) have gathered to follow you. {} settlements lie within reach.",
        campaign.horde.rank_and_file().count(),
        campaign.frontier.len()
    );
    let upkeep = campaign.horde.upkeep();
    println!(
        "They will require {} food and {} gold each week to stay happy.",
        upkeep.food, upkeep.gold
    );
    Ok(Some(campaign))
}

/// Print recoverable errors and carry on; configuration errors end the program
fn recover(err: GameError) -> Result<()> {
    if err.is_configuration() {
        return Err(err);
    }
    tracing::warn!(%err, "Action refused");
    println!("{err}");
    Ok(())
}

fn print_footer<T>(campaign: &Campaign, turn: &Turn<T>) {
    println!("{}", display::turn_footer(turn, campaign.frontier.all()));
}

/// Print the summary if this turn won the campaign; true when it did
fn announce_victory<T>(turn: &Turn<T>, format: SummaryFormat) -> Result<bool> {
    let Some(summary) = &turn.victory else {
        return Ok(false);
    };
    println!();
    match format {
        SummaryFormat::Text => println!("{}", display::victory_banner(summary)),
        SummaryFormat::Json => println!("{}", summary.to_json()?),
    }
    Ok(true)
}

fn ask_surrender(offer: &SurrenderOffer) -> bool {
    println!("{}", display::surrender_prompt(offer));
    loop {
        match prompt("> ") {
            Ok(Some(line)) => match parse_yes_no(&line) {
                Some(answer) => return answer,
                None => println!("Please answer y or n."),
            },
            _ => return false,
        }
    }
}

/// Pick a raid or scout target; `None` to go back
fn choose_settlement(campaign: &Campaign, scouting: bool) -> Result<Option<SettlementId>> {
    let targets = if scouting {
        campaign.frontier.scout_targets()
    } else {
        campaign.frontier.raid_targets()
    };
    if targets.is_empty() {
        println!("There is nothing out there to {}.", if scouting { "scout" } else { "raid" });
        return Ok(None);
    }

    println!("Your horde currently has {} Beef.", campaign.horde.total_beef());
    print!("{}", display::settlement_menu(&targets));
    loop {
        let Some(line) = prompt("> ")? else { return Ok(None) };
        match parse_selection(&line, targets.len()) {
            Some(choice) => return Ok(choice.map(|i| targets[i].id)),
            None => println!("Please select a different option."),
        }
    }
}

/// The weekly loop; returns false once input runs out
fn play(campaign: &mut Campaign, format: SummaryFormat) -> Result<bool> {
    loop {
        println!();
        println!("Week {}", campaign.week);
        println!(
            "{}",
            display::stash_report(&campaign.stash, &campaign.horde.upkeep(), campaign.weeks_of_supply())
        );
        for (i, action) in GameAction::ALL.iter().enumerate() {
            println!("{:>2}. {}", i + 1, action.label());
        }

        let Some(line) = prompt("> ")? else { return Ok(false) };
        let Some(action) = GameAction::parse(&line) else {
            println!("Please select a different option.");
            continue;
        };

        match action {
            GameAction::Raid => {
                // Check the week can be paid for before showing targets
                if let Err(e) = campaign.pass_weeks(campaign.config.raid_weeks, true) {
                    recover(e)?;
                    continue;
                }
                let Some(target) = choose_settlement(campaign, false)? else { continue };
                match campaign.raid(target, &mut ask_surrender) {
                    Ok(turn) => {
                        println!();
                        println!("{}", display::raid_report(&turn.outcome));
                        print_footer(campaign, &turn);
                        if announce_victory(&turn, format)? {
                            return Ok(true);
                        }
                    }
                    Err(e) => recover(e)?,
                }
            }
            GameAction::Scout => {
                if let Err(e) = campaign.pass_weeks(campaign.config.scout_weeks, true) {
                    recover(e)?;
                    continue;
                }
                let Some(target) = choose_settlement(campaign, true)? else { continue };
                match campaign.scout(target) {
                    Ok(turn) => {
                        println!("{}", display::scout_report(&turn.outcome));
                        print_footer(campaign, &turn);
                    }
                    Err(e) => recover(e)?,
                }
            }
            GameAction::Explore => match campaign.explore() {
                Ok(turn) => {
                    if let Ok(found) = campaign.frontier.get(turn.outcome) {
                        println!("Your explorers found {}", found.describe());
                    }
                    print_footer(campaign, &turn);
                }
                Err(e) => recover(e)?,
            },
            GameAction::Recruit(kind) => match campaign.recruit(kind) {
                Ok(turn) => {
                    let name = campaign.commander().map(|c| c.name.clone()).unwrap_or_default();
                    println!("{}", display::recruit_report(&turn.outcome, &name));
                    print_footer(campaign, &turn);
                }
                Err(e) => recover(e)?,
            },
            GameAction::Dismiss => {
                println!("Who should go, and how many? (e.g. \"goblin 2\", blank to cancel)");
                let Some(line) = prompt("> ")? else { return Ok(false) };
                if line.is_empty() {
                    continue;
                }
                match parse_dismissal(&line) {
                    Some((species, count)) => {
                        let gone = campaign.dismiss(species, count);
                        println!("{} {}(s) left the horde.", gone.len(), species.label());
                    }
                    None => println!("Please select a different option."),
                }
            }
            GameAction::ViewHorde => print!("{}", display::group_table(&campaign.horde)),
            GameAction::ViewProfile => {
                if let Some(commander) = campaign.commander() {
                    print!("{}", display::profile(commander));
                }
            }
            GameAction::Quit => return Ok(true),
        }
    }
}
