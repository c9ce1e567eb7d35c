//! Menu input parsing
//!
//! Every prompt resolves to a closed enum or a plain value; unknown input
//! parses to `None` and the caller asks again.

use std::str::FromStr;

use crate::campaign::Recruitment;
use crate::core::error::GameError;
use crate::creature::{Species, Title};

/// Options on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    NewGame,
    Quit,
}

impl MainMenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "n" | "new" | "new game" => Some(MainMenuChoice::NewGame),
            "2" | "q" | "quit" => Some(MainMenuChoice::Quit),
            _ => None,
        }
    }
}

/// Everything the commander can do during a week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Raid,
    Scout,
    Explore,
    Recruit(Recruitment),
    Dismiss,
    ViewHorde,
    ViewProfile,
    Quit,
}

impl GameAction {
    /// Menu order
    pub const ALL: [GameAction; 10] = [
        GameAction::Raid,
        GameAction::Scout,
        GameAction::Explore,
        GameAction::Recruit(Recruitment::Goblins),
        GameAction::Recruit(Recruitment::Ogres),
        GameAction::Recruit(Recruitment::Orcs),
        GameAction::Dismiss,
        GameAction::ViewHorde,
        GameAction::ViewProfile,
        GameAction::Quit,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            GameAction::Raid => "raid",
            GameAction::Scout => "scout",
            GameAction::Explore => "explore",
            GameAction::Recruit(Recruitment::Goblins) => "goblins",
            GameAction::Recruit(Recruitment::Ogres) => "ogres",
            GameAction::Recruit(Recruitment::Orcs) => "orcs",
            GameAction::Dismiss => "dismiss",
            GameAction::ViewHorde => "horde",
            GameAction::ViewProfile => "profile",
            GameAction::Quit => "quit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameAction::Raid => "Raid a settlement",
            GameAction::Scout => "Scout a settlement",
            GameAction::Explore => "Explore the land",
            GameAction::Recruit(Recruitment::Goblins) => "Recruit goblins",
            GameAction::Recruit(Recruitment::Ogres) => "Recruit ogres",
            GameAction::Recruit(Recruitment::Orcs) => "Recruit orcs",
            GameAction::Dismiss => "Dismiss horde members",
            GameAction::ViewHorde => "View horde",
            GameAction::ViewProfile => "View commander profile",
            GameAction::Quit => "Quit to main menu",
        }
    }

    /// Accepts the 1-based menu number or the keyword
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL.into_iter().find(|a| a.keyword() == input)
    }
}

impl FromStr for GameAction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameAction::parse(s).ok_or_else(|| GameError::InvalidConfig(format!("unknown action '{s}'")))
    }
}

/// A title by 1-based number or by name
pub fn parse_title(input: &str) -> Option<Title> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| Title::ALL.get(i).copied());
    }
    input.parse().ok()
}

/// A 1-based choice out of `len` options; `Some(None)` means go back
pub fn parse_selection(input: &str, len: usize) -> Option<Option<usize>> {
    let input = input.trim().to_ascii_lowercase();
    if input.is_empty() || input == "b" || input == "back" {
        return Some(None);
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(Some(n - 1)),
        _ => None,
    }
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "accept" => Some(true),
        "n" | "no" | "decline" => Some(false),
        _ => None,
    }
}

/// "<species> <count>", e.g. "goblin 3" or "ogres 1"
pub fn parse_dismissal(input: &str) -> Option<(Species, usize)> {
    let mut parts = input.split_whitespace();
    let species = parse_species(parts.next()?)?;
    let count = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((species, count))
}

fn parse_species(word: &str) -> Option<Species> {
    let word = word.to_ascii_lowercase();
    let word = word.strip_suffix('s').unwrap_or(word.as_str());
    Species::ALL.into_iter().find(|s| s.label() == word)
}
