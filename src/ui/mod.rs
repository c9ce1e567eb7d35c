//! UI module - plain-text menus and reports for the terminal binary

pub mod display;
pub mod input;

pub use input::{GameAction, MainMenuChoice};
