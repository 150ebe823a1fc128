use std::str::FromStr;
use thiserror;

pub const MENU_TEXT: &str = "\nTV Tracker - menu\n-----------------\n\ns) search tv shows\nd) delete tv show\np) print upcoming tv episodes\nq) quit program & save changes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Search,
    Delete,
    PrintSchedule,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} is not valid option", .0)]
pub struct InvalidChoice(pub String);

impl FromStr for MenuCommand {
    type Err = InvalidChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let choice = value.trim().to_lowercase();
        match choice.as_str() {
            "s" => Ok(MenuCommand::Search),
            "d" => Ok(MenuCommand::Delete),
            "p" => Ok(MenuCommand::PrintSchedule),
            "q" => Ok(MenuCommand::Quit),
            _ => Err(InvalidChoice(choice)),
        }
    }
}

/// Answer to "choose by index" prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Back,
    Index(usize),
    Invalid,
}

pub fn parse_selection(value: &str, total_items: usize) -> Selection {
    let value = value.trim();
    if value.is_empty() {
        return Selection::Back;
    }
    match value.parse::<usize>() {
        Ok(index) if index < total_items => Selection::Index(index),
        _ => Selection::Invalid,
    }
}
