pub mod command;
pub mod schedule;
pub mod menu;
