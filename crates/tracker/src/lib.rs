pub mod airdate;
pub mod show_record;
pub mod episode_trimmer;
pub mod sync_decider;
pub mod library;
pub mod search;
pub mod snapshot;
pub mod config;

pub mod app;
