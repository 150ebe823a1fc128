use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror;
use tracing;
use tvmaze::models as provider;
use crate::show_record::{ShowId, ShowMeta, ShowRecord, build_show_record};
use crate::sync_decider::get_sync_reason;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LibraryError {
    #[error("TV show '{}' is already in the collection", .0)]
    DuplicateShow(ShowId),
    #[error("there's no TV show with id '{}' in the collection", .0)]
    NotFound(ShowId),
}

/// Followed shows keyed by provider id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    shows: BTreeMap<ShowId, ShowRecord>,
}

impl Library {
    pub fn new() -> Self {
        Self {
            shows: BTreeMap::new(),
        }
    }

    pub fn from_shows(shows: BTreeMap<ShowId, ShowRecord>) -> Self {
        let shows = shows
            .into_iter()
            .map(|(id, mut record)| {
                record.id = id.clone();
                (id, record)
            })
            .collect();
        Self { shows }
    }

    pub fn get_shows(&self) -> &BTreeMap<ShowId, ShowRecord> {
        &self.shows
    }

    pub fn get(&self, id: &str) -> Option<&ShowRecord> {
        self.shows.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.shows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShowRecord> {
        self.shows.values()
    }
}

impl Library {
    /// `provider_episodes` are newest-first.
    pub fn add_show(&mut self, meta: &ShowMeta, provider_episodes: &[provider::Episode], today: NaiveDate) -> Result<&ShowRecord, LibraryError> {
        if self.shows.contains_key(meta.id.as_str()) {
            return Err(LibraryError::DuplicateShow(meta.id.clone()));
        }
        let record = build_show_record(meta, provider_episodes, today);
        Ok(&*self.shows.entry(meta.id.clone()).or_insert(record))
    }

    /// A blank id means the user backed out and gives `Ok(None)`.
    pub fn remove_show(&mut self, id: &str) -> Result<Option<ShowRecord>, LibraryError> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }
        match self.shows.remove(id) {
            Some(record) => Ok(Some(record)),
            None => Err(LibraryError::NotFound(id.to_string())),
        }
    }

    pub fn list_shows_needing_sync(&self, today: NaiveDate) -> Vec<ShowId> {
        let mut ids = Vec::new();
        for (id, record) in &self.shows {
            if let Some(reason) = get_sync_reason(record, today) {
                tracing::debug!(show_id = id.as_str(), name = record.name.as_str(), "sync needed: {}", reason);
                ids.push(id.clone());
            }
        }
        ids
    }

    /// Swaps in a freshly built record, returning the previous one.
    pub fn replace_show(&mut self, id: &str, mut record: ShowRecord) -> Option<ShowRecord> {
        record.id = id.to_string();
        self.shows.insert(id.to_string(), record)
    }

    /// Records with a known next airdate, soonest first.
    pub fn schedule_view(&self) -> Vec<&ShowRecord> {
        let mut shows: Vec<&ShowRecord> = self.shows
            .values()
            .filter(|record| record.next_airdate.date().is_some())
            .collect();
        shows.sort_by_key(|record| record.next_airdate.date());
        shows
    }
}
