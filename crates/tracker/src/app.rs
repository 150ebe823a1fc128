use chrono::NaiveDate;
use reqwest;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror;
use tracing;
use tvmaze::api::{ApiError, Session};
use tvmaze::models::{SearchResult, Show};
use crate::config::TrackerConfig;
use crate::library::{Library, LibraryError};
use crate::search::filter_search_results;
use crate::show_record::{ShowMeta, ShowRecord, build_show_record};
use crate::snapshot::{SnapshotError, load_library, save_library};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{}", .0)]
    Library(#[from] LibraryError),
    #[error("api error: {}", .0)]
    Api(#[from] ApiError),
}

/// Where show metadata and episode lists come from.
pub trait ShowSource {
    fn search_shows(&self, term: &str) -> impl Future<Output = Result<Vec<SearchResult>, ApiError>>;
    fn get_show_with_episodes(&self, id: &str) -> impl Future<Output = Result<Show, ApiError>>;
}

impl ShowSource for Session {
    async fn search_shows(&self, term: &str) -> Result<Vec<SearchResult>, ApiError> {
        Session::search_shows(self, term).await
    }

    async fn get_show_with_episodes(&self, id: &str) -> Result<Show, ApiError> {
        Session::get_show_with_episodes(self, id).await
    }
}

pub fn create_session(config: &TrackerConfig) -> Result<Session, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(config.get_request_timeout())
        .build()?;
    Ok(Session::new(Arc::new(client), config.api_url.as_str()))
}

pub struct App<S> {
    source: S,
    library: Library,
    snapshot_path: PathBuf,
}

impl<S: ShowSource> App<S> {
    pub async fn new(source: S, snapshot_path: PathBuf) -> Self {
        let library = load_library(snapshot_path.as_path()).await;
        tracing::info!(path = %snapshot_path.display(), total_shows = library.len(), "library loaded");
        Self::with_library(source, library, snapshot_path)
    }

    pub fn with_library(source: S, library: Library, snapshot_path: PathBuf) -> Self {
        Self {
            source,
            library,
            snapshot_path,
        }
    }

    pub fn get_library(&self) -> &Library {
        &self.library
    }

    pub fn get_snapshot_path(&self) -> &Path {
        self.snapshot_path.as_path()
    }
}

impl<S: ShowSource> App<S> {
    /// Rebuilds every out of date record. Returns the names of the shows that were updated.
    pub async fn check_updates(&mut self, today: NaiveDate) -> Vec<String> {
        let mut updated = Vec::new();
        for id in self.library.list_shows_needing_sync(today) {
            let meta = match self.library.get(id.as_str()) {
                Some(record) => record.get_meta(),
                None => continue,
            };

            let show = match self.source.get_show_with_episodes(id.as_str()).await {
                Ok(show) => show,
                Err(err) => {
                    tracing::error!(show_id = id.as_str(), "skipping update of '{}': {}", meta.name, err);
                    continue;
                },
            };

            let episodes = show.get_episodes_newest_first();
            let record = build_show_record(&meta, episodes.as_slice(), today);
            tracing::info!(show_id = id.as_str(), next_airdate = %record.next_airdate, "updated '{}'", meta.name);
            self.library.replace_show(id.as_str(), record);
            updated.push(meta.name);
        }
        updated
    }

    /// Provider failures are logged and reported as no results.
    pub async fn search(&self, term: &str) -> Vec<ShowMeta> {
        match self.source.search_shows(term).await {
            Ok(results) => filter_search_results(results.as_slice()),
            Err(err) => {
                tracing::error!(term, "show search failed: {}", err);
                Vec::new()
            },
        }
    }

    pub async fn add_show(&mut self, meta: &ShowMeta, today: NaiveDate) -> Result<&ShowRecord, AppError> {
        if self.library.contains(meta.id.as_str()) {
            return Err(LibraryError::DuplicateShow(meta.id.clone()).into());
        }
        let show = self.source.get_show_with_episodes(meta.id.as_str()).await?;
        let episodes = show.get_episodes_newest_first();
        let record = self.library.add_show(meta, episodes.as_slice(), today)?;
        Ok(record)
    }

    pub fn remove_show(&mut self, id: &str) -> Result<Option<ShowRecord>, LibraryError> {
        self.library.remove_show(id)
    }

    pub async fn save(&self) -> Result<(), SnapshotError> {
        save_library(self.snapshot_path.as_path(), &self.library).await
    }
}
