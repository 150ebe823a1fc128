use std::collections::BTreeMap;
use std::path::Path;
use serde_json;
use thiserror;
use tokio;
use tracing;
use crate::library::Library;
use crate::show_record::{ShowId, ShowRecord};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("io error on snapshot: {}", .0)]
    Io(std::io::Error),
    #[error("json decode error on snapshot: {}", .0)]
    JsonDecode(serde_json::Error),
    #[error("json encode error on snapshot: {}", .0)]
    JsonEncode(serde_json::Error),
    #[error("snapshot top level is not a mapping of show ids")]
    NotAMapping,
}

pub fn deserialize_library(data: &str) -> Result<Library, SnapshotError> {
    if data.trim().is_empty() {
        return Ok(Library::new());
    }

    let value: serde_json::Value = serde_json::from_str(data).map_err(SnapshotError::JsonDecode)?;
    if !value.is_object() {
        return Err(SnapshotError::NotAMapping);
    }

    let shows: BTreeMap<ShowId, ShowRecord> = serde_json::from_value(value).map_err(SnapshotError::JsonDecode)?;
    Ok(Library::from_shows(shows))
}

pub fn serialize_library(library: &Library) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(library.get_shows()).map_err(SnapshotError::JsonEncode)
}

/// Reads the snapshot, falling back to an empty library on any failure.
pub async fn load_library(path: &Path) -> Library {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no snapshot found, starting with an empty library");
            return Library::new();
        },
        Err(err) => {
            tracing::warn!(path = %path.display(), "{}", SnapshotError::Io(err));
            return Library::new();
        },
    };

    match deserialize_library(data.as_str()) {
        Ok(library) => library,
        Err(err) => {
            tracing::warn!(path = %path.display(), "discarding unreadable snapshot: {}", err);
            Library::new()
        },
    }
}

pub async fn save_library(path: &Path, library: &Library) -> Result<(), SnapshotError> {
    let data = serialize_library(library)?;
    tokio::fs::write(path, data).await.map_err(SnapshotError::Io)?;
    tracing::debug!(path = %path.display(), total_shows = library.len(), "snapshot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::airdate::{Airdate, NextAirdate};
    use crate::show_record::Episode;

    const SINGLE_SHOW: &str = r#"{
        "329": {
            "name": "Shark Tank",
            "premiereDate": "2009",
            "episodes": [
                {"id": 1, "epname": "Pilot", "epseason": 1, "epnumber": 1, "airdate": "2099-01-01"},
                {"id": 2, "epname": "Second", "epseason": 1, "epnumber": 2, "airdate": "20xx-01-08"}
            ],
            "nextAirdate": "2099-01-01",
            "lastFetch": "2024-06-01"
        }
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn decodes_stored_show() {
        let library = deserialize_library(SINGLE_SHOW).unwrap();
        let record = library.get("329").unwrap();
        assert_eq!(record.id, "329");
        assert_eq!(record.name, "Shark Tank");
        assert_eq!(record.next_airdate, NextAirdate::Date(date(2099, 1, 1)));
        assert_eq!(record.last_fetch, date(2024, 6, 1));
        assert_eq!(record.episodes[0], Episode {
            id: 1,
            name: "Pilot".to_string(),
            season: 1,
            number: Some(1),
            airdate: Airdate::Known(date(2099, 1, 1)),
        });
        assert_eq!(record.episodes[1].airdate, Airdate::Unknown);
    }

    #[test]
    fn round_trip_keeps_every_record() {
        let library = deserialize_library(SINGLE_SHOW).unwrap();
        let data = serialize_library(&library).unwrap();
        assert!(data.contains("\"nextAirdate\": \"2099-01-01\""));
        let reloaded = deserialize_library(data.as_str()).unwrap();
        assert_eq!(reloaded, library);
    }

    #[test]
    fn not_available_and_missing_next_airdate_decode_the_same() {
        let data = r#"{
            "82": {"name": "A", "premiereDate": "2011", "episodes": [], "nextAirdate": "n/a", "lastFetch": "2024-06-01"},
            "83": {"name": "B", "premiereDate": "2011", "episodes": [], "nextAirdate": null, "lastFetch": "2024-06-01"},
            "84": {"name": "C", "premiereDate": "2011", "episodes": [], "lastFetch": "2024-06-01"}
        }"#;
        let library = deserialize_library(data).unwrap();
        assert_eq!(library.len(), 3);
        assert!(library.iter().all(|record| record.next_airdate == NextAirdate::NotAvailable));
        assert!(library.schedule_view().is_empty());
        let data = serialize_library(&library).unwrap();
        assert_eq!(data.matches("\"n/a\"").count(), 3);
    }

    #[test]
    fn empty_input_is_an_empty_library() {
        assert!(deserialize_library("").unwrap().is_empty());
        assert!(deserialize_library("  \n").unwrap().is_empty());
    }

    #[test]
    fn non_mapping_input_is_rejected() {
        assert!(matches!(deserialize_library("[1, 2, 3]"), Err(SnapshotError::NotAMapping)));
        assert!(matches!(deserialize_library("\"shows\""), Err(SnapshotError::NotAMapping)));
        assert!(matches!(deserialize_library("{\"329\": {\"name\": "), Err(SnapshotError::JsonDecode(_))));
    }

    #[tokio::test]
    async fn load_recovers_from_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(load_library(&missing).await.is_empty());

        let corrupt = dir.path().join("corrupt.json");
        tokio::fs::write(&corrupt, "{\"329\": {\"name\": \"Shark").await.unwrap();
        assert!(load_library(&corrupt).await.is_empty());

        let list = dir.path().join("list.json");
        tokio::fs::write(&list, "[]").await.unwrap();
        assert!(load_library(&list).await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved_tv_shows.json");
        let library = deserialize_library(SINGLE_SHOW).unwrap();
        save_library(&path, &library).await.unwrap();
        assert_eq!(load_library(&path).await, library);
    }

    #[tokio::test]
    async fn save_to_missing_directory_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("saved_tv_shows.json");
        let res = save_library(&path, &Library::new()).await;
        assert!(matches!(res, Err(SnapshotError::Io(_))));
    }
}
