use serde;
use serde_json;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror;
use tokio;
use tvmaze::api::DEFAULT_BASE_URL;

pub const CONFIG_FILENAME: &str = "tracker_config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load config from file: {}", .0)]
    Io(std::io::Error),
    #[error("json decode on config: {}", .0)]
    JsonDecode(serde_json::Error),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    pub api_url: String,
    pub snapshot_path: PathBuf,
    pub request_timeout_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            snapshot_path: PathBuf::from("saved_tv_shows.json"),
            request_timeout_secs: 10,
        }
    }
}

impl TrackerConfig {
    /// A missing config file yields the defaults.
    pub async fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let path = config_path.join(CONFIG_FILENAME);
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(ConfigError::Io(err)),
        };
        serde_json::from_str(data.as_str()).map_err(ConfigError::JsonDecode)
    }

    pub fn get_request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load(dir.path()).await.unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.api_url, "http://api.tvmaze.com");
    }

    #[tokio::test]
    async fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join(CONFIG_FILENAME), r#"{"request_timeout_secs": 3}"#).await.unwrap();
        let config = TrackerConfig::load(dir.path()).await.unwrap();
        assert_eq!(config.get_request_timeout(), Duration::from_secs(3));
        assert_eq!(config.snapshot_path, PathBuf::from("saved_tv_shows.json"));
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join(CONFIG_FILENAME), "{api_url").await.unwrap();
        let res = TrackerConfig::load(dir.path()).await;
        assert!(matches!(res, Err(ConfigError::JsonDecode(_))));
    }
}
