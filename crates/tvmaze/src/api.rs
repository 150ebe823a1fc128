use url;
use reqwest;
use serde;
use serde_json;
use std::sync::Arc;
use thiserror;
use tracing;

use crate::models::{Show, SearchResult};

pub const DEFAULT_BASE_URL: &str = "http://api.tvmaze.com";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failure: {}", .0)]
    RequestFailure(reqwest::Error),
    #[error("unexpected response: code={} body={}", .0, .1)]
    UnexpectedResponse(reqwest::StatusCode, String),
    #[error("json decode error: {}", .0)]
    JsonDecode(serde_json::Error),
    #[error("invalid url '{}': {}", .0, .1)]
    InvalidUrl(String, url::ParseError),
}

pub struct Session {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl Session {
    pub fn new(client: Arc<reqwest::Client>, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn get_base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

impl Session {
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: url::Url) -> Result<T, ApiError> {
        tracing::debug!(url = url.as_str(), "tvmaze request");
        let res = self.client
            .get(url)
            .send()
            .await
            .map_err(ApiError::RequestFailure)?;

        let status = res.status();
        let body = res.text().await.map_err(ApiError::RequestFailure)?;
        if !status.is_success() {
            return Err(ApiError::UnexpectedResponse(status, body));
        };

        serde_json::from_str(body.as_str()).map_err(ApiError::JsonDecode)
    }

    pub async fn search_shows(&self, term: &str) -> Result<Vec<SearchResult>, ApiError> {
        let base_url = format!("{}/search/shows", self.base_url);
        let params = [("q", term)];
        let full_url = url::Url::parse_with_params(base_url.as_str(), &params)
            .map_err(|err| ApiError::InvalidUrl(base_url.clone(), err))?;
        self.get_json(full_url).await
    }

    pub async fn get_show_with_episodes(&self, id: &str) -> Result<Show, ApiError> {
        let base_url = format!("{}/shows/{}", self.base_url, id);
        let params = [("embed", "episodes")];
        let full_url = url::Url::parse_with_params(base_url.as_str(), &params)
            .map_err(|err| ApiError::InvalidUrl(base_url.clone(), err))?;
        self.get_json(full_url).await
    }
}
