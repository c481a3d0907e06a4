//! OMDb ratings client.

use cinepulse_core::RatingsRecord;
use cinepulse_core::types::NOT_AVAILABLE;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::MetadataError;
use crate::provider::RatingsProvider;

pub const BASE_URL: &str = "http://www.omdbapi.com";

pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    pub fn new(api_key: String, client: reqwest::Client) -> Self {
        Self {
            api_key,
            base_url: BASE_URL.to_string(),
            client,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait::async_trait]
impl RatingsProvider for OmdbClient {
    async fn lookup(&self, title: &str) -> Result<Option<serde_json::Value>, MetadataError> {
        let url = format!("{}/", self.base_url);
        debug!(url = %url, title, "OMDb request");

        let resp = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            warn!(title, status = %resp.status(), "OMDb request unsuccessful");
            return Ok(None);
        }

        let body = resp.bytes().await?;
        match serde_json::from_slice(&body) {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                warn!(title, error = %e, "OMDb returned a non-JSON body");
                Ok(None)
            }
        }
    }
}

/// Extracts ratings from an OMDb body. Returns `None` unless the body
/// reports a match (`"Response": "True"`).
pub fn parse_ratings_record(data: &serde_json::Value) -> Option<RatingsRecord> {
    if data["Response"].as_str() != Some("True") {
        return None;
    }

    let field = |key: &str| {
        data[key]
            .as_str()
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    };

    let lead_actor = data["Actors"]
        .as_str()
        .and_then(|actors| actors.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    Some(RatingsRecord {
        director: field("Director"),
        lead_actor,
        review_count: field("imdbVotes"),
        average_review: field("imdbRating"),
    })
}
