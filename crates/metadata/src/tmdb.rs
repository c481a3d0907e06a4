//! TMDB (The Movie Database) catalog client.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs

use cinepulse_core::{MovieDetails, PopularMovie};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::MetadataError;
use crate::provider::CatalogProvider;

pub const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Number of popular movies processed per run.
pub const POPULAR_LIMIT: usize = 3;

pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
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

    /// GET a TMDB path. `Ok(None)` means TMDB answered with something other
    /// than 200.
    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<serde_json::Value>, MetadataError> {
        let mut all_params = vec![("api_key", self.api_key.as_str())];
        all_params.extend_from_slice(params);

        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "TMDB request");

        let resp = self.client.get(&url).query(&all_params).send().await?;

        if resp.status() != StatusCode::OK {
            warn!(url = %url, status = %resp.status(), "TMDB request unsuccessful");
            return Ok(None);
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|e| MetadataError::Provider(format!("parse JSON: {e}")))
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbClient {
    async fn fetch_popular(&self) -> Result<Vec<PopularMovie>, MetadataError> {
        let data = self
            .get_json("/movie/popular", &[("language", "en-US"), ("page", "1")])
            .await
            .inspect_err(|e| warn!(error = %e, "error fetching most popular movies"))?;

        Ok(data.map(|d| parse_popular(&d)).unwrap_or_default())
    }

    async fn fetch_details_with_credits(
        &self,
        catalog_id: &str,
    ) -> Result<Option<MovieDetails>, MetadataError> {
        let data = self
            .get_json(
                &format!("/movie/{catalog_id}"),
                &[("append_to_response", "credits")],
            )
            .await?;

        Ok(data.and_then(|d| parse_movie_details(&d)))
    }
}

fn parse_popular(data: &serde_json::Value) -> Vec<PopularMovie> {
    let results = data["results"].as_array().cloned().unwrap_or_default();

    results
        .iter()
        .take(POPULAR_LIMIT)
        .filter_map(|r| {
            Some(PopularMovie {
                catalog_id: catalog_id(&r["id"])?,
                title: r["title"].as_str().unwrap_or("Unknown").to_string(),
            })
        })
        .collect()
}

// TMDB ids are numeric, but accept strings too.
fn catalog_id(id: &serde_json::Value) -> Option<String> {
    id.as_u64()
        .map(|n| n.to_string())
        .or_else(|| id.as_str().map(|s| s.to_string()))
}

/// Details without a title are unusable for the cross-provider lookups and
/// are treated as absent.
fn parse_movie_details(data: &serde_json::Value) -> Option<MovieDetails> {
    let title = data["title"].as_str()?.to_string();
    let credits = &data["credits"];

    let director = credits["crew"].as_array().and_then(|crew| {
        crew.iter()
            .find(|person| person["job"].as_str() == Some("Director"))
            .and_then(|person| person["name"].as_str())
            .map(|s| s.to_string())
    });

    let lead_actor = credits["cast"].as_array().and_then(|cast| {
        cast.iter()
            .find(|person| person["order"].as_u64() == Some(0))
            .and_then(|person| person["name"].as_str())
            .map(|s| s.to_string())
    });

    Some(MovieDetails {
        title,
        average_rating: data["vote_average"].as_f64().unwrap_or(0.0),
        rating_count: data["vote_count"].as_u64().unwrap_or(0),
        director,
        lead_actor,
        budget: data["budget"].as_u64().unwrap_or(0),
    })
}
