//! YouTube Data API v3 client.

use cinepulse_core::{VideoStat, VideoSummary};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::MetadataError;
use crate::provider::VideoStatsProvider;

pub const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Videos searched per movie.
pub const MAX_RESULTS: usize = 3;

pub struct YoutubeClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl YoutubeClient {
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

    async fn get(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<reqwest::Response, MetadataError> {
        let mut all_params = vec![("key", self.api_key.as_str())];
        all_params.extend_from_slice(params);

        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "YouTube request");

        Ok(self.client.get(&url).query(&all_params).send().await?)
    }
}

#[async_trait::async_trait]
impl VideoStatsProvider for YoutubeClient {
    async fn search_by_title(&self, title: &str) -> Result<Vec<String>, MetadataError> {
        let max_results = MAX_RESULTS.to_string();
        let resp = self
            .get(
                "/search",
                &[
                    ("q", title),
                    ("part", "snippet"),
                    ("type", "video"),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        match resp.status() {
            StatusCode::OK => {
                let data: serde_json::Value = resp
                    .json()
                    .await
                    .map_err(|e| MetadataError::Provider(format!("parse JSON: {e}")))?;
                Ok(parse_video_ids(&data))
            }
            StatusCode::FORBIDDEN => Err(MetadataError::QuotaExceeded),
            status => {
                warn!(title, %status, "YouTube search unsuccessful");
                Ok(Vec::new())
            }
        }
    }

    async fn fetch_stats(&self, video_id: &str) -> Result<VideoStat, MetadataError> {
        let resp = self
            .get("/videos", &[("id", video_id), ("part", "statistics,snippet")])
            .await?;

        if resp.status() != StatusCode::OK {
            warn!(video_id, status = %resp.status(), "YouTube statistics unsuccessful");
            return Ok(VideoSummary::default().into());
        }

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| MetadataError::Provider(format!("parse JSON: {e}")))?;

        Ok(parse_video_summary(&data).into())
    }
}

fn parse_video_ids(data: &serde_json::Value) -> Vec<String> {
    let items = data["items"].as_array().cloned().unwrap_or_default();

    items
        .iter()
        .take(MAX_RESULTS)
        .filter_map(|item| item["id"]["videoId"].as_str().map(|s| s.to_string()))
        .collect()
}

fn parse_video_summary(data: &serde_json::Value) -> VideoSummary {
    let item = &data["items"][0];
    let snippet = &item["snippet"];
    let stats = &item["statistics"];

    VideoSummary {
        channel_name: snippet["channelTitle"].as_str().unwrap_or("").to_string(),
        video_title: snippet["title"].as_str().unwrap_or("").to_string(),
        views: count(&stats["viewCount"]),
        likes: count(&stats["likeCount"]),
    }
}

// The API encodes counts as decimal strings.
fn count(value: &serde_json::Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
        .unwrap_or(0)
}
