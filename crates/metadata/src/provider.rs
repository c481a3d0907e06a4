use cinepulse_core::{MovieDetails, PopularMovie, RatingsRecord, VideoStat};

use crate::MetadataError;
use crate::omdb::parse_ratings_record;

/// Video platform search and per-video statistics.
#[async_trait::async_trait]
pub trait VideoStatsProvider: Send + Sync {
    /// Search for up to three videos matching `title`.
    ///
    /// Fails with [`MetadataError::QuotaExceeded`] when the platform rejects
    /// the key for quota reasons. Any other unsuccessful status yields an
    /// empty list.
    async fn search_by_title(&self, title: &str) -> Result<Vec<String>, MetadataError>;

    /// Statistics for one video. An unsuccessful status yields an empty entry.
    async fn fetch_stats(&self, video_id: &str) -> Result<VideoStat, MetadataError>;
}

/// Film catalog with popularity ranking and credits.
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// The first three entries of the popularity ranking. An unsuccessful
    /// status yields an empty list; a transport failure is an error.
    async fn fetch_popular(&self) -> Result<Vec<PopularMovie>, MetadataError>;

    /// Full details with credits, or `None` when the catalog does not answer
    /// successfully.
    async fn fetch_details_with_credits(
        &self,
        catalog_id: &str,
    ) -> Result<Option<MovieDetails>, MetadataError>;
}

/// Crowd-sourced ratings looked up by exact title.
#[async_trait::async_trait]
pub trait RatingsProvider: Send + Sync {
    /// Raw response body for `title`, or `None` on an unsuccessful status or
    /// a body that is not JSON.
    async fn lookup(&self, title: &str) -> Result<Option<serde_json::Value>, MetadataError>;

    /// Ratings for `title`, or `None` when the provider has no match.
    async fn get_movie_info(&self, title: &str) -> Result<Option<RatingsRecord>, MetadataError> {
        Ok(self
            .lookup(title)
            .await?
            .and_then(|data| parse_ratings_record(&data)))
    }
}
