//! Merges the three providers into one record per popular movie.
//!
//! Movies are processed one after another, and within a movie the catalog,
//! ratings and video providers are queried in that order. Missing or failed
//! responses degrade to empty values, with two exceptions: a catalog that
//! cannot be reached at all, and an exhausted video quota. Both abort the
//! run without returning the records built so far.

use cinepulse_core::{IntegratedMovie, NO_VIDEO_RESULTS, PopularMovie, VideoStat};
use thiserror::Error;
use tracing::{info, warn};

use crate::MetadataError;
use crate::provider::{CatalogProvider, RatingsProvider, VideoStatsProvider};

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("{}", NO_VIDEO_RESULTS)]
    QuotaExceeded,
    #[error("Possible Network Error: {0}")]
    CatalogUnavailable(String),
}

pub struct Aggregator {
    videos: Box<dyn VideoStatsProvider>,
    catalog: Box<dyn CatalogProvider>,
    ratings: Box<dyn RatingsProvider>,
}

impl Aggregator {
    pub fn new(
        videos: impl VideoStatsProvider + 'static,
        catalog: impl CatalogProvider + 'static,
        ratings: impl RatingsProvider + 'static,
    ) -> Self {
        Self {
            videos: Box::new(videos),
            catalog: Box::new(catalog),
            ratings: Box::new(ratings),
        }
    }

    /// Build a merged record for each popular movie whose details resolve.
    pub async fn integrate_popular_movies(&self) -> Result<Vec<IntegratedMovie>, AggregateError> {
        let popular = self
            .catalog
            .fetch_popular()
            .await
            .map_err(|e| AggregateError::CatalogUnavailable(e.to_string()))?;

        let mut integrated = Vec::with_capacity(popular.len());
        for movie in &popular {
            if let Some(record) = self.integrate(movie).await? {
                info!(title = %record.title, videos = record.videos.len(), "integrated movie");
                integrated.push(record);
            }
        }

        Ok(integrated)
    }

    async fn integrate(
        &self,
        movie: &PopularMovie,
    ) -> Result<Option<IntegratedMovie>, AggregateError> {
        let details = match self
            .catalog
            .fetch_details_with_credits(&movie.catalog_id)
            .await
        {
            Ok(Some(details)) => details,
            Ok(None) => {
                warn!(catalog_id = %movie.catalog_id, "no catalog details, skipping movie");
                return Ok(None);
            }
            Err(e) => {
                warn!(catalog_id = %movie.catalog_id, error = %e, "catalog details failed, skipping movie");
                return Ok(None);
            }
        };

        // The catalog's own title drives the other lookups.
        let title = details.title.clone();

        let ratings = self.ratings.get_movie_info(&title).await.unwrap_or_else(|e| {
            warn!(title = %title, error = %e, "ratings lookup failed");
            None
        });

        let videos = self.video_stats(&title).await?;

        Ok(Some(IntegratedMovie {
            title,
            details,
            ratings,
            videos,
        }))
    }

    async fn video_stats(&self, title: &str) -> Result<Vec<VideoStat>, AggregateError> {
        match self.collect_video_stats(title).await {
            Ok(stats) => Ok(stats),
            Err(MetadataError::QuotaExceeded) => {
                warn!(title, "video provider quota exceeded, aborting run");
                Err(AggregateError::QuotaExceeded)
            }
            Err(e) => {
                warn!(title, error = %e, "video lookup failed");
                Ok(vec![VideoStat::unavailable()])
            }
        }
    }

    async fn collect_video_stats(&self, title: &str) -> Result<Vec<VideoStat>, MetadataError> {
        let ids = self.videos.search_by_title(title).await?;

        let mut stats = Vec::with_capacity(ids.len());
        for id in &ids {
            stats.push(self.videos.fetch_stats(id).await?);
        }
        Ok(stats)
    }
}
