use serde::{Deserialize, Serialize};

/// Diagnostic shown in place of video statistics when the video provider
/// cannot be used for a movie.
pub const NO_VIDEO_RESULTS: &str = "No Youtube results available (Youtube API quota reached, try using a new key). No information Available.";

/// Placeholder used by the ratings provider for fields it did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// Entry of the catalog's popularity ranking. Only used to drive the
/// per-movie detail fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularMovie {
    pub catalog_id: String,
    pub title: String,
}

/// Catalog details with credits for a single movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    pub average_rating: f64,
    pub rating_count: u64,
    pub director: Option<String>,
    pub lead_actor: Option<String>,
    /// Production budget in USD, 0 when the catalog does not know it.
    pub budget: u64,
}

/// Crowd-sourced review aggregate from the ratings provider.
///
/// Counts are kept exactly as the provider formats them (`"1,234"`, `"8.5"`)
/// and fall back to `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingsRecord {
    pub director: String,
    pub lead_actor: String,
    pub review_count: String,
    pub average_review: String,
}

impl Default for RatingsRecord {
    fn default() -> Self {
        Self {
            director: NOT_AVAILABLE.to_string(),
            lead_actor: NOT_AVAILABLE.to_string(),
            review_count: NOT_AVAILABLE.to_string(),
            average_review: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Statistics for one video returned by the video provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub channel_name: String,
    pub video_title: String,
    pub views: u64,
    pub likes: u64,
}

/// A video statistics entry, or the sentinel recorded when the provider
/// could not be queried for this movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoStat {
    Video(VideoSummary),
    Unavailable { error: String },
}

impl VideoStat {
    pub fn unavailable() -> Self {
        Self::Unavailable {
            error: NO_VIDEO_RESULTS.to_string(),
        }
    }

    pub fn summary(&self) -> Option<&VideoSummary> {
        match self {
            Self::Video(summary) => Some(summary),
            Self::Unavailable { .. } => None,
        }
    }
}

impl From<VideoSummary> for VideoStat {
    fn from(summary: VideoSummary) -> Self {
        Self::Video(summary)
    }
}

/// Merged view of one popular movie across the three providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedMovie {
    pub title: String,
    pub details: MovieDetails,
    pub ratings: Option<RatingsRecord>,
    pub videos: Vec<VideoStat>,
}
