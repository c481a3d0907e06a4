pub mod analysis;
pub mod types;

pub use analysis::EngagementMetrics;
pub use types::{
    IntegratedMovie, MovieDetails, NO_VIDEO_RESULTS, PopularMovie, RatingsRecord, VideoStat,
    VideoSummary,
};
