pub mod aggregate;
pub mod omdb;
pub mod provider;
pub mod tmdb;
pub mod youtube;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("YouTube API quota exceeded")]
    QuotaExceeded,
    #[error("network error: {0}")]
    Network(String),
    #[error("provider error: {0}")]
    Provider(String),
}

impl From<reqwest::Error> for MetadataError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}
