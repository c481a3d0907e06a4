use std::time::Duration;

use cinepulse_metadata::{omdb, tmdb, youtube};

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub youtube_api_key: String,
    pub tmdb_api_key: String,
    pub imdb_api_key: String,
    pub youtube_url: String,
    pub tmdb_url: String,
    pub omdb_url: String,
    pub request_timeout: Duration,
}

const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup; unset keys fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let timeout_secs = lookup("CINEPULSE_HTTP_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            youtube_api_key: var("YOUTUBE_API_KEY", "default_youtube_api_key"),
            tmdb_api_key: var("TMDB_API_KEY", "default_tmdb_api_key"),
            imdb_api_key: var("IMDB_API_KEY", "default_imdb_api_key"),
            youtube_url: var("CINEPULSE_YOUTUBE_URL", youtube::BASE_URL),
            tmdb_url: var("CINEPULSE_TMDB_URL", tmdb::BASE_URL),
            omdb_url: var("CINEPULSE_OMDB_URL", omdb::BASE_URL),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
