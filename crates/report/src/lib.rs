pub mod config;
pub mod report;

use std::io::Write;

use anyhow::Context;
use cinepulse_metadata::aggregate::{AggregateError, Aggregator};
use cinepulse_metadata::omdb::OmdbClient;
use cinepulse_metadata::tmdb::TmdbClient;
use cinepulse_metadata::youtube::YoutubeClient;
use tracing::{info, warn};

use crate::config::AppConfig;

/// Wire the providers from `config`, run the aggregation once and write the
/// report to `out`.
///
/// An exhausted video quota is not an error: the diagnostic is written
/// instead of the report and the run ends successfully.
pub async fn run(config: &AppConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("failed to build HTTP client")?;

    let aggregator = Aggregator::new(
        YoutubeClient::new(config.youtube_api_key.clone(), http.clone())
            .with_base_url(&config.youtube_url),
        TmdbClient::new(config.tmdb_api_key.clone(), http.clone()).with_base_url(&config.tmdb_url),
        OmdbClient::new(config.imdb_api_key.clone(), http).with_base_url(&config.omdb_url),
    );

    let records = match aggregator.integrate_popular_movies().await {
        Ok(records) => records,
        Err(e @ AggregateError::QuotaExceeded) => {
            warn!("stopping early, video provider quota exhausted");
            writeln!(out, "{e}").context("failed to write diagnostic")?;
            return Ok(());
        }
        Err(e @ AggregateError::CatalogUnavailable(_)) => {
            return Err(e).context("error fetching most popular movies");
        }
    };

    info!(movies = records.len(), "aggregation complete");
    report::write_report(out, &records, chrono::Local::now()).context("failed to write report")
}
