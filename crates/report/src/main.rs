use anyhow::Context;
use cinepulse_report::config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, the report owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    info!(
        tmdb = %config.tmdb_url,
        youtube = %config.youtube_url,
        omdb = %config.omdb_url,
        timeout_secs = config.request_timeout.as_secs(),
        "starting movie report"
    );

    let mut stdout = std::io::stdout().lock();
    cinepulse_report::run(&config, &mut stdout)
        .await
        .context("movie report failed")
}
