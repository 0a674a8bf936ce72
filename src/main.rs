mod config;
mod constants;
mod error;
mod formatters;
mod models;
mod service;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::formatters::{format_url, mask_auth_key};
use crate::service::Fetcher;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the response body, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kma_sfctm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let params = config::load_params().context("Invalid query parameters")?;
    let style = config::load_url_style().context("Invalid URL style")?;
    let url = format_url(&params, style).context("Failed to build request URL")?;

    tracing::info!(
        station = %params.station_id,
        tm1 = %params.start_timestamp,
        tm2 = %params.end_timestamp,
        %style,
        "Fetching surface observations"
    );
    tracing::debug!(url = %mask_auth_key(&url, &params.auth_key), "Request URL");

    let fetcher = Fetcher::new()?;
    let mut stdout = std::io::stdout().lock();
    let written = fetcher
        .fetch_to(&url, &mut stdout)
        .await
        .context("Failed to fetch surface observations")?;

    tracing::info!(bytes = written, "Response written to stdout");
    Ok(())
}
