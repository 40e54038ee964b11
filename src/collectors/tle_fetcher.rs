use thiserror::Error;
use tracing::info;

use crate::config::STATIONS_TLE_URL;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Fetches the space stations TLE group from Celestrak and returns the raw text.
pub async fn fetch_station_tles() -> Result<String, FetchError> {
    let client = reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;
    fetch_tles(&client, STATIONS_TLE_URL).await
}

/// GETs a TLE listing. Non-success HTTP statuses are reported as errors so an
/// error page never reaches the parser.
pub async fn fetch_tles(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    info!("Fetching TLE from {}", url);

    let resp = client.get(url).send().await?.error_for_status()?;

    let body = resp.text().await?;
    info!(bytes = body.len(), "Fetched TLE set");

    Ok(body)
}
