mod utils;
mod collectors;
mod config;
mod core;
mod predictors;

use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::collectors::tle_fetcher::FetchError;
use crate::core::tle::TleParseError;
use crate::predictors::ground_track::TrackError;
use crate::utils::csv_writer::CsvError;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Tle(#[from] TleParseError),
    #[error(transparent)]
    Track(#[from] TrackError),
    #[error(transparent)]
    Csv(#[from] CsvError),
}

/// Selects the satellite from `tle_text`, samples its ground track over the hour
/// before `now` and writes it to `out`. The file is only touched once every
/// sample has been computed.
fn generate_fixture(tle_text: &str, now: DateTime<Utc>, out: &Path) -> Result<(), AppError> {
    let elements = core::tle::parse_tle_text(tle_text)?;
    let by_name = core::tle::index_by_name(elements);
    let sat = core::tle::select_by_name(&by_name, config::SATELLITE_NAME)?;
    info!(
        norad = sat.norad_id,
        name = config::SATELLITE_NAME,
        epoch = %sat.datetime,
        "Selected satellite"
    );

    let track = predictors::ground_track::ground_track(sat, now)?;
    utils::csv_writer::write_samples(out, &track)?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let tle_text = collectors::tle_fetcher::fetch_station_tles().await?;
    generate_fixture(&tle_text, Utc::now(), Path::new(config::OUTPUT_PATH))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    utils::logging::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Failed to generate ground track fixture");
        std::process::exit(1);
    }
}
