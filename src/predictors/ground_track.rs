use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sgp4::Elements;
use thiserror::Error;
use tracing::debug;

use crate::config::{LOOKBACK_SECONDS, SAMPLE_COUNT, STEP_SECONDS};
use crate::core::orbit::subpoint;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("propagation error: {0}")]
    Sgp4(#[from] sgp4::Error),
}

/// One row of the ground track. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundTrackSample {
    /// Unix seconds, floored.
    pub time: i64,
    pub lat: f64,
    pub lon: f64,
    /// Meters above the WGS84 ellipsoid.
    pub alt: f64,
}

/// Sampling instants: `SAMPLE_COUNT` steps of `STEP_SECONDS`, starting
/// `LOOKBACK_SECONDS` before `now`.
pub fn sample_times(now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let start = now - Duration::seconds(LOOKBACK_SECONDS);
    (0..SAMPLE_COUNT as i64)
        .map(|i| start + Duration::seconds(i * STEP_SECONDS))
        .collect()
}

/// Sub-satellite track over the hour before `now`, in chronological order.
pub fn ground_track(elements: &Elements, now: DateTime<Utc>) -> Result<Vec<GroundTrackSample>, TrackError> {
    let constants = sgp4::Constants::from_elements(elements)?;

    sample_times(now)
        .into_iter()
        .map(|t| {
            let g = subpoint(&constants, elements, t)?;
            debug!(time = %t.to_rfc3339(), lat = g.lat_deg, lon = g.lon_deg, alt_km = g.alt_km, "Sampled sub-point");
            Ok::<_, TrackError>(GroundTrackSample {
                time: t.timestamp(),
                lat: g.lat_deg,
                lon: g.lon_deg,
                alt: g.alt_km * 1000.0,
            })
        })
        .collect()
}
