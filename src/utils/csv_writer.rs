use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::predictors::ground_track::GroundTrackSample;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes samples to `path`, replacing any existing file.
/// The header (`time,lat,lon,alt`) is taken from the sample's field names.
pub fn write_samples(path: &Path, samples: &[GroundTrackSample]) -> Result<(), CsvError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for sample in samples {
        wtr.serialize(sample)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = samples.len(), "Wrote ground track");
    Ok(())
}
