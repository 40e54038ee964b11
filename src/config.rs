//! Fixed parameters of the fixture. None of these are configurable at runtime.

pub const STATIONS_TLE_URL: &str =
    "https://celestrak.org/NORAD/elements/gp.php?GROUP=stations&format=tle";

pub const SATELLITE_NAME: &str = "ISS (ZARYA)";

pub const OUTPUT_PATH: &str = "iss.csv";

pub const SAMPLE_COUNT: usize = 60;
pub const STEP_SECONDS: i64 = 60;
/// How far before "now" the first sample lies.
pub const LOOKBACK_SECONDS: i64 = 60 * 60;
