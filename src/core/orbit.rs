use chrono::{DateTime, Utc};
use tracing::trace;

// WGS84
const WGS84_A_KM: f64 = 6378.137;
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// 2000-01-01T12:00:00Z in Unix milliseconds.
const J2000_UNIX_MS: i64 = 946_728_000_000;
const MS_PER_JULIAN_YEAR: f64 = 365.25 * 86_400_000.0;

/// Geodetic coordinates on the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub alt_km: f64,
}

pub fn minutes_since_elements_epoch(elements: &sgp4::Elements, t: DateTime<Utc>) -> f64 {
    let diff = t.naive_utc() - elements.datetime;
    diff.num_milliseconds() as f64 / 60_000.0
}

/// Propagate elements to an absolute UTC instant using SGP4.
pub fn propagate_at(
    constants: &sgp4::Constants,
    elements: &sgp4::Elements,
    t: DateTime<Utc>,
) -> Result<sgp4::Prediction, sgp4::Error> {
    let minutes = minutes_since_elements_epoch(elements, t);
    trace!(minutes, "Propagating elements");
    constants.propagate(minutes)
}

/// Julian years elapsed since J2000, the epoch unit sgp4's sidereal time expects.
pub fn julian_years_since_j2000(t: DateTime<Utc>) -> f64 {
    (t.timestamp_millis() - J2000_UNIX_MS) as f64 / MS_PER_JULIAN_YEAR
}

/// GMST (radians, in [0, 2π)) from the IAU-82 expression TEME is defined against.
/// UTC stands in for UT1.
pub fn gmst(t: DateTime<Utc>) -> f64 {
    sgp4::iau_epoch_to_sidereal_time(julian_years_since_j2000(t)).rem_euclid(std::f64::consts::TAU)
}

/// Rotate a TEME position about Z by GMST into the Earth-fixed frame.
pub fn teme_to_ecef(pos_km: &[f64; 3], gmst_rad: f64) -> [f64; 3] {
    let (sin_t, cos_t) = gmst_rad.sin_cos();
    [
        cos_t * pos_km[0] + sin_t * pos_km[1],
        -sin_t * pos_km[0] + cos_t * pos_km[1],
        pos_km[2],
    ]
}

/// ECEF (km) to WGS84 latitude, longitude and height above the ellipsoid.
/// Latitude uses Bowring's closed form; longitude is in (-180, 180].
pub fn ecef_to_geodetic(pos_km: &[f64; 3]) -> Geodetic {
    let [x, y, z] = *pos_km;
    let a = WGS84_A_KM;
    let b = a * (1.0 - WGS84_F);
    let e2 = WGS84_F * (2.0 - WGS84_F);
    let ep2 = (a * a - b * b) / (b * b);

    let p = (x * x + y * y).sqrt();
    let th = (a * z).atan2(b * p);
    let (sin_th, cos_th) = th.sin_cos();
    let lat = (z + ep2 * b * sin_th.powi(3)).atan2(p - e2 * a * cos_th.powi(3));
    let lon = y.atan2(x);

    let (sin_lat, cos_lat) = lat.sin_cos();
    let alt = p * cos_lat + z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt();

    Geodetic {
        lat_deg: lat.to_degrees(),
        lon_deg: lon.to_degrees(),
        alt_km: alt,
    }
}

/// Sub-satellite point at `t`.
pub fn subpoint(
    constants: &sgp4::Constants,
    elements: &sgp4::Elements,
    t: DateTime<Utc>,
) -> Result<Geodetic, sgp4::Error> {
    let pred = propagate_at(constants, elements, t)?;
    let ecef = teme_to_ecef(&pred.position, gmst(t));
    Ok(ecef_to_geodetic(&ecef))
}
