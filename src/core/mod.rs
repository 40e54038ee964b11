pub mod orbit;
pub mod tle;
