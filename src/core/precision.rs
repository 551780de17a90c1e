//! Conversion between degrees and the integer units digits are extracted from.
//!
//! Working in integers keeps cell boundaries exact: a point on an edge always
//! lands in the cell whose low corner is that edge, and decoded corners are
//! a single correctly-rounded division away from the exact value.

use crate::core::constants::{
    LAT_INTEGER_MULTIPLIER, LATITUDE_MAX, LNG_INTEGER_MULTIPLIER, LONGITUDE_MAX,
};

const LAT_UNITS_OFFSET: i64 = LATITUDE_MAX as i64 * LAT_INTEGER_MULTIPLIER;
const LNG_UNITS_OFFSET: i64 = LONGITUDE_MAX as i64 * LNG_INTEGER_MULTIPLIER;

/// Converts a latitude into full-precision units, shifted into `[0, 180)` degrees.
pub fn latitude_to_units(latitude: f64) -> i64 {
    let units = to_units(latitude, LAT_INTEGER_MULTIPLIER) + LAT_UNITS_OFFSET;
    units.clamp(0, 2 * LAT_UNITS_OFFSET - 1)
}

/// Converts a longitude into full-precision units, shifted and wrapped into
/// `[0, 360)` degrees.
pub fn longitude_to_units(longitude: f64) -> i64 {
    let units = to_units(longitude, LNG_INTEGER_MULTIPLIER) + LNG_UNITS_OFFSET;
    units.rem_euclid(2 * LNG_UNITS_OFFSET)
}

/// Converts shifted latitude units back to degrees.
pub fn units_to_latitude(units: i64) -> f64 {
    (units - LAT_UNITS_OFFSET) as f64 / LAT_INTEGER_MULTIPLIER as f64
}

/// Converts shifted longitude units back to degrees.
pub fn units_to_longitude(units: i64) -> f64 {
    (units - LNG_UNITS_OFFSET) as f64 / LNG_INTEGER_MULTIPLIER as f64
}

// Rounding to six decimals of a unit first absorbs representation error such
// as 0.1 * multiplier landing just below a whole unit.
fn to_units(degrees: f64, multiplier: i64) -> i64 {
    ((degrees * multiplier as f64 * 1e6).round() / 1e6).floor() as i64
}
