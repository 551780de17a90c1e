use crate::core::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use crate::util::error::OlcError;
use geo_types::{Coord, Point};

/// Trait for types that can provide WGS84 longitude/latitude.
///
/// Implemented for `(f64, f64)` tuples (lng, lat), `geo_types::Point<f64>`
/// and `geo_types::Coord<f64>`, following the x = longitude, y = latitude
/// convention of `geo-types`.
pub trait Coordinate {
    /// Returns the longitude in degrees.
    fn x(&self) -> f64;
    /// Returns the latitude in degrees.
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

/// Clips a latitude into the range -90 to 90.
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Normalizes a longitude into the range -180 to 180, not including 180.
///
/// Values already in range are returned untouched. Non-finite input gives NaN.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if (-LONGITUDE_MAX..LONGITUDE_MAX).contains(&longitude) {
        return longitude;
    }
    let wrapped = (longitude + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX) - LONGITUDE_MAX;
    // rem_euclid can round up to the divisor itself.
    if wrapped >= LONGITUDE_MAX {
        wrapped - 2.0 * LONGITUDE_MAX
    } else {
        wrapped
    }
}

/// Checks that both parts of a location are finite numbers.
pub fn check_finite(latitude: f64, longitude: f64) -> Result<(), OlcError> {
    if latitude.is_finite() && longitude.is_finite() {
        Ok(())
    } else {
        Err(OlcError::NonFiniteCoordinate)
    }
}
