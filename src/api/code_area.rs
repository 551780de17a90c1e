use crate::core::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use crate::util::coord::Coordinate;
use geo_types::{Point, Polygon, Rect, coord};
use serde::Serialize;

/// The area covered by a decoded code.
///
/// All values are WGS84 degrees. The center is computed once on construction
/// and capped at 90 / 180 so that a cell touching the pole or the antimeridian
/// still has an encodable center.
///
/// # Example
///
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("7FG49Q00+")?;
/// assert_eq!(area.code_length(), 6);
/// assert!((area.lat_lo() - 20.35).abs() < 1e-9);
/// assert!((area.lng_center() - 2.775).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeArea {
    lat_lo: f64,
    lng_lo: f64,
    lat_hi: f64,
    lng_hi: f64,
    lat_center: f64,
    lng_center: f64,
    code_length: usize,
}

impl CodeArea {
    pub fn new(lat_lo: f64, lng_lo: f64, lat_hi: f64, lng_hi: f64, code_length: usize) -> Self {
        Self {
            lat_lo,
            lng_lo,
            lat_hi,
            lng_hi,
            lat_center: (lat_lo + (lat_hi - lat_lo) / 2.0).min(LATITUDE_MAX),
            lng_center: (lng_lo + (lng_hi - lng_lo) / 2.0).min(LONGITUDE_MAX),
            code_length,
        }
    }

    /// Southern edge in degrees.
    pub fn lat_lo(&self) -> f64 {
        self.lat_lo
    }

    /// Western edge in degrees.
    pub fn lng_lo(&self) -> f64 {
        self.lng_lo
    }

    /// Northern edge in degrees.
    pub fn lat_hi(&self) -> f64 {
        self.lat_hi
    }

    /// Eastern edge in degrees.
    pub fn lng_hi(&self) -> f64 {
        self.lng_hi
    }

    pub fn lat_center(&self) -> f64 {
        self.lat_center
    }

    pub fn lng_center(&self) -> f64 {
        self.lng_center
    }

    /// Number of significant digits in the decoded code.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Center as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.lng_center, self.lat_center)
    }

    /// Bounding box as a `geo_types::Rect`.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.lng_lo, y: self.lat_lo },
            coord! { x: self.lng_hi, y: self.lat_hi },
        )
    }

    /// Bounding box as a closed polygon, suitable for GIS operations or
    /// GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Whether the coordinate lies inside the area, edges included.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        (self.lat_lo..=self.lat_hi).contains(&coord.y())
            && (self.lng_lo..=self.lng_hi).contains(&coord.x())
    }
}
