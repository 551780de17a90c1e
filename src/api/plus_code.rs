use crate::api::code_area::CodeArea;
use crate::api::codec::{decode, encode};
use crate::api::shorten::{recover_nearest, shorten};
use crate::core::constants::DEFAULT_CODE_LENGTH;
use crate::util::coord::Coordinate;
use crate::util::error::OlcError;
use geo::Centroid;
use geo_types::{Geometry, Point, Polygon};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A full Open Location Code together with the area it decodes to.
///
/// # Example
///
/// ```
/// use olc_rs::PlusCode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// // Coordinates are (longitude, latitude)
/// let code = PlusCode::from_wgs84(&(8.0000625, 47.0000625), 10)?;
/// assert_eq!(code.code, "8FVC2222+22");
///
/// let polygon = code.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlusCode {
    /// The full code, upper-cased.
    pub code: String,
    /// Area covered by the code.
    pub area: CodeArea,
}

impl PlusCode {
    pub fn builder() -> PlusCodeBuilder {
        PlusCodeBuilder::new()
    }

    /// Encodes a WGS84 (lon/lat) coordinate at the given code length.
    ///
    /// # Example
    /// ```
    /// use olc_rs::PlusCode;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), olc_rs::OlcError> {
    /// // From tuple
    /// let code = PlusCode::from_wgs84(&(2.775, 20.375), 6)?;
    /// // From Point
    /// let same = PlusCode::from_wgs84(&Point::new(2.775, 20.375), 6)?;
    /// assert_eq!(code, same);
    /// assert_eq!(code.to_string(), "7FG49Q00+");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, code_length: usize) -> Result<Self, OlcError> {
        let code = encode(coord.y(), coord.x(), code_length)?;
        Self::from_code(&code)
    }

    /// Decodes a full code. Short codes need a reference, see [`PlusCode::recover`].
    pub fn from_code(code: &str) -> Result<Self, OlcError> {
        let area = decode(code)?;
        Ok(Self {
            code: code.to_ascii_uppercase(),
            area,
        })
    }

    /// Recovers the full code nearest to `reference` for a short code.
    ///
    /// # Example
    /// ```
    /// use olc_rs::PlusCode;
    ///
    /// # fn main() -> Result<(), olc_rs::OlcError> {
    /// let code = PlusCode::recover("9QCJ+2VX", &(-1.217765625, 51.3852125))?;
    /// assert_eq!(code.code, "9C3W9QCJ+2VX");
    /// # Ok(())
    /// # }
    /// ```
    pub fn recover(short_code: &str, reference: &impl Coordinate) -> Result<Self, OlcError> {
        let code = recover_nearest(short_code, reference.y(), reference.x())?;
        Self::from_code(&code)
    }

    /// Encodes the representative location of a geometry.
    ///
    /// Points are encoded as they are. Every other geometry is reduced to its
    /// centroid first, so a polygon is coded by its center of mass and a line
    /// by the midpoint of its length.
    pub fn from_geometry(geometry: &Geometry<f64>, code_length: usize) -> Result<Self, OlcError> {
        let point = match geometry {
            Geometry::Point(pt) => *pt,
            other => other.centroid().ok_or_else(|| {
                OlcError::GeometryParseError("Geometry is empty, no centroid".to_string())
            })?,
        };
        Self::from_wgs84(&point, code_length)
    }

    /// Shortens the code relative to a reference location.
    pub fn shorten(&self, reference: &impl Coordinate) -> Result<String, OlcError> {
        shorten(&self.code, reference.y(), reference.x())
    }

    /// Center of the area in WGS84 (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        self.area.center()
    }

    pub fn code_length(&self) -> usize {
        self.area.code_length()
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.area.to_polygon()
    }

    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.area.contains(coord)
    }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for PlusCode {
    type Err = OlcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Builder for [`PlusCode`]; the code length defaults to 10.
///
/// # Example
/// ```
/// use olc_rs::PlusCode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let code = PlusCode::builder()
///     .code_length(11)
///     .wgs84(&(-1.217765625, 51.3701125))
///     .build()?;
/// assert_eq!(code.code_length(), 11);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlusCodeBuilder {
    code_length: usize,
    longitude: Option<f64>,
    latitude: Option<f64>,
}

impl Default for PlusCodeBuilder {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            longitude: None,
            latitude: None,
        }
    }
}

impl PlusCodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    pub fn wgs84(mut self, coord: &impl Coordinate) -> Self {
        self.longitude = Some(coord.x());
        self.latitude = Some(coord.y());
        self
    }

    pub fn build(self) -> Result<PlusCode, OlcError> {
        let longitude = self.longitude.ok_or(OlcError::MissingCoordinate)?;
        let latitude = self.latitude.ok_or(OlcError::MissingCoordinate)?;
        PlusCode::from_wgs84(&(longitude, latitude), self.code_length)
    }
}
