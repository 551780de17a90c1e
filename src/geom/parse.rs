use crate::util::error::OlcError;
use geo_types::Geometry;
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
/// The result can be handed to `PlusCode::from_geometry`.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, OlcError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
///
/// Accepts a bare geometry or a single feature.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, OlcError> {
    let geometry = match s.parse::<GeoJson>().map_err(parse_error)? {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature
            .geometry
            .ok_or_else(|| parse_error("Feature has no geometry"))?,
        GeoJson::FeatureCollection(_) => {
            return Err(parse_error(
                "FeatureCollection not supported, encode features one at a time",
            ));
        }
    };
    Geometry::try_from(geometry).map_err(parse_error)
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, OlcError> {
    let wkt = Wkt::<f64>::from_str(s).map_err(parse_error)?;
    wkt.try_into()
        .map_err(|_| parse_error("Failed to convert WKT to geometry"))
}

fn parse_error(e: impl ToString) -> OlcError {
    OlcError::GeometryParseError(e.to_string())
}
