//! # olc-rs
//!
//! Open Location Codes ("plus codes"): short, alphanumeric names for areas
//! on the globe, derived from WGS84 latitude and longitude.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - Encode, Decode, Shorten, Recover
//!
//! ```
//! use olc_rs::{decode, encode, recover_nearest, shorten};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let code = encode(51.3701125, -1.217765625, 11)?;
//! assert_eq!(code, "9C3W9QCJ+2VX");
//!
//! let area = decode(&code)?;
//! println!("{} {}", area.lat_center(), area.lng_center());
//!
//! let short = shorten(&code, 51.3708675, -1.217765625)?;
//! assert_eq!(short, "CJ+2VX");
//! assert_eq!(recover_nearest(&short, 51.3708675, -1.217765625)?, code);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PlusCode` - A Code and its Area
//!
//! ```
//! use olc_rs::PlusCode;
//! use geo_types::point;
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let pt = point! { x: 2.775, y: 20.375 };
//! let code = PlusCode::from_wgs84(&pt, 6)?;
//! assert_eq!(code.code, "7FG49Q00+");
//! let polygon = code.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `encode_batch` / `decode_batch` - Many Locations at Once
//!
//! Runs on rayon's global thread pool:
//!
//! ```
//! use olc_rs::{decode_batch, encode_batch};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let codes = encode_batch(&[(-1.217765625, 51.3701125), (8.0000625, 47.0000625)], 10)?;
//! let areas = decode_batch(&codes)?;
//! assert_eq!(areas.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Geometries in WKT or GeoJSON can be parsed with [`parse_geometry`] and
//! coded by their centroid with [`PlusCode::from_geometry`]; areas render back
//! with [`CodeArea::to_geometry_string`].

pub mod api;
pub mod core;
pub mod geom;
pub mod util;

pub use api::{
    CodeArea, PlusCode, PlusCodeBuilder, compute_latitude_precision, decode, decode_batch, encode,
    encode_batch, recover_nearest, shorten,
};
pub use core::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES,
    LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER,
    PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION, is_full, is_short,
    is_valid,
};
pub use geom::{GeometryFormat, parse_geojson, parse_geometry, parse_wkt};
pub use util::{Coordinate, OlcError, clip_latitude, normalize_longitude};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{point, polygon};

    #[test]
    fn test_validity_vectors() {
        assert!(!is_valid(""));
        assert!(!is_valid("Q"));
        assert!(is_valid("8FWC2345+G6"));
        assert!(is_full("8FWC2345+G6"));
        assert!(is_valid("WC2345+G6"));
        assert!(is_short("WC2345+G6"));
        assert!(!is_full("WC2345+G6"));
        assert!(!is_valid("8FWC2345+G"));
        assert!(!is_valid("QQ00000+"));
    }

    #[test]
    fn test_encode_decode_vector() -> Result<(), OlcError> {
        let code = encode(20.375, 2.775, 6)?;
        assert_eq!(code, "7FG49Q00+");

        let area = decode(&code)?;
        assert!((area.lat_lo() - 20.35).abs() < 1e-9);
        assert!((area.lng_lo() - 2.75).abs() < 1e-9);
        assert!((area.lat_hi() - 20.4).abs() < 1e-9);
        assert!((area.lng_hi() - 2.8).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_end_to_end_workflow() -> Result<(), OlcError> {
        let reference = point! { x: -1.217765625, y: 51.3701125 };

        let code = PlusCode::builder().code_length(11).wgs84(&reference).build()?;
        assert_eq!(code.code, "9C3W9QCJ+2VX");
        assert!(code.contains(&reference));

        let short = code.shorten(&point! { x: -1.217765625, y: 51.3852125 })?;
        assert_eq!(short, "9QCJ+2VX");

        let recovered = PlusCode::recover(&short, &(-1.217765625, 51.3852125))?;
        assert_eq!(recovered, code);

        let polygon = recovered.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_round_trip_all_lengths() -> Result<(), OlcError> {
        let locations = [
            (0.0, 0.0),
            (51.3701125, -1.217765625),
            (-41.2730625, 174.7859375),
            (89.9999, -179.9999),
            (-90.0, 179.5),
            (90.0, 1.0),
        ];
        for (lat, lng) in locations {
            for length in [2, 4, 6, 8, 10, 11, 12, 13, 14, 15] {
                let area = decode(&encode(lat, lng, length)?)?;
                assert_eq!(area.code_length(), length);
                assert!(
                    area.contains(&(normalize_longitude(lng), clip_latitude(lat))),
                    "({lat}, {lng}) at {length}"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_pole_and_antimeridian() -> Result<(), OlcError> {
        let area = decode(&encode(90.0, 1.0, 10)?)?;
        assert!((area.lat_hi() - 90.0).abs() < 1e-9);

        for length in [4, 10, 13] {
            assert_eq!(encode(1.0, 181.0, length)?, encode(1.0, -179.0, length)?);
        }
        Ok(())
    }

    #[test]
    fn test_geometry_workflow() -> Result<(), OlcError> {
        let geometry = parse_geometry(r#"{"type":"Point","coordinates":[8.0000625,47.0000625]}"#)?;
        let code = PlusCode::from_geometry(&geometry, 10)?;
        assert_eq!(code.code, "8FVC2222+22");

        let wkt = code.area.to_geometry_string(GeometryFormat::Wkt);
        let parsed = parse_geometry(&wkt)?;
        assert_eq!(PlusCode::from_geometry(&parsed, 10)?, code);
        Ok(())
    }

    #[test]
    fn test_using_geo_types_macros() -> Result<(), OlcError> {
        let square = polygon![
            (x: 8.0, y: 47.0),
            (x: 8.000125, y: 47.0),
            (x: 8.000125, y: 47.000125),
            (x: 8.0, y: 47.000125),
        ];
        let code = PlusCode::from_geometry(&square.into(), 10)?;
        assert_eq!(code.code, "8FVC2222+22");
        Ok(())
    }
}
