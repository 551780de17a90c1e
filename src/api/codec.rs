use crate::api::code_area::CodeArea;
use crate::core::constants::{
    ENCODING_BASE, GRID_LAT_STEPS, GRID_LNG_STEPS, GRID_ROWS, LATITUDE_MAX, MAX_DIGIT_COUNT,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
use crate::core::grid::{decode_grid, encode_grid};
use crate::core::pairs::{decode_pairs, encode_pairs};
use crate::core::precision::{
    latitude_to_units, longitude_to_units, units_to_latitude, units_to_longitude,
};
use crate::core::validation::is_full;
use crate::util::coord::{check_finite, clip_latitude, normalize_longitude};
use crate::util::error::OlcError;

/// Encodes a location into an Open Location Code.
///
/// `code_length` is the number of significant digits, not counting the
/// separator or padding. The default (10) gives a cell of roughly
/// 13.5 x 13.5 metres; every digit past that refines the cell with the
/// 4 x 5 grid. Latitude is clipped to [-90, 90] and longitude normalized to
/// [-180, 180).
///
/// Lengths above 15 are clamped to 15 and a length of 9 produces a 10 digit
/// code, since the pair phase always emits whole latitude/longitude pairs.
///
/// # Example
/// ```
/// use olc_rs::encode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
/// assert_eq!(encode(47.0000625, 8.0000625, 10)?, "8FVC2222+22");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidLength`] - `code_length` is below 2, or odd and below 8
/// - [`OlcError::NonFiniteCoordinate`] - latitude or longitude is NaN or infinite
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, OlcError> {
    if code_length < 2 || (code_length < SEPARATOR_POSITION && code_length % 2 == 1) {
        return Err(OlcError::InvalidLength(code_length));
    }
    check_finite(latitude, longitude)?;
    let code_length = effective_length(code_length);

    let mut latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    // The code for 90 degrees would decode above the pole, so step back by
    // one cell height.
    if latitude == LATITUDE_MAX {
        latitude -= compute_latitude_precision(code_length);
    }

    let lat_units = latitude_to_units(latitude);
    let lng_units = longitude_to_units(longitude);

    let mut code = encode_pairs(
        lat_units / GRID_LAT_STEPS,
        lng_units / GRID_LNG_STEPS,
        code_length.min(PAIR_CODE_LENGTH),
    );
    if code_length > PAIR_CODE_LENGTH {
        code.push_str(&encode_grid(
            lat_units % GRID_LAT_STEPS,
            lng_units % GRID_LNG_STEPS,
            code_length - PAIR_CODE_LENGTH,
        ));
    }

    Ok(code)
}

/// Decodes a full Open Location Code into the area it covers.
///
/// Digits past the fifteenth carry no further precision and are ignored, so
/// for longer codes [`CodeArea::code_length`] reports 15 rather than the
/// number of digits in the input.
///
/// # Example
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("8FVC2222+22")?;
/// assert!((area.lat_lo() - 47.0).abs() < 1e-9);
/// assert!((area.lng_hi() - 8.000125).abs() < 1e-9);
/// assert_eq!(area.code_length(), 10);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`OlcError::InvalidCode`] when the code is not a valid full code.
pub fn decode(code: &str) -> Result<CodeArea, OlcError> {
    if !is_full(code) {
        return Err(OlcError::InvalidCode(code.to_string()));
    }

    let digits: String = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .map(|c| c.to_ascii_uppercase())
        .take(MAX_DIGIT_COUNT)
        .collect();

    let split = digits.len().min(PAIR_CODE_LENGTH);
    let (pair_digits, grid_digits) = digits.split_at(split);

    let ((lat_lo, lat_hi), (lng_lo, lng_hi)) = decode_pairs(pair_digits);
    let mut lat_lo = lat_lo * GRID_LAT_STEPS;
    let mut lng_lo = lng_lo * GRID_LNG_STEPS;
    let mut lat_hi = lat_hi * GRID_LAT_STEPS;
    let mut lng_hi = lng_hi * GRID_LNG_STEPS;

    if !grid_digits.is_empty() {
        let (lat_offset, lng_offset, lat_span, lng_span) = decode_grid(grid_digits);
        lat_lo += lat_offset;
        lng_lo += lng_offset;
        lat_hi = lat_lo + lat_span;
        lng_hi = lng_lo + lng_span;
    }

    Ok(CodeArea::new(
        units_to_latitude(lat_lo),
        units_to_longitude(lng_lo),
        units_to_latitude(lat_hi),
        units_to_longitude(lng_hi),
        digits.len(),
    ))
}

/// Height in degrees of a cell at the given code length.
///
/// Lengths up to 10 have equal height and width; beyond that the grid has
/// more rows than columns, so latitude precision shrinks faster.
pub fn compute_latitude_precision(code_length: usize) -> f64 {
    let base = ENCODING_BASE as f64;
    if code_length <= PAIR_CODE_LENGTH {
        return base.powf((code_length as f64 / -2.0 + 2.0).floor());
    }
    base.powi(-3) / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
}

fn effective_length(code_length: usize) -> usize {
    let code_length = code_length.min(MAX_DIGIT_COUNT);
    if code_length < PAIR_CODE_LENGTH && code_length % 2 == 1 {
        code_length + 1
    } else {
        code_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.001,
            "expected {expected}, got {actual}"
        );
    }

    /// code, lat, lng, lat_lo, lng_lo, lat_hi, lng_hi
    const ENCODE_DECODE: &[(&str, f64, f64, f64, f64, f64, f64)] = &[
        ("7FG49Q00+", 20.375, 2.775, 20.35, 2.75, 20.4, 2.8),
        ("7FG49QCJ+2V", 20.3700625, 2.7821875, 20.37, 2.782125, 20.370125, 2.78225),
        ("7FG49QCJ+2VX", 20.3701125, 2.782234375, 20.3701, 2.78221875, 20.370125, 2.78225),
        (
            "7FG49QCJ+2VXGJ",
            20.3701135,
            2.78223535156,
            20.370113,
            2.782234375,
            20.370114,
            2.78223632813,
        ),
        ("8FVC2222+22", 47.0000625, 8.0000625, 47.0, 8.0, 47.000125, 8.000125),
        (
            "4VCPPQGP+Q9",
            -41.2730625,
            174.7859375,
            -41.273125,
            174.785875,
            -41.273,
            174.786,
        ),
        ("62G20000+", 0.5, -179.5, 0.0, -180.0, 1.0, -179.0),
        ("22220000+", -89.5, -179.5, -90.0, -180.0, -89.0, -179.0),
        ("7FG40000+", 20.5, 2.5, 20.0, 2.0, 21.0, 3.0),
        (
            "22222222+22",
            -89.9999375,
            -179.9999375,
            -90.0,
            -180.0,
            -89.999875,
            -179.999875,
        ),
        ("6VGX0000+", 0.5, 179.5, 0.0, 179.0, 1.0, 180.0),
        ("CFX30000+", 90.0, 1.0, 89.0, 1.0, 90.0, 2.0),
        ("CFX30000+", 92.0, 1.0, 89.0, 1.0, 90.0, 2.0),
        ("62H20000+", 1.0, 180.0, 1.0, -180.0, 2.0, -179.0),
        ("62H30000+", 1.0, 181.0, 1.0, -179.0, 2.0, -178.0),
    ];

    #[test]
    fn test_encode_decode_vectors() -> Result<(), OlcError> {
        for &(code, lat, lng, lat_lo, lng_lo, lat_hi, lng_hi) in ENCODE_DECODE {
            let area = decode(code)?;
            assert_eq!(encode(lat, lng, area.code_length())?, code, "encode {code}");

            assert_close(area.lat_lo(), lat_lo);
            assert_close(area.lng_lo(), lng_lo);
            assert_close(area.lat_hi(), lat_hi);
            assert_close(area.lng_hi(), lng_hi);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_lengths() {
        assert_eq!(encode(1.0, 1.0, 0), Err(OlcError::InvalidLength(0)));
        assert_eq!(encode(1.0, 1.0, 1), Err(OlcError::InvalidLength(1)));
        assert_eq!(encode(1.0, 1.0, 3), Err(OlcError::InvalidLength(3)));
        assert_eq!(encode(1.0, 1.0, 7), Err(OlcError::InvalidLength(7)));
    }

    #[test]
    fn test_length_nine_encodes_ten_digits() -> Result<(), OlcError> {
        let nine = encode(47.0000625, 8.0000625, 9)?;
        assert_eq!(nine, encode(47.0000625, 8.0000625, 10)?);
        assert_eq!(decode(&nine)?.code_length(), 10);
        Ok(())
    }

    #[test]
    fn test_long_lengths_are_clamped() -> Result<(), OlcError> {
        let code = encode(20.3701135, 2.78223535156, 20)?;
        assert_eq!(decode(&code)?.code_length(), MAX_DIGIT_COUNT);
        Ok(())
    }

    #[test]
    fn test_north_pole_round_trips() -> Result<(), OlcError> {
        let area = decode(&encode(90.0, 1.0, 10)?)?;
        assert!((area.lat_hi() - 90.0).abs() < 1e-9);
        assert!(area.lat_lo() < 90.0);
        Ok(())
    }

    #[test]
    fn test_longitude_is_normalized() -> Result<(), OlcError> {
        for length in [2, 4, 6, 8, 10, 11, 12] {
            assert_eq!(encode(1.0, 181.0, length)?, encode(1.0, -179.0, length)?);
        }
        Ok(())
    }

    #[test]
    fn test_huge_longitude_wraps() -> Result<(), OlcError> {
        let code = encode(1.0, 1e20, 10)?;
        let area = decode(&code)?;
        assert!(area.lng_lo() >= -180.0 && area.lng_hi() <= 180.0);
        assert_eq!(encode(1.0, 360.0 * 1e6 + 2.5, 4)?, encode(1.0, 2.5, 4)?);
        Ok(())
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        assert_eq!(
            encode(1.0, f64::INFINITY, 10),
            Err(OlcError::NonFiniteCoordinate)
        );
        assert_eq!(
            encode(f64::NAN, 1.0, 10),
            Err(OlcError::NonFiniteCoordinate)
        );
        assert_eq!(
            encode(f64::NEG_INFINITY, 1.0, 11),
            Err(OlcError::NonFiniteCoordinate)
        );
    }

    #[test]
    fn test_decode_reports_at_most_fifteen_digits() -> Result<(), OlcError> {
        let fifteen = decode("7FG49QCJ+2VXGJX")?;
        let sixteen = decode("7FG49QCJ+2VXGJX2")?;
        assert_eq!(sixteen.code_length(), MAX_DIGIT_COUNT);
        assert_eq!(sixteen, fifteen);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_non_full_codes() {
        for code in ["", "WC2345+G6", "8FWC2345+G", "GFX30000+"] {
            assert_eq!(decode(code), Err(OlcError::InvalidCode(code.to_string())));
        }
    }

    #[test]
    fn test_decode_is_case_insensitive() -> Result<(), OlcError> {
        assert_eq!(decode("8fvc2222+22")?, decode("8FVC2222+22")?);
        Ok(())
    }

    #[test]
    fn test_round_trip_contains_point() -> Result<(), OlcError> {
        let points = [
            (20.375, 2.775),
            (-41.2730625, 174.7859375),
            (51.3701125, -1.217765625),
            (-89.99, -179.99),
            (0.0, 0.0),
            (37.4219999, -122.0840575),
        ];
        for (lat, lng) in points {
            for length in [2, 4, 6, 8, 10, 11, 12, 13, 14, 15] {
                let code = encode(lat, lng, length)?;
                let area = decode(&code)?;
                assert_eq!(area.code_length(), length, "{code}");
                assert!(area.lat_lo() <= lat && lat <= area.lat_hi(), "{code} lat");
                assert!(area.lng_lo() <= lng && lng <= area.lng_hi(), "{code} lng");
            }
        }
        Ok(())
    }

    #[test]
    fn test_reencoding_center_reproduces_area() -> Result<(), OlcError> {
        for length in [4, 8, 10, 11, 13] {
            let area = decode(&encode(-33.8567844, 151.213108, length)?)?;
            let again = decode(&encode(area.lat_center(), area.lng_center(), length)?)?;
            assert!((area.lat_lo() - again.lat_lo()).abs() < 1e-9);
            assert!((area.lng_lo() - again.lng_lo()).abs() < 1e-9);
            assert!((area.lat_hi() - again.lat_hi()).abs() < 1e-9);
            assert!((area.lng_hi() - again.lng_hi()).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_latitude_precision() {
        assert_eq!(compute_latitude_precision(2), 20.0);
        assert_eq!(compute_latitude_precision(4), 1.0);
        assert!((compute_latitude_precision(10) - 0.000125).abs() < 1e-15);
        assert!((compute_latitude_precision(11) - 0.000025).abs() < 1e-15);
    }
}
