use crate::api::codec::{decode, encode};
use crate::core::constants::{
    DEFAULT_CODE_LENGTH, ENCODING_BASE, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER,
    PAIR_RESOLUTIONS, SEPARATOR_POSITION,
};
use crate::core::validation::{is_full, is_short, separator_index};
use crate::util::coord::{check_finite, clip_latitude, normalize_longitude};
use crate::util::error::OlcError;
use tracing::{debug, trace};

/// Share of a cell's resolution the reference may be away from the code
/// center and still allow trimming. Half a cell is the hard limit; 0.3 leaves
/// room for recovering with a slightly different reference.
const SHORTEN_SAFETY_FACTOR: f64 = 0.3;

/// Removes leading digits from a full code, relative to a reference location.
///
/// The closer the reference is to the code's center, the more digits can be
/// dropped: two, four or six pairs. If the reference is too far away to drop
/// anything, the (upper-cased) code is returned unchanged.
///
/// An 8-digit code whose center is very close to the reference loses all of
/// its digits and comes back as `"+"`. That cannot be recovered again; callers
/// that need a recoverable short form should keep at least two digits.
///
/// # Example
/// ```
/// use olc_rs::shorten;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625)?, "+2VX");
/// assert_eq!(shorten("9C3W9QCJ+2VX", 51.3852125, -1.217765625)?, "9QCJ+2VX");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] - the code is not a valid full code
/// - [`OlcError::PaddedCode`] - the code contains padding
/// - [`OlcError::TooShort`] - the code has fewer than 6 digits
/// - [`OlcError::NonFiniteCoordinate`] - the reference is NaN or infinite
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<String, OlcError> {
    if !is_full(code) {
        return Err(OlcError::InvalidCode(code.to_string()));
    }
    if code.contains(PADDING_CHARACTER) {
        return Err(OlcError::PaddedCode(code.to_string()));
    }

    let code = code.to_ascii_uppercase();
    let area = decode(&code)?;
    if area.code_length() < MIN_TRIMMABLE_CODE_LEN {
        return Err(OlcError::TooShort(area.code_length()));
    }

    check_finite(latitude, longitude)?;
    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    let range = (area.lat_center() - latitude)
        .abs()
        .max((area.lng_center() - longitude).abs());

    for i in (1..PAIR_RESOLUTIONS.len() - 1).rev() {
        if range < PAIR_RESOLUTIONS[i] * SHORTEN_SAFETY_FACTOR {
            let trimmed = (i + 1) * 2;
            trace!(code = %code, range, trimmed, "shortened code");
            return Ok(code[trimmed..].to_string());
        }
    }

    debug!(code = %code, range, "reference too far away to shorten code");
    Ok(code)
}

/// Recovers the nearest full code matching a short code.
///
/// The missing leading digits are taken from the reference location. The
/// result is the match nearest to the reference, which is not necessarily in
/// the same cell as the reference. Full codes are returned unchanged
/// (upper-cased).
///
/// # Example
/// ```
/// use olc_rs::recover_nearest;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let code = recover_nearest("9QCJ+2VX", 51.3852125, -1.217765625)?;
/// assert_eq!(code, "9C3W9QCJ+2VX");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] - the code is neither short nor full
/// - [`OlcError::NonFiniteCoordinate`] - a short code was given with a NaN or
///   infinite reference
pub fn recover_nearest(
    short_code: &str,
    reference_latitude: f64,
    reference_longitude: f64,
) -> Result<String, OlcError> {
    if !is_short(short_code) {
        if is_full(short_code) {
            return Ok(short_code.to_ascii_uppercase());
        }
        return Err(OlcError::InvalidCode(short_code.to_string()));
    }

    check_finite(reference_latitude, reference_longitude)?;
    let reference_latitude = clip_latitude(reference_latitude);
    let reference_longitude = normalize_longitude(reference_longitude);

    let short_code = short_code.to_ascii_uppercase();
    let separator = separator_index(short_code.as_bytes())
        .ok_or_else(|| OlcError::InvalidCode(short_code.clone()))?;

    let padding_length = SEPARATOR_POSITION - separator;
    // Height and width of the area the missing digits cover, in degrees.
    let resolution = (ENCODING_BASE as f64).powi(2 - (padding_length / 2) as i32);
    let half_cell = resolution / 2.0;

    let reference = encode(reference_latitude, reference_longitude, DEFAULT_CODE_LENGTH)?;
    let area = decode(&format!("{}{}", &reference[..padding_length], short_code))?;

    let mut latitude = area.lat_center();
    let mut longitude = area.lng_center();

    let lat_difference = latitude - reference_latitude;
    if lat_difference > half_cell {
        latitude -= resolution;
    } else if lat_difference < -half_cell {
        latitude += resolution;
    }

    let lng_difference = longitude - reference_longitude;
    if lng_difference > half_cell {
        longitude -= resolution;
    } else if lng_difference < -half_cell {
        longitude += resolution;
    }

    if latitude != area.lat_center() || longitude != area.lng_center() {
        debug!(
            code = %short_code,
            lat_difference,
            lng_difference,
            "nearest match is in a neighbouring cell"
        );
    }

    encode(latitude, longitude, area.code_length())
}
