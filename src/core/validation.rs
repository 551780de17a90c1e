//! Structural checks on candidate code strings.
//!
//! All checks work on raw bytes, so any non-ASCII input is simply invalid.

use crate::core::alphabet::{digit_value, is_alphabet_byte};
use crate::core::constants::{
    ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_BYTE, SEPARATOR_BYTE, SEPARATOR_POSITION,
};

/// Determines if a code is valid.
///
/// A valid code has exactly one separator, at an even position no later than
/// the eighth character. It may carry a single even-length run of padding
/// characters, in which case it must end with the separator. Every other
/// character must come from the code alphabet (either case).
///
/// # Example
/// ```
/// use olc_rs::is_valid;
///
/// assert!(is_valid("8FWC2345+G6"));
/// assert!(is_valid("8fwc2345+"));
/// assert!(!is_valid("8FWC2345+G"));
/// ```
pub fn is_valid(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.len() < 2 {
        return false;
    }

    let Some(separator) = separator_index(bytes) else {
        return false;
    };
    if bytes.iter().filter(|&&b| b == SEPARATOR_BYTE).count() > 1
        || separator > SEPARATOR_POSITION
        || separator % 2 == 1
    {
        return false;
    }

    if let Some(pad_start) = bytes.iter().position(|&b| b == PADDING_BYTE) {
        if pad_start == 0 {
            return false;
        }

        let pad_len = bytes[pad_start..]
            .iter()
            .take_while(|&&b| b == PADDING_BYTE)
            .count();
        let more_padding = bytes[pad_start + pad_len..].contains(&PADDING_BYTE);
        if more_padding || pad_len % 2 == 1 || pad_len > SEPARATOR_POSITION - 2 {
            return false;
        }

        if bytes.last() != Some(&SEPARATOR_BYTE) {
            return false;
        }
    }

    // A single digit after the separator is not legal.
    if bytes.len() - separator - 1 == 1 {
        return false;
    }

    let mut digits = bytes
        .iter()
        .filter(|&&b| b != SEPARATOR_BYTE && b != PADDING_BYTE)
        .peekable();
    if digits.peek().is_none() {
        return false;
    }
    digits.all(|&b| is_alphabet_byte(b))
}

/// Determines if a code is a valid short code.
///
/// A short code has had at least two leading digits removed, so its
/// separator sits before the eighth position.
pub fn is_short(code: &str) -> bool {
    if !is_valid(code) {
        return false;
    }
    separator_index(code.as_bytes()).is_some_and(|i| i < SEPARATOR_POSITION)
}

/// Determines if a code is a valid full code.
///
/// Beyond being valid and not short, the first latitude digit must not place
/// the area above 90 degrees and the first longitude digit must not place it
/// beyond 180 degrees.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }

    let bytes = code.as_bytes();
    let first_lat_value = leading_value(bytes[0]);
    if first_lat_value > LATITUDE_MAX * 2.0 {
        return false;
    }

    if bytes.len() > 1 {
        let first_lng_value = leading_value(bytes[1]);
        if first_lng_value > LONGITUDE_MAX * 2.0 {
            return false;
        }
    }
    true
}

/// Position of the first separator, if any.
pub(crate) fn separator_index(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| b == SEPARATOR_BYTE)
}

/// Degrees covered by a leading digit once shifted into the positive range.
fn leading_value(byte: u8) -> f64 {
    digit_value(byte).map_or(f64::INFINITY, |v| (v * ENCODING_BASE) as f64)
}
