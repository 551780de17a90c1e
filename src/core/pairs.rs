use crate::core::alphabet::{digit_char, digit_value};
use crate::core::constants::{
    ENCODING_BASE, PADDING_CHARACTER, PAIR_FIRST_PLACE_VALUE, SEPARATOR, SEPARATOR_POSITION,
};

const BASE: i64 = ENCODING_BASE as i64;

/// Encodes a location into a sequence of latitude/longitude digit pairs.
///
/// `lat_units` and `lng_units` are the location in pair units (1/8000 of a
/// degree), shifted into the positive range. Each pair narrows the area by a
/// factor of 20 in both directions, latitude digit first. The separator is
/// inserted after the eighth digit when more digits follow; shorter codes are
/// padded up to eight characters and terminated with the separator.
///
/// `code_length` must be at most 10; odd lengths emit the full final pair.
pub fn encode_pairs(lat_units: i64, lng_units: i64, code_length: usize) -> String {
    let mut code = String::with_capacity(SEPARATOR_POSITION + 3);

    let mut adjusted_latitude = lat_units;
    let mut adjusted_longitude = lng_units;
    let mut place_value = PAIR_FIRST_PLACE_VALUE;

    let mut digit_count = 0;
    while digit_count < code_length {
        let digit = adjusted_latitude / place_value;
        adjusted_latitude -= digit * place_value;
        code.push(digit_char(digit as usize));

        let digit = adjusted_longitude / place_value;
        adjusted_longitude -= digit * place_value;
        code.push(digit_char(digit as usize));

        digit_count += 2;
        place_value /= BASE;

        if digit_count == SEPARATOR_POSITION && digit_count < code_length {
            code.push(SEPARATOR);
        }
    }

    if code.len() < SEPARATOR_POSITION {
        let padding = SEPARATOR_POSITION - code.len();
        code.extend(std::iter::repeat_n(PADDING_CHARACTER, padding));
    }
    if code.len() == SEPARATOR_POSITION {
        code.push(SEPARATOR);
    }

    code
}

/// Decodes a code made up of lat/lng pairs.
///
/// `code` must already be stripped of separator and padding, upper-cased,
/// and at most 10 characters long. Returns
/// `((lat_lo, lat_hi), (lng_lo, lng_hi))` in shifted pair units. The same
/// preconditions as [`decode_pairs_sequence`] apply.
pub fn decode_pairs(code: &str) -> ((i64, i64), (i64, i64)) {
    (decode_pairs_sequence(code, 0), decode_pairs_sequence(code, 1))
}

/// Decodes either the latitude or the longitude half of a pair sequence.
///
/// Starting at `offset`, every second character is decoded. Returns the low
/// value and the low value plus the place value of the last position used,
/// both in shifted pair units.
///
/// # Preconditions
///
/// `code` must contain only alphabet characters. Anything else is read as
/// digit `2` (value 0) without an error; validate with
/// [`is_full`](crate::is_full) first, as [`decode`](crate::decode) does.
pub fn decode_pairs_sequence(code: &str, offset: usize) -> (i64, i64) {
    let mut value = 0;
    let mut place_value = PAIR_FIRST_PLACE_VALUE;
    let mut last_place_value = PAIR_FIRST_PLACE_VALUE;

    for byte in code.bytes().skip(offset).step_by(2) {
        if place_value == 0 {
            break;
        }
        value += digit_value(byte).unwrap_or(0) as i64 * place_value;
        last_place_value = place_value;
        place_value /= BASE;
    }

    (value, value + last_place_value)
}
