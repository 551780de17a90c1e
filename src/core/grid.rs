use crate::core::alphabet::{digit_char, digit_value};
use crate::core::constants::{GRID_COLUMNS, GRID_LAT_STEPS, GRID_LNG_STEPS, GRID_ROWS};

const ROWS: i64 = GRID_ROWS as i64;
const COLUMNS: i64 = GRID_COLUMNS as i64;

/// Encodes a location with the grid refinement method.
///
/// `lat_remainder` and `lng_remainder` are the position inside the 10-digit
/// cell, in full-precision units (`0..3125` and `0..1024`). Each digit splits
/// the current cell into 5 rows by 4 columns and names the sub-cell holding
/// the point, so a default-precision code can be refined one character at a
/// time. At most five digits carry information.
pub fn encode_grid(lat_remainder: i64, lng_remainder: i64, code_length: usize) -> String {
    let mut code = String::with_capacity(code_length);

    let mut lat_place_value = GRID_LAT_STEPS;
    let mut lng_place_value = GRID_LNG_STEPS;
    let mut adjusted_latitude = lat_remainder;
    let mut adjusted_longitude = lng_remainder;

    for _ in 0..code_length {
        lat_place_value = (lat_place_value / ROWS).max(1);
        lng_place_value = (lng_place_value / COLUMNS).max(1);

        let row = (adjusted_latitude / lat_place_value).min(ROWS - 1);
        let col = (adjusted_longitude / lng_place_value).min(COLUMNS - 1);
        adjusted_latitude -= row * lat_place_value;
        adjusted_longitude -= col * lng_place_value;

        code.push(digit_char((row * COLUMNS + col) as usize));
    }

    code
}

/// Decodes the grid refinement portion of a code (everything after the
/// tenth digit).
///
/// Returns `(lat_offset, lng_offset, lat_span, lng_span)` in full-precision
/// units, relative to the low corner of the 10-digit cell.
///
/// # Preconditions
///
/// `code` must contain only alphabet characters; anything else is read as
/// row 0, column 0 without an error. [`decode`](crate::decode) validates the
/// whole code before calling this.
pub fn decode_grid(code: &str) -> (i64, i64, i64, i64) {
    let mut lat_lo = 0;
    let mut lng_lo = 0;
    let mut lat_place_value = GRID_LAT_STEPS;
    let mut lng_place_value = GRID_LNG_STEPS;

    for byte in code.bytes() {
        let index = digit_value(byte).unwrap_or(0) as i64;
        let row = index / COLUMNS;
        let col = index % COLUMNS;

        lat_place_value = (lat_place_value / ROWS).max(1);
        lng_place_value = (lng_place_value / COLUMNS).max(1);
        lat_lo += row * lat_place_value;
        lng_lo += col * lng_place_value;
    }

    (lat_lo, lng_lo, lat_place_value, lng_place_value)
}
