pub mod alphabet;
pub mod constants;
pub mod grid;
pub mod pairs;
pub mod precision;
pub mod validation;

pub use constants::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES,
    LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER,
    PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
};
pub use grid::{decode_grid, encode_grid};
pub use pairs::{decode_pairs, decode_pairs_sequence, encode_pairs};
pub use validation::{is_full, is_short, is_valid};
