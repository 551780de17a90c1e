/// Separator between the first eight digits and the rest of the code
pub const SEPARATOR: char = '+';

/// Number of digits placed before the separator
pub const SEPARATOR_POSITION: usize = 8;

/// Character used to pad codes shorter than the separator position
pub const PADDING_CHARACTER: char = '0';

/// The 20-symbol digit alphabet, in value order
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Base of the pair encoding
pub const ENCODING_BASE: usize = 20;

/// Maximum latitude in degrees
pub const LATITUDE_MAX: f64 = 90.0;

/// Maximum longitude in degrees
pub const LONGITUDE_MAX: f64 = 180.0;

/// Number of digits encoded as latitude/longitude pairs (about 13.5 x 13.5 m at the equator)
pub const PAIR_CODE_LENGTH: usize = 10;

/// Number of columns in the grid refinement step
pub const GRID_COLUMNS: usize = 4;

/// Number of rows in the grid refinement step
pub const GRID_ROWS: usize = 5;

/// Size of the initial grid cell in degrees
pub const GRID_SIZE_DEGREES: f64 = 0.000125;

/// Minimum number of digits a code needs before it can be shortened
pub const MIN_TRIMMABLE_CODE_LEN: usize = 6;

/// Code length used when none is requested
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Longest code produced by the encoder; longer requests are clamped
pub const MAX_DIGIT_COUNT: usize = 15;

/// Place value in degrees of each pair position, indexed by `digit / 2`
pub const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

pub(crate) const SEPARATOR_BYTE: u8 = SEPARATOR as u8;
pub(crate) const PADDING_BYTE: u8 = PADDING_CHARACTER as u8;

/// Pair-phase units per degree; one unit is the 10-digit cell size
pub const PAIR_PRECISION: i64 = 8000;

/// Full-precision latitude steps inside one 10-digit cell (5 rows, five times)
pub const GRID_LAT_STEPS: i64 = 3125;

/// Full-precision longitude steps inside one 10-digit cell (4 columns, five times)
pub const GRID_LNG_STEPS: i64 = 1024;

/// Full-precision latitude units per degree
pub const LAT_INTEGER_MULTIPLIER: i64 = PAIR_PRECISION * GRID_LAT_STEPS;

/// Full-precision longitude units per degree
pub const LNG_INTEGER_MULTIPLIER: i64 = PAIR_PRECISION * GRID_LNG_STEPS;

/// Pair-phase units covered by the first digit pair (20 degrees)
pub(crate) const PAIR_FIRST_PLACE_VALUE: i64 = 20 * PAIR_PRECISION;
