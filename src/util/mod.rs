pub mod coord;
pub mod error;

pub use coord::{Coordinate, check_finite, clip_latitude, normalize_longitude};
pub use error::OlcError;
