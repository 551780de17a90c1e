use thiserror::Error;

/// Error type for olc-rs operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OlcError {
    /// The requested code length cannot be encoded (below 2, or odd below 8).
    #[error("Invalid Open Location Code length: {0}")]
    InvalidLength(usize),
    /// The code failed the validity, fullness or shortness check the operation needs.
    #[error("Invalid Open Location Code: {0}")]
    InvalidCode(String),
    /// Padded codes cannot be shortened.
    #[error("Cannot shorten padded code: {0}")]
    PaddedCode(String),
    /// The code has fewer significant digits than can be trimmed.
    #[error("Code length must be at least 6 to shorten, got {0}")]
    TooShort(usize),
    /// A latitude or longitude was NaN or infinite.
    #[error("Coordinate must be a finite number")]
    NonFiniteCoordinate,
    /// A builder was finished without a coordinate.
    #[error("No coordinate was provided")]
    MissingCoordinate,
    /// Failed to parse or reduce a geometry (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParseError(String),
}
