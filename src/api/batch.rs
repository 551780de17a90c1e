use crate::api::code_area::CodeArea;
use crate::api::codec::{decode, encode};
use crate::util::coord::Coordinate;
use crate::util::error::OlcError;
use rayon::prelude::*;
use tracing::debug;

/// Encodes many WGS84 (lon/lat) coordinates in parallel.
///
/// Output order matches input order. Any error aborts the batch; when several
/// inputs are bad, which one is reported is not specified.
///
/// # Example
/// ```
/// use olc_rs::encode_batch;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let codes = encode_batch(&[(2.775, 20.375), (8.0000625, 47.0000625)], 10)?;
/// assert_eq!(codes[1], "8FVC2222+22");
/// # Ok(())
/// # }
/// ```
pub fn encode_batch<C>(coords: &[C], code_length: usize) -> Result<Vec<String>, OlcError>
where
    C: Coordinate + Sync,
{
    debug!(count = coords.len(), code_length, "encoding batch");
    coords
        .par_iter()
        .map(|c| encode(c.y(), c.x(), code_length))
        .collect()
}

/// Decodes many full codes in parallel, preserving order.
pub fn decode_batch<S>(codes: &[S]) -> Result<Vec<CodeArea>, OlcError>
where
    S: AsRef<str> + Sync,
{
    debug!(count = codes.len(), "decoding batch");
    codes.par_iter().map(|c| decode(c.as_ref())).collect()
}
