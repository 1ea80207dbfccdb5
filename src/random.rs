use rand::TryCryptoRng;
use tracing::warn;

use crate::errors::{FixedArrayError, Result};


/// Draws a uniformly distributed index in `0..=upper` from a secure source.
///
/// Uses rejection sampling over 64-bit draws so no index is favoured. Source
/// failures surface as [`FixedArrayError::RandomSource`]; there is no fallback
/// to a weaker generator.
pub(crate) fn index_in<R: TryCryptoRng>(rng: &mut R, upper: usize) -> Result<usize> {
    let range = (upper as u64).wrapping_add(1);

    // Largest multiple of `range` that fits, draws at or above it are biased.
    let zone = match range {
        0 => u64::MAX,
        range => u64::MAX - u64::MAX % range,
    };

    loop {
        let draw = rng.try_next_u64().map_err(|err| {
            warn!(%err, "secure random source failed");
            FixedArrayError::RandomSource(err.to_string())
        })?;

        if range == 0 { return Ok(draw as usize) }
        if draw < zone { return Ok((draw % range) as usize) }
    }
}
