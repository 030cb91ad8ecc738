//! Rescaling of a finished placement onto `[0, 1]`.

use crate::Positions;
use crate::error::{Error, Result};

/// Position given to every node when all of them coincide.
pub const DEGENERATE_POSITION: f64 = 0.5;

/// Maps positions onto `[0, 1]` and returns the span they covered before scaling.
///
/// A zero span (a single node, or everything stacked on one spot) sets every position to
/// [`DEGENERATE_POSITION`] instead of dividing by zero. A span too wide for `f64` is an
/// [`Error::Overflow`] and leaves `positions` as they were.
pub fn normalize(positions: &mut Positions) -> Result<f64> {
    let (min, max) = positions
        .values()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
    let span = max - min;
    if span.is_nan() || span == f64::INFINITY {
        return Err(Error::Overflow {
            message: format!("span from {min} to {max} is not representable"),
        });
    }

    if span > 0.0 {
        for x in positions.values_mut() {
            *x = (*x - min) / span;
        }
        Ok(span)
    } else {
        for x in positions.values_mut() {
            *x = DEGENERATE_POSITION;
        }
        Ok(0.0)
    }
}
