mod diff;
mod merge;

pub use self::{diff::*, merge::*};

use crate::*;

fn ensure_same_bounds(expected: Bounds, actual: Bounds) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(DifferError::DimensionMismatch { expected, actual })
    }
}
