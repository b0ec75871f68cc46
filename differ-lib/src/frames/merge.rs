use super::ensure_same_bounds;
use crate::*;
use ::image::{DynamicImage, RgbaImage};

/// Overlays `diff` onto `base`.
///
/// Any diff pixel with non-zero alpha replaces the base pixel wholesale (no
/// blending), so partially transparent pixels coming from other tools count as
/// changed too.
pub fn merge(base: &DynamicImage, diff: &DynamicImage) -> Result<RgbaImage> {
    let bounds = Bounds::of(base);

    ensure_same_bounds(bounds, Bounds::of(diff))?;

    let diff = canonical(diff);
    let mut out = canonical(base).into_owned();

    for (pixel, patch) in out.pixels_mut().zip(diff.pixels()) {
        if patch.0[3] > 0 {
            *pixel = *patch;
        }
    }

    Ok(out)
}
