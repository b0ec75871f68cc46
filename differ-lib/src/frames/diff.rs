use super::ensure_same_bounds;
use crate::{image::same_rgb, *};
use ::image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

/// Sparse overlay produced by [`diff()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diff {
    pub image: RgbaImage,
    pub changed: usize,
}

/// Compares `current` against `base` on RGB channels only.
///
/// Changed pixels carry `current`'s color with alpha 255, unchanged ones stay
/// fully transparent.
pub fn diff(base: &DynamicImage, current: &DynamicImage) -> Result<Diff> {
    let bounds = Bounds::of(base);

    ensure_same_bounds(bounds, Bounds::of(current))?;

    let base = canonical(base);
    let current = canonical(current);
    let mut image = RgbaImage::new(bounds.width, bounds.height);
    let mut changed = 0;

    for ((out, prev), curr) in image
        .pixels_mut()
        .zip(base.pixels())
        .zip(current.pixels())
    {
        if !same_rgb(prev, curr) {
            let [r, g, b, _] = curr.0;

            *out = Rgba([r, g, b, 255]);
            changed += 1;
        }
    }

    debug!("{} of {} pixels changed within {}", changed, bounds.area(), bounds);

    Ok(Diff { image, changed })
}
