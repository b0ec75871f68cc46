use ::image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use std::{borrow::Cow, fmt};

/// Pixel-addressable region of a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn of(img: &impl GenericImageView) -> Self {
        let (width, height) = img.dimensions();

        Self::new(0, 0, width, height)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.x,
            self.y,
            self.x + self.width,
            self.y + self.height
        )
    }
}

/// Converts a decoded raster into straight (non-premultiplied) 8-bit RGBA.
///
/// Rasters that already are RGBA8 are borrowed as-is; everything else
/// (grayscale, RGB, 16-bit, float) goes through the `image` crate's channel
/// conversion, which scales wider channels down to 0..=255.
pub fn canonical(img: &DynamicImage) -> Cow<'_, RgbaImage> {
    match img.as_rgba8() {
        Some(rgba) => Cow::Borrowed(rgba),
        None => Cow::Owned(img.to_rgba8()),
    }
}

pub(crate) fn same_rgb(a: &Rgba<u8>, b: &Rgba<u8>) -> bool {
    a.0[..3] == b.0[..3]
}
