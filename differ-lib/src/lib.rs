//! Stores sequences of near-identical images as a verbatim base plus sparse
//! per-frame diffs, and rebuilds the original sequence from them.
//!
//! A diff is a plain RGBA raster: changed pixels carry the new color at full
//! opacity, unchanged ones are fully transparent.

mod codec;
mod differ;
mod error;
mod frames;
mod image;
mod joiner;
mod naming;
mod params;
mod source;
mod stats;

pub use self::{
    codec::*,
    differ::*,
    error::*,
    frames::*,
    image::{canonical, Bounds},
    joiner::*,
    naming::*,
    params::*,
    source::*,
    stats::*,
};
pub use ::image::{DynamicImage, RgbaImage};
