use crate::*;
use ::image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct JoinSummary {
    /// Reconstructed frames, in sequence order; the first one is the base.
    pub frames: Vec<PathBuf>,
}

/// Rebuilds the original sequence from a base followed by its diffs.
///
/// Every step merges onto the frame produced by the previous one, so the
/// whole chain runs on the calling thread and the first error aborts it.
/// Frames written before the failing step are left on disk.
pub fn join(paths: &[PathBuf]) -> Result<JoinSummary> {
    let (base, diffs) = match paths {
        [base, diffs @ ..] if !diffs.is_empty() => (base, diffs),
        _ => {
            return Err(DifferError::NotEnoughInputs {
                mode: "join",
                required: 2,
                got: paths.len(),
            })
        }
    };

    if !has_tag(base, Tag::Base) {
        warn!(
            "First file {} doesn't appear to be a .BASE file",
            base.display()
        );
    }

    let mut summary = JoinSummary::default();
    let mut prev = load_image(base)?;
    let output = original_path(base)?;

    save_png(&canonical(&prev), &output)?;
    info!("Saved reconstructed base image: {}", output.display());
    summary.frames.push(output);

    for path in diffs {
        let (frame, output) = apply_diff(&prev, path)?;

        summary.frames.push(output);
        prev = DynamicImage::ImageRgba8(frame);
    }

    info!("Join processing complete: {} frames", summary.frames.len());

    Ok(summary)
}

/// Applies a single diff file onto `prev` and persists the result.
pub fn apply_diff(prev: &DynamicImage, path: &Path) -> Result<(RgbaImage, PathBuf)> {
    if !has_tag(path, Tag::Diff) {
        warn!("{} doesn't appear to be a .DIFF file", path.display());
    }

    info!("Applying diff: {}", path.display());

    let patch = load_image(path)?;
    let frame = merge(prev, &patch)?;
    let output = original_path(path)?;

    save_png(&frame, &output)?;
    info!("Saved reconstructed image: {}", output.display());

    Ok((frame, output))
}
