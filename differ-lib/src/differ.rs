use crate::*;
use ::image::DynamicImage;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Splits an image sequence into a verbatim base and per-pair diffs.
#[derive(Debug)]
pub struct Differ<'a> {
    params: &'a Params,
}

#[derive(Debug)]
pub struct DiffSummary {
    pub base: PathBuf,
    /// One entry per consecutive pair, in input order.
    pub pairs: Vec<PairOutcome>,
    pub stats: Stats,
}

struct Frame<'p> {
    path: &'p Path,
    image: DynamicImage,
}

impl<'a> Differ<'a> {
    pub fn new(params: &'a Params) -> Self {
        Self { params }
    }

    pub fn run(&self, paths: &[PathBuf]) -> Result<DiffSummary> {
        let (first, rest) = match paths {
            [first, rest @ ..] if !rest.is_empty() => (first, rest),
            _ => {
                return Err(DifferError::NotEnoughInputs {
                    mode: "diff",
                    required: 2,
                    got: paths.len(),
                })
            }
        };

        let pool = self.params.thread_pool()?;

        let mut prev = Some(Frame {
            path: first.as_path(),
            image: load_image(first)?,
        });

        let base = output_path(first, Tag::Base)?;

        copy_file(first, &base)?;
        info!("Copied base image {} to {}", first.display(), base.display());

        let progress = if self.params.progress {
            ProgressBar::new(rest.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        let mut pairs = Vec::with_capacity(rest.len());

        for chunk in rest.chunks(self.params.chunk_size) {
            // Slot 0 carries the last frame of the previous chunk.
            let mut frames = Vec::with_capacity(chunk.len() + 1);

            frames.push(prev.take());

            for path in chunk {
                let frame = match load_image(path) {
                    Ok(image) => Some(Frame {
                        path: path.as_path(),
                        image,
                    }),

                    Err(err) => {
                        warn!(
                            "{}; skipping comparisons involving {}",
                            err,
                            path.display()
                        );

                        None
                    }
                };

                frames.push(frame);
            }

            debug!(
                "Dispatching {} pairs onto {} workers",
                chunk.len(),
                pool.current_num_threads()
            );

            let outcomes: Vec<_> = pool.install(|| {
                frames
                    .par_windows(2)
                    .zip(chunk.par_iter())
                    .progress_with(progress.clone())
                    .map(|(window, current)| match (&window[0], &window[1]) {
                        (Some(prev), Some(curr)) => process_pair(prev, curr),
                        _ => skip_pair(current),
                    })
                    .collect()
            });

            pairs.extend(outcomes);
            prev = frames.pop().flatten();
        }

        progress.finish_and_clear();

        let stats: Stats = pairs.iter().collect();

        info!("Diff processing complete: {}", stats);

        Ok(DiffSummary { base, pairs, stats })
    }
}

fn process_pair(prev: &Frame<'_>, curr: &Frame<'_>) -> PairOutcome {
    info!(
        "Processing pair: {} vs {}",
        prev.path.display(),
        curr.path.display()
    );

    match compare(prev, curr) {
        Ok((output, changed)) => PairOutcome::Written { output, changed },

        Err(err) => {
            error!(
                "Pair ({}, {}) failed: {}",
                prev.path.display(),
                curr.path.display(),
                err
            );

            PairOutcome::Failed {
                current: curr.path.to_owned(),
                error: err,
            }
        }
    }
}

fn compare(prev: &Frame<'_>, curr: &Frame<'_>) -> Result<(PathBuf, usize)> {
    let Diff { image, changed } = diff(&prev.image, &curr.image)?;

    info!(
        "Found {} different pixels between {} and {}",
        changed,
        prev.path.display(),
        curr.path.display()
    );

    let output = output_path(curr.path, Tag::Diff)?;

    save_png(&image, &output)?;
    info!("Difference image saved to {}", output.display());

    Ok((output, changed))
}

fn skip_pair(current: &Path) -> PairOutcome {
    warn!(
        "Skipping comparison for {} as one of the images failed to load",
        current.display()
    );

    PairOutcome::Skipped {
        current: current.to_owned(),
    }
}
