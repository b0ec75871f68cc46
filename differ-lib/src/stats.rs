use std::{fmt, path::PathBuf};

/// Result of a single (previous, current) comparison.
#[derive(Debug)]
pub enum PairOutcome {
    Written {
        output: PathBuf,
        changed: usize,
    },

    /// One of the two images couldn't be loaded, so the pair was never
    /// compared.
    Skipped {
        current: PathBuf,
    },

    Failed {
        current: PathBuf,
        error: crate::DifferError,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub changed_pixels: u64,
}

impl Stats {
    pub fn pairs(&self) -> usize {
        self.written + self.skipped + self.failed
    }

    pub fn record(&mut self, outcome: &PairOutcome) {
        match outcome {
            PairOutcome::Written { changed, .. } => {
                self.written += 1;
                self.changed_pixels += *changed as u64;
            }
            PairOutcome::Skipped { .. } => self.skipped += 1,
            PairOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

impl<'a> FromIterator<&'a PairOutcome> for Stats {
    fn from_iter<I: IntoIterator<Item = &'a PairOutcome>>(iter: I) -> Self {
        let mut stats = Self::default();

        for outcome in iter {
            stats.record(outcome);
        }

        stats
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} diffs written, {} skipped, {} failed ({} pixels changed)",
            self.written, self.skipped, self.failed, self.changed_pixels
        )
    }
}
