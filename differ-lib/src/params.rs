use crate::*;

pub const DEFAULT_CHUNK_SIZE: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub(crate) threads: Option<usize>,
    pub(crate) chunk_size: usize,
    pub(crate) progress: bool,
}

impl Params {
    /// - `threads`: diff workers; `None` means one per CPU,
    /// - `chunk_size`: how many images get decoded before their pairs are
    ///   handed over to the workers (bounds memory on long sequences),
    /// - `progress`: whether to draw a progress bar.
    pub fn new(threads: Option<usize>, chunk_size: usize, progress: bool) -> Result<Self> {
        if threads == Some(0) {
            return Err(DifferError::invalid_params("threads must be >= 1 when set"));
        }

        if chunk_size == 0 {
            return Err(DifferError::invalid_params("chunk size must be >= 1"));
        }

        Ok(Self {
            threads,
            chunk_size,
            progress,
        })
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn progress(&self) -> bool {
        self.progress
    }

    pub(crate) fn thread_pool(&self) -> Result<rayon::ThreadPool> {
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|idx| format!("differ-{}", idx));

        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads);
        }

        builder
            .build()
            .map_err(|err| DifferError::ThreadPool(err.to_string()))
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            threads: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            progress: false,
        }
    }
}
