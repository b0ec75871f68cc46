use crate::Bounds;
use std::{io, path::PathBuf};

pub type Result<T, E = DifferError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum DifferError {
    #[error("couldn't access file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("couldn't decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("dimensions mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: Bounds, actual: Bounds },

    #[error("couldn't encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("naming error: {0}")]
    Naming(String),

    #[error("{mode} mode requires at least {required} input images, got {got}")]
    NotEnoughInputs {
        mode: &'static str,
        required: usize,
        got: usize,
    },

    #[error("invalid pattern: {0}")]
    Pattern(String),

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("couldn't build thread pool: {0}")]
    ThreadPool(String),
}

impl DifferError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn naming(msg: impl Into<String>) -> Self {
        Self::Naming(msg.into())
    }

    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }
}
