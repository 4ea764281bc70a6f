//! Error type shared across the crate.
//!
//! Every fallible operation returns [`CbowResult`]. Validation happens when
//! generators are built, so the sample iterators themselves never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for CBOW data preparation.
#[derive(Debug, Error)]
pub enum CbowError {
    /// A token is missing from the vocabulary
    #[error("word not in vocabulary: {0:?}")]
    UnknownWord(String),

    /// The corpus has no token at the first center position
    #[error("corpus has {len} tokens, need at least {needed}")]
    CorpusTooShort { len: usize, needed: usize },

    /// Invalid window or batch configuration
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A stored vocabulary failed validation
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// Failed to read or write a file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or decode JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CbowError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CbowError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type CbowResult<T> = Result<T, CbowError>;
