//! # cbow-prep
//!
//! Training-data preparation for continuous-bag-of-words (CBOW) word embeddings.
//!
//! ## Overview
//!
//! A CBOW model predicts a center word from the words around it. This crate turns a
//! token sequence into the matrices such a model trains on: every sample pairs a
//! frequency-weighted context vector `x` with the one-hot vector `y` of the center word.
//! It also ships the Arabic normalization pipeline used to clean corpora before
//! tokenization.
//!
//! ## Structure
//!
//! - [`core`] — Error type shared by every module
//! - [`data`] — Vocabulary, context packing, sliding-window batch generation
//! - [`text`] — Arabic normalization and tokenization
//! - [`utils`] — Sigmoid for the CBOW forward pass

pub mod core;
pub mod data;
pub mod text;
pub mod utils;

pub use core::{CbowError, CbowResult};
pub use data::{CbowBatches, CbowVectors, Vocabulary};

/// Window and batch configuration for sample generation.
///
/// Used by [`CbowVectors::from_config`] and [`CbowBatches::from_config`].
#[derive(Debug, Clone)]
pub struct CbowConfig {
    /// Number of context words taken on each side of the center word (`C`).
    pub context_half_size: usize,
    /// Number of samples per batch (columns of each batch matrix).
    pub batch_size: usize,
}

impl Default for CbowConfig {
    fn default() -> Self {
        Self {
            context_half_size: 2,
            batch_size: 128,
        }
    }
}

impl CbowConfig {
    /// Reject zero-sized windows and batches.
    ///
    /// # Errors
    ///
    /// Returns [`CbowError::InvalidConfig`] if either field is zero.
    pub fn validate(&self) -> CbowResult<()> {
        if self.context_half_size == 0 {
            return Err(CbowError::InvalidConfig(
                "context_half_size must be at least 1".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(CbowError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Full window length: `C` words, the center, `C` words.
    #[must_use]
    pub fn window_len(&self) -> usize {
        2 * self.context_half_size + 1
    }
}
