//! Sliding-window sample and batch generation.
//!
//! [`CbowVectors`] walks the corpus one center word at a time and yields
//! `(x, y)` pairs forever. The first pass starts at center `C`; after the
//! last token it wraps to position 0, so every token is a center once per
//! pass. Contexts near the edges are shorter (see [`context_words`]).
//! [`CbowBatches`] groups consecutive samples into column-major batch
//! matrices of shape `(V, batch_size)`.

use ndarray::{Array1, Array2, Axis};
use tracing::debug;

use super::context::{context_vector_from_indices, context_words};
use super::vocab::Vocabulary;
use crate::core::{CbowError, CbowResult};
use crate::CbowConfig;

/// Infinite iterator of CBOW training vectors.
///
/// Each item is `(x, y)`: `x` is the frequency-weighted context vector, `y`
/// the one-hot vector of the center word. Both have length `V`.
#[derive(Debug, Clone)]
pub struct CbowVectors {
    idxs: Vec<usize>,
    vocab_size: usize,
    c: usize,
    center: usize,
    passes: usize,
}

impl CbowVectors {
    /// Resolve `tokens` against `vocab` and position on center `c`.
    ///
    /// # Errors
    ///
    /// - [`CbowError::InvalidConfig`] if `c` is zero
    /// - [`CbowError::CorpusTooShort`] if there are `c` tokens or fewer
    /// - [`CbowError::UnknownWord`] if any token is missing from `vocab`
    pub fn new<S: AsRef<str>>(tokens: &[S], vocab: &Vocabulary, c: usize) -> CbowResult<Self> {
        if c == 0 {
            return Err(CbowError::InvalidConfig(
                "context_half_size must be at least 1".to_string(),
            ));
        }
        if tokens.len() <= c {
            return Err(CbowError::CorpusTooShort {
                len: tokens.len(),
                needed: c + 1,
            });
        }
        let idxs = vocab.indices(tokens)?;
        debug!(tokens = idxs.len(), vocab_size = vocab.size(), c, "cbow vectors ready");
        Ok(Self {
            idxs,
            vocab_size: vocab.size(),
            c,
            center: c,
            passes: 0,
        })
    }

    /// Build from a [`CbowConfig`], using its `context_half_size`.
    ///
    /// # Errors
    ///
    /// See [`CbowVectors::new`].
    pub fn from_config<S: AsRef<str>>(
        tokens: &[S],
        vocab: &Vocabulary,
        config: &CbowConfig,
    ) -> CbowResult<Self> {
        Self::new(tokens, vocab, config.context_half_size)
    }

    /// Number of distinct samples per pass over the corpus (one per token).
    #[must_use]
    pub fn samples_per_pass(&self) -> usize {
        self.idxs.len()
    }

    /// Times the generator has wrapped past the last token.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    fn advance(&mut self) {
        self.center += 1;
        if self.center >= self.idxs.len() {
            self.passes += 1;
            debug!(passes = self.passes, "end of corpus, wrapping to position 0");
            self.center = 0;
        }
    }
}

impl Iterator for CbowVectors {
    type Item = (Array1<f32>, Array1<f32>);

    fn next(&mut self) -> Option<Self::Item> {
        let context = context_words(&self.idxs, self.center, self.c);
        let x = context_vector_from_indices(&context, self.vocab_size);
        let mut y = Array1::zeros(self.vocab_size);
        y[self.idxs[self.center]] = 1.0;
        self.advance();
        Some((x, y))
    }
}

/// Infinite iterator of CBOW training batches.
///
/// Each item is `(X, Y)` with shape `(V, batch_size)`; column `j` holds the
/// `j`-th sample of the batch. Consecutive batches continue where the
/// previous one stopped.
#[derive(Debug, Clone)]
pub struct CbowBatches {
    vectors: CbowVectors,
    batch_size: usize,
    batches: usize,
}

impl CbowBatches {
    /// # Errors
    ///
    /// Fails on a zero `batch_size`, or for any reason [`CbowVectors::new`] fails.
    pub fn new<S: AsRef<str>>(
        tokens: &[S],
        vocab: &Vocabulary,
        c: usize,
        batch_size: usize,
    ) -> CbowResult<Self> {
        if batch_size == 0 {
            return Err(CbowError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            vectors: CbowVectors::new(tokens, vocab, c)?,
            batch_size,
            batches: 0,
        })
    }

    /// # Errors
    ///
    /// Fails if the config is invalid, or for any reason [`CbowVectors::new`] fails.
    pub fn from_config<S: AsRef<str>>(
        tokens: &[S],
        vocab: &Vocabulary,
        config: &CbowConfig,
    ) -> CbowResult<Self> {
        config.validate()?;
        Self::new(tokens, vocab, config.context_half_size, config.batch_size)
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Batches produced so far.
    #[must_use]
    pub fn batches_emitted(&self) -> usize {
        self.batches
    }

    /// Completed passes over the corpus so far.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.vectors.passes()
    }
}

impl Iterator for CbowBatches {
    type Item = (Array2<f32>, Array2<f32>);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.vectors.vocab_size();
        let mut batch_x = Array2::zeros((v, self.batch_size));
        let mut batch_y = Array2::zeros((v, self.batch_size));

        for (col, (x, y)) in (&mut self.vectors).take(self.batch_size).enumerate() {
            batch_x.index_axis_mut(Axis(1), col).assign(&x);
            batch_y.index_axis_mut(Axis(1), col).assign(&y);
        }

        self.batches += 1;
        Some((batch_x, batch_y))
    }
}
