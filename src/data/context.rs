//! Context-window extraction and frequency packing.
//!
//! A context is the `C` words before a center position followed by the `C`
//! words after it. Its CBOW input vector weights each word by its share of
//! the context: `x[idx] = freq / num_context_words`.

use ndarray::Array1;
use std::collections::HashMap;

use super::vocab::Vocabulary;
use crate::core::CbowResult;

/// Pair every context word with its vocabulary index and its frequency in the context.
///
/// One entry per word, in order; a repeated word appears once per occurrence,
/// each time carrying its total count.
///
/// # Errors
///
/// Fails if any word is missing from the vocabulary.
pub fn pack_idx_with_frequency<S: AsRef<str>>(
    context_words: &[S],
    vocab: &Vocabulary,
) -> CbowResult<Vec<(usize, usize)>> {
    let idxs = vocab.indices(context_words)?;
    Ok(pack_indices(&idxs))
}

/// Same as [`pack_idx_with_frequency`] over indices already resolved.
#[must_use]
pub fn pack_indices(idxs: &[usize]) -> Vec<(usize, usize)> {
    let mut freq: HashMap<usize, usize> = HashMap::with_capacity(idxs.len());
    for &idx in idxs {
        *freq.entry(idx).or_insert(0) += 1;
    }
    idxs.iter().map(|idx| (*idx, freq[idx])).collect()
}

/// The `c` items before `center` followed by the `c` items after it.
///
/// The left side is taken only when all `c` items exist, so positions below
/// `c` get the right side alone. The right side is cut at the end of the
/// sequence.
#[must_use]
pub fn context_words<T: Clone>(tokens: &[T], center: usize, c: usize) -> Vec<T> {
    let center = center.min(tokens.len());
    let end = (center + c + 1).min(tokens.len());
    let mut context = Vec::with_capacity(2 * c);
    if center >= c {
        context.extend_from_slice(&tokens[center - c..center]);
    }
    if center + 1 < end {
        context.extend_from_slice(&tokens[center + 1..end]);
    }
    context
}

/// Frequency-weighted input vector of length `vocab_size` for a context of indices.
///
/// Returns the zero vector for an empty context.
#[must_use]
pub fn context_vector_from_indices(idxs: &[usize], vocab_size: usize) -> Array1<f32> {
    let mut x = Array1::zeros(vocab_size);
    let n = idxs.len() as f32;
    for (idx, freq) in pack_indices(idxs) {
        x[idx] = freq as f32 / n;
    }
    x
}

/// Frequency-weighted input vector for a context of words.
///
/// # Errors
///
/// Fails if any word is missing from the vocabulary.
pub fn context_vector<S: AsRef<str>>(
    context_words: &[S],
    vocab: &Vocabulary,
) -> CbowResult<Array1<f32>> {
    let idxs = vocab.indices(context_words)?;
    Ok(context_vector_from_indices(&idxs, vocab.size()))
}
