//! Vocabulary construction, context packing and batch generation.
//!
//! ## Submodules
//!
//! - [`vocab`] — Sorted word vocabulary and one-hot encoding
//! - [`context`] — Context windows and frequency-weighted input vectors
//! - [`batches`] — Infinite sample and batch iterators
//! - [`persist`] — Vocabulary save/load as JSON
//! - [`corpus`] — Parallel corpus loading and tokenization

pub mod batches;
pub mod context;
pub mod corpus;
pub mod persist;
pub mod vocab;

pub use batches::{CbowBatches, CbowVectors};
pub use context::{context_vector, context_words, pack_idx_with_frequency};
pub use corpus::{collect_corpus_files, load_corpus, Corpus, Tokenizer};
pub use persist::{load_vocabulary, save_vocabulary, VocabularyFile};
pub use vocab::Vocabulary;

/// Split text on whitespace, lowercasing each token.
///
/// Tokenizer for non-Arabic corpora.
#[must_use]
pub fn whitespace_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokens() {
        assert_eq!(
            whitespace_tokens("The  cat\nSAT\t"),
            vec!["the", "cat", "sat"]
        );
    }
}
