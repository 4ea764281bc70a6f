//! Word vocabulary for CBOW training.
//!
//! Maps between words and dense indices for one-hot encoding. Indices follow
//! the sorted order of the unique words, so the same corpus always yields the
//! same vocabulary.

use ndarray::Array1;
use std::collections::{BTreeSet, HashMap};

use crate::core::{CbowError, CbowResult};

/// Word-to-index vocabulary for one-hot encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Unique words in ascending order; a word's position is its index.
    pub words: Vec<String>,
    /// Reverse mapping from word to index.
    pub word_to_idx: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from every distinct token, sorted ascending.
    #[must_use]
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let unique: BTreeSet<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let words: Vec<String> = unique.into_iter().map(str::to_string).collect();
        Self::from_sorted_words(words)
    }

    /// Rebuild a vocabulary from a stored word list.
    ///
    /// # Errors
    ///
    /// Returns [`CbowError::InvalidVocabulary`] unless `words` is strictly
    /// ascending (sorted with no duplicates).
    pub fn from_word_list(words: Vec<String>) -> CbowResult<Self> {
        if let Some(pair) = words.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(CbowError::InvalidVocabulary(format!(
                "words out of order or duplicated at {:?} / {:?}",
                pair[0], pair[1]
            )));
        }
        Ok(Self::from_sorted_words(words))
    }

    fn from_sorted_words(words: Vec<String>) -> Self {
        let word_to_idx: HashMap<String, usize> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();
        Self { words, word_to_idx }
    }

    /// Number of words in the vocabulary (`V`).
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_to_idx.contains_key(word)
    }

    /// Get the index for a word, or `None` if not in vocabulary.
    #[must_use]
    pub fn word_to_index(&self, word: &str) -> Option<usize> {
        self.word_to_idx.get(word).copied()
    }

    /// Get the word for an index, or `None` if out of bounds.
    #[must_use]
    pub fn index_to_word(&self, idx: usize) -> Option<&str> {
        self.words.get(idx).map(String::as_str)
    }

    /// Index of a word that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`CbowError::UnknownWord`] if the word is missing.
    pub fn require_index(&self, word: &str) -> CbowResult<usize> {
        self.word_to_index(word)
            .ok_or_else(|| CbowError::UnknownWord(word.to_string()))
    }

    /// Map every word to its index, preserving order.
    ///
    /// # Errors
    ///
    /// Fails on the first word missing from the vocabulary.
    pub fn indices<S: AsRef<str>>(&self, words: &[S]) -> CbowResult<Vec<usize>> {
        words
            .iter()
            .map(|w| self.require_index(w.as_ref()))
            .collect()
    }

    /// One-hot encode a word as a vector of length `self.size()`.
    ///
    /// # Errors
    ///
    /// Returns [`CbowError::UnknownWord`] if the word is missing.
    pub fn one_hot(&self, word: &str) -> CbowResult<Array1<f32>> {
        let idx = self.require_index(word)?;
        Ok(self.one_hot_index(idx))
    }

    /// One-hot vector for an index already known to be in range.
    #[must_use]
    pub fn one_hot_index(&self, idx: usize) -> Array1<f32> {
        let mut v = Array1::zeros(self.size());
        v[idx] = 1.0;
        v
    }
}
