//! Corpus loading: read text files, clean and tokenize them.
//!
//! Files are read and tokenized in parallel with Rayon; the token streams are
//! concatenated in input order so the result is deterministic.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::whitespace_tokens;
use crate::core::{CbowError, CbowResult};
use crate::text::prepare_arabic;

/// How raw text becomes tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tokenizer {
    /// Diacritics removal, Arabic normalization, Arabic-letter runs and full stops.
    #[default]
    Arabic,
    /// Lowercased whitespace-separated tokens.
    Whitespace,
}

impl Tokenizer {
    #[must_use]
    pub fn tokenize(self, text: &str) -> Vec<String> {
        match self {
            Tokenizer::Arabic => prepare_arabic(text),
            Tokenizer::Whitespace => whitespace_tokens(text),
        }
    }
}

/// Tokens from one or more source files.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub tokens: Vec<String>,
    /// Source paths, as given, in load order.
    pub sources: Vec<String>,
}

impl Corpus {
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// List `.txt` files in a directory, sorted by path for deterministic ordering.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn collect_corpus_files(dir: &Path) -> CbowResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| CbowError::io(dir, e))?;
    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Read and tokenize every file, concatenating tokens in the order given.
///
/// # Errors
///
/// Returns the first read error encountered.
pub fn load_corpus(paths: &[PathBuf], tokenizer: Tokenizer) -> CbowResult<Corpus> {
    let per_file: Vec<Vec<String>> = paths
        .par_iter()
        .map(|path| -> CbowResult<Vec<String>> {
            let text = std::fs::read_to_string(path).map_err(|e| CbowError::io(path, e))?;
            let tokens = tokenizer.tokenize(&text);
            debug!(path = %path.display(), tokens = tokens.len(), "tokenized file");
            Ok(tokens)
        })
        .collect::<CbowResult<_>>()?;

    let corpus = Corpus {
        tokens: per_file.into_iter().flatten().collect(),
        sources: paths.iter().map(|p| p.display().to_string()).collect(),
    };
    info!(files = paths.len(), tokens = corpus.len(), "loaded corpus");
    Ok(corpus)
}
