//! Vocabulary save/load.
//!
//! Serializes the sorted word list plus the window settings it was prepared
//! with to JSON. The index map is rebuilt on load, never stored.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::vocab::Vocabulary;
use crate::core::{CbowError, CbowResult};

/// Serializable vocabulary data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyFile {
    /// Words in index order.
    pub words: Vec<String>,
    /// Context half-size the corpus was prepared with.
    pub context_half_size: usize,
    /// Total tokens in the source corpus.
    pub token_count: usize,
    /// Corpus files the vocabulary was built from.
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Save a vocabulary to a JSON file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the data cannot be serialized or the file cannot be written.
pub fn save_vocabulary(
    vocab: &Vocabulary,
    path: &Path,
    context_half_size: usize,
    token_count: usize,
    sources: Vec<String>,
) -> CbowResult<()> {
    let data = VocabularyFile {
        words: vocab.words.clone(),
        context_half_size,
        token_count,
        sources,
    };

    let json = serde_json::to_string_pretty(&data)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CbowError::io(parent, e))?;
    }

    std::fs::write(path, json).map_err(|e| CbowError::io(path, e))?;
    info!(path = %path.display(), words = vocab.size(), "saved vocabulary");
    Ok(())
}

/// Load a vocabulary from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the stored
/// word list is not sorted and unique.
pub fn load_vocabulary(path: &Path) -> CbowResult<(VocabularyFile, Vocabulary)> {
    let json = std::fs::read_to_string(path).map_err(|e| CbowError::io(path, e))?;
    let data: VocabularyFile = serde_json::from_str(&json)?;
    let vocab = Vocabulary::from_word_list(data.words.clone())?;
    Ok((data, vocab))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_vocabulary_save_load() {
        let vocab = Vocabulary::from_tokens(&["b", "a", "c", "a"]);
        let dir = std::env::temp_dir().join("cbow_test_vocab");
        let path = dir.join("vocab.json");

        save_vocabulary(&vocab, &path, 2, 4, vec!["corpus.txt".to_string()]).expect("save");
        let (data, loaded) = load_vocabulary(&path).expect("load");

        assert_eq!(loaded, vocab);
        assert_eq!(data.context_half_size, 2);
        assert_eq!(data.token_count, 4);
        assert_eq!(data.sources, vec!["corpus.txt"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_creates_directory() {
        let root = std::env::temp_dir().join("cbow_test_nested");
        let path = root.join("deep").join("path").join("vocab.json");

        let vocab = Vocabulary::from_tokens(&["x"]);
        assert!(save_vocabulary(&vocab, &path, 1, 1, vec![]).is_ok());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_load_nonexistent() {
        let result = load_vocabulary(Path::new("/nonexistent/vocab.json"));
        assert!(matches!(result, Err(CbowError::Io { .. })));
    }

    #[test]
    fn test_load_rejects_unsorted_words() {
        let dir = std::env::temp_dir().join("cbow_test_unsorted");
        fs::create_dir_all(&dir).expect("mkdir");
        let path = dir.join("vocab.json");
        fs::write(
            &path,
            r#"{"words":["b","a"],"context_half_size":2,"token_count":2}"#,
        )
        .expect("write");

        assert!(matches!(
            load_vocabulary(&path),
            Err(CbowError::InvalidVocabulary(_))
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
