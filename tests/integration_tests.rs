//! End-to-end tests for CBOW data preparation.
//!
//! These tests verify the full pipeline:
//! - Arabic text cleans into a stable token stream
//! - Vocabulary and batches agree on dimensions
//! - Context vectors are probability distributions over the context
//! - Batches cycle through the corpus deterministically

use approx::assert_abs_diff_eq;
use cbow_prep::data::{context_vector, pack_idx_with_frequency};
use cbow_prep::text::prepare_arabic;
use cbow_prep::{CbowBatches, CbowConfig, CbowVectors, Vocabulary};
use ndarray::Axis;

const ARABIC_TEXT: &str = "ذَهَبَ الوَلَدُ إلى المَدرسةِ. قرأ الوَلَدُ الكتابَ والدرسَ. عاد الولد إلى البيت.";

fn english_tokens() -> Vec<String> {
    "i am happy because i am learning and i am happy because learning is fun"
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_arabic_pipeline_into_batches() {
    let tokens = prepare_arabic(ARABIC_TEXT);
    assert!(tokens.iter().all(|t| !t.contains('\u{064E}')));
    assert_eq!(tokens.iter().filter(|t| *t == ".").count(), 3);
    assert!(tokens.contains(&"الي".to_string()));
    assert!(tokens.contains(&"و".to_string()));

    let vocab = Vocabulary::from_tokens(&tokens);
    let config = CbowConfig {
        context_half_size: 2,
        batch_size: 4,
    };
    let mut batches = CbowBatches::from_config(&tokens, &vocab, &config).expect("valid corpus");
    let (x, y) = batches.next().expect("infinite iterator");

    assert_eq!(x.shape(), &[vocab.size(), 4]);
    assert_eq!(y.shape(), &[vocab.size(), 4]);

    // first center word is the third token
    let third = vocab.word_to_index(&tokens[2]).expect("in vocab");
    assert_abs_diff_eq!(y[[third, 0]], 1.0);
}

#[test]
fn test_context_vectors_are_distributions() {
    let tokens = english_tokens();
    let vocab = Vocabulary::from_tokens(&tokens);
    let vectors = CbowVectors::new(&tokens, &vocab, 3).expect("valid corpus");
    let per_pass = vectors.samples_per_pass();

    for (x, y) in vectors.take(per_pass) {
        assert_abs_diff_eq!(x.sum(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(y.sum(), 1.0);
        assert!(x.iter().all(|&v| v >= 0.0));
    }
}

#[test]
fn test_pack_matches_context_vector() {
    let tokens = english_tokens();
    let vocab = Vocabulary::from_tokens(&tokens);
    let context = ["i", "am", "because", "i"];

    let packed = pack_idx_with_frequency(&context, &vocab).expect("known words");
    let x = context_vector(&context, &vocab).expect("known words");

    for (idx, freq) in packed {
        assert_abs_diff_eq!(x[idx], freq as f32 / context.len() as f32);
    }
}

#[test]
fn test_batches_cycle_with_period() {
    let tokens = english_tokens();
    let vocab = Vocabulary::from_tokens(&tokens);
    let c = 2;

    // one batch per pass of the corpus, so every batch is identical
    let mut batches = CbowBatches::new(&tokens, &vocab, c, tokens.len()).expect("valid corpus");
    let (x1, y1) = batches.next().expect("batch");
    let (x2, y2) = batches.next().expect("batch");
    assert_eq!(x1, x2);
    assert_eq!(y1, y2);
    assert_eq!(batches.passes(), 2);

    // every token is a center once per pass: from position c to the end, then 0..c
    let centers: Vec<usize> = y1
        .axis_iter(Axis(1))
        .map(|col| col.iter().position(|&v| v == 1.0).expect("one-hot"))
        .collect();
    let mut expected = vocab.indices(&tokens[c..]).expect("known words");
    expected.extend(vocab.indices(&tokens[..c]).expect("known words"));
    assert_eq!(centers, expected);
}

#[test]
fn test_edge_contexts_are_shorter_but_normalized() {
    let tokens = english_tokens();
    let vocab = Vocabulary::from_tokens(&tokens);
    let mut vectors = CbowVectors::new(&tokens, &vocab, 3).expect("valid corpus");

    // last token: three words on the left only
    let last = tokens.len() - 3 - 1;
    let (x, _) = vectors.nth(last).expect("sample");
    let fun_left = context_vector(&tokens[tokens.len() - 4..tokens.len() - 1], &vocab)
        .expect("known words");
    assert_eq!(x, fun_left);

    // position 0 after the wrap: three words on the right only
    let (x, y) = vectors.next().expect("sample");
    assert_abs_diff_eq!(y[vocab.word_to_index(&tokens[0]).expect("in vocab")], 1.0);
    let right = context_vector(&tokens[1..4], &vocab).expect("known words");
    assert_eq!(x, right);
    assert_eq!(vectors.passes(), 1);
}

#[test]
fn test_corpus_just_longer_than_half_window() {
    let tokens = ["a", "b", "c", "d"];
    let vocab = Vocabulary::from_tokens(&tokens);
    let vectors = CbowVectors::new(&tokens, &vocab, 3).expect("c + 1 tokens suffice");
    for (x, _) in vectors.take(8) {
        assert_abs_diff_eq!(x.sum(), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn test_short_corpus_is_rejected() {
    let tokens = prepare_arabic("كتاب.");
    let vocab = Vocabulary::from_tokens(&tokens);
    assert!(CbowBatches::new(&tokens, &vocab, 2, 8).is_err());
}
