//! CBOW data preparation binary.
//!
//! Loads a corpus, cleans and tokenizes it, builds and saves the vocabulary,
//! then draws a number of training batches and writes one JSONL line of
//! statistics per batch.

use cbow_prep::data::{
    collect_corpus_files, load_corpus, save_vocabulary, CbowBatches, Tokenizer, Vocabulary,
};
use cbow_prep::{CbowConfig, CbowError, CbowResult};
use clap::Parser;
use ndarray::Axis;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "cbow-prepare",
    about = "Build a vocabulary and CBOW training batches from a text corpus"
)]
struct Args {
    /// Corpus files, or directories of .txt files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output vocabulary file (JSON)
    #[arg(long, default_value = "data/output/vocab.json")]
    vocab_file: PathBuf,

    /// Output batch statistics file (JSONL)
    #[arg(long, default_value = "data/output/batches.jsonl")]
    batches_file: PathBuf,

    /// Context words taken on each side of the center word
    #[arg(long, short = 'c', default_value_t = 2)]
    context_half_size: usize,

    /// Samples per batch
    #[arg(long, default_value_t = 128)]
    batch_size: usize,

    /// Number of batches to draw
    #[arg(long, default_value_t = 10)]
    batches: usize,

    /// Lowercased whitespace tokenization instead of the Arabic pipeline
    #[arg(long)]
    plain: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("cbow_prep=info,cbow_prepare=info")
                }),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CbowResult<()> {
    let config = CbowConfig {
        context_half_size: args.context_half_size,
        batch_size: args.batch_size,
    };
    config.validate()?;

    let mut files = Vec::new();
    for input in &args.inputs {
        if input.is_dir() {
            files.extend(collect_corpus_files(input)?);
        } else {
            files.push(input.clone());
        }
    }
    if files.is_empty() {
        return Err(CbowError::InvalidConfig(
            "no corpus files found in the given inputs".to_string(),
        ));
    }

    let tokenizer = if args.plain {
        Tokenizer::Whitespace
    } else {
        Tokenizer::Arabic
    };
    let corpus = load_corpus(&files, tokenizer)?;
    let vocab = Vocabulary::from_tokens(&corpus.tokens);

    info!(
        files = files.len(),
        tokens = corpus.len(),
        vocab_size = vocab.size(),
        c = config.context_half_size,
        batch_size = config.batch_size,
        "corpus prepared"
    );

    save_vocabulary(
        &vocab,
        &args.vocab_file,
        config.context_half_size,
        corpus.len(),
        corpus.sources.clone(),
    )?;

    let mut batches = CbowBatches::from_config(&corpus.tokens, &vocab, &config)?;

    if let Some(parent) = args.batches_file.parent() {
        fs::create_dir_all(parent).map_err(|e| CbowError::io(parent, e))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.batches_file)
        .map_err(|e| CbowError::io(&args.batches_file, e))?;
    let mut out = BufWriter::new(file);

    for (batch_idx, (_x, y)) in batches.by_ref().take(args.batches).enumerate() {
        let center_words: Vec<&str> = y
            .axis_iter(Axis(1))
            .filter_map(|col| {
                col.iter()
                    .position(|&v| v == 1.0)
                    .and_then(|idx| vocab.index_to_word(idx))
            })
            .collect();

        let event = serde_json::json!({
            "type": "batch",
            "batch": batch_idx,
            "columns": y.ncols(),
            "vocab_size": vocab.size(),
            "center_words": center_words,
        });
        writeln!(out, "{event}").map_err(|e| CbowError::io(&args.batches_file, e))?;
    }
    out.flush().map_err(|e| CbowError::io(&args.batches_file, e))?;

    info!(
        batches = batches.batches_emitted(),
        passes = batches.passes(),
        path = %args.batches_file.display(),
        "wrote batch statistics"
    );
    Ok(())
}
