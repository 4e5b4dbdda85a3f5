//! Analysis pipeline: text in, frequency tables and report files out.
//!
//! Orchestrates the domain functions (normalize, tokenize, filter, count)
//! and hands the results to the report writers. All file I/O lives here;
//! the domain layer only ever sees in-memory text and token sequences.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::report;
use crate::config::Settings;
use crate::domain::{
    filter_stopwords, letter_frequency, ngram_frequency, normalize, tokenize, top_tokens,
    FrequencyEntry, Stopwords, TocTree,
};

/// All frequency tables derived from one document.
#[derive(Debug)]
pub struct Analysis {
    pub letters: Vec<FrequencyEntry>,
    pub words: Vec<FrequencyEntry>,
    pub bigrams: Vec<FrequencyEntry>,
    pub trigrams: Vec<FrequencyEntry>,
    /// Token count before stopword filtering
    pub total_tokens: usize,
    /// Token count after stopword filtering
    pub kept_tokens: usize,
}

/// Title whose depth the run summary reports; sits at depth 1 in the
/// built-in sample TOC.
pub const DEPTH_QUERY_TITLE: &str = "Metrics Design";

/// What a full pipeline run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub report_dir: PathBuf,
    pub report_paths: Vec<PathBuf>,
    pub total_tokens: usize,
    pub kept_tokens: usize,
    pub toc_height: usize,
    /// Depth of [`DEPTH_QUERY_TITLE`] in the TOC, None when the tree
    /// has no such title
    pub sample_depth: Option<usize>,
}

/// Reads a text file with permissive decoding: undecodable bytes are
/// replaced rather than failing the run.
#[instrument(level = "debug")]
pub fn load_text(path: &Path) -> ApplicationResult<String> {
    let bytes = fs::read(path).map_err(|e| ApplicationError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Runs the in-memory half of the pipeline over raw document text.
#[instrument(level = "debug", skip(raw, stopwords))]
pub fn analyze_text(
    raw: &str,
    stopwords: &Stopwords,
    top_words: usize,
    top_ngrams: usize,
) -> ApplicationResult<Analysis> {
    let normalized = normalize(raw);
    let tokens = tokenize(&normalized);
    let total_tokens = tokens.len();
    let clean_tokens = filter_stopwords(tokens, stopwords);
    debug!(
        total_tokens,
        kept_tokens = clean_tokens.len(),
        "tokenized document"
    );

    Ok(Analysis {
        letters: letter_frequency(&normalized),
        words: top_tokens(&clean_tokens, top_words)?,
        bigrams: ngram_frequency(&clean_tokens, 2, top_ngrams)?,
        trigrams: ngram_frequency(&clean_tokens, 3, top_ngrams)?,
        total_tokens,
        kept_tokens: clean_tokens.len(),
    })
}

/// Full pipeline: load the text, compute every table, write the CSV
/// reports and the TOC outline under `report_dir`.
#[instrument(level = "debug", skip(toc, settings))]
pub fn run(
    text_path: &Path,
    report_dir: &Path,
    toc: &TocTree,
    settings: &Settings,
) -> ApplicationResult<RunSummary> {
    let raw = load_text(text_path)?;
    let stopwords = Stopwords::with_extras(&settings.extra_stopwords);
    let analysis = analyze_text(&raw, &stopwords, settings.top_words, settings.top_ngrams)?;

    report::ensure_dir(report_dir)?;
    let report_paths = vec![
        report::write_frequency_csv(report_dir, "letter_frequency.csv", "letter", &analysis.letters)?,
        report::write_frequency_csv(
            report_dir,
            &format!("top_{}_words.csv", settings.top_words),
            "token",
            &analysis.words,
        )?,
        report::write_frequency_csv(
            report_dir,
            &format!("top_{}_bigrams.csv", settings.top_ngrams),
            "2gram",
            &analysis.bigrams,
        )?,
        report::write_frequency_csv(
            report_dir,
            &format!("top_{}_trigrams.csv", settings.top_ngrams),
            "3gram",
            &analysis.trigrams,
        )?,
        report::write_toc(report_dir, toc)?,
    ];

    Ok(RunSummary {
        report_dir: report_dir.to_path_buf(),
        report_paths,
        total_tokens: analysis.total_tokens,
        kept_tokens: analysis.kept_tokens,
        toc_height: toc.height(),
        sample_depth: toc.depth_of(DEPTH_QUERY_TITLE),
    })
}
