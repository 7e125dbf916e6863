// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Typed failures for the three things that can go wrong on a
// single row: the input table is malformed, the page cannot be
// fetched/extracted, or the text has nothing to measure.
//
// The application layer wraps these in anyhow with context
// (which identifier, which file) and decides whether a row
// failure aborts the run or is skipped.

use thiserror::Error;

/// Failure to retrieve or extract an article from a URL
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} has no <title> element")]
    MissingTitle { url: String },

    #[error("{url} has no paragraph text")]
    NoParagraphs { url: String },
}

/// Failure to compute metrics for a document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Every token was a stop word / punctuation, or no sentence
    /// boundary could be found, so the ratios are undefined.
    #[error("document has no countable words or sentences ({words} words, {sentences} sentences)")]
    EmptyDocument { words: usize, sentences: usize },
}

/// Failure to read the input table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input table is empty (no header row)")]
    MissingHeader,

    #[error("input table has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    ShortRow { line: usize, expected: usize, found: usize },

    /// The identifier names the article file, so it must stay a
    /// plain file name inside the articles directory.
    #[error("line {line}: URL_ID '{identifier}' cannot be used as a file name")]
    InvalidIdentifier { line: usize, identifier: String },
}
