// ============================================================
// Layer 3 — AnalysisRecord Domain Type
// ============================================================
// One row of the final report. Built once per article by the
// metrics calculator and never mutated afterwards.
//
// Field order here is the column order of the report.
// The URL is stored plain; the spreadsheet hyperlink formula
// is added by the report writer, not here.

use serde::{Deserialize, Serialize};

/// Column headers of the report, in output order
pub const REPORT_COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub identifier: String,
    pub url:        String,

    // ── Sentiment ────────────────────────────────────────────
    /// Filtered words found in the positive dictionary
    pub positive_score: usize,
    /// Filtered words found in the negative dictionary
    pub negative_score: usize,
    /// (pos - neg) / (pos + neg + ε), roughly in [-1, 1]
    pub polarity_score: f64,
    /// (pos + neg) / (words + ε), roughly in [0, 1]
    pub subjectivity_score: f64,

    // ── Readability ──────────────────────────────────────────
    pub avg_sentence_length:        f64,
    pub percentage_complex_words:   f64,
    /// Gunning fog: 0.4 * (avg sentence length + % complex)
    pub fog_index:                  f64,
    /// Same formula as avg_sentence_length; both columns are reported
    pub avg_words_per_sentence:     f64,
    pub complex_word_count:         usize,
    pub word_count:                 usize,
    pub syllables_per_word:         f64,

    // ── Style ────────────────────────────────────────────────
    /// Whole-word matches of i/we/my/ours/us in the unfiltered text
    pub personal_pronouns: usize,
    pub avg_word_length:   f64,
}
