// ============================================================
// Layer 5 — Analysis Layer
// ============================================================
// The scoring logic. Everything here is a pure function of the
// article text, the shared Lexicon and a SyllableCounter: the
// same inputs always give the same AnalysisRecord.
//
//   syllables.rs — SyllableCounter implementations
//                  (spelling heuristic, CMU pronouncing dictionary)
//
//   pronouns.rs  — whole-word personal pronoun counter
//
//   metrics.rs   — MetricsCalculator: tokens → sentiment,
//                  readability and style metrics

/// Syllable estimation behind the SyllableCounter trait
pub mod syllables;

/// Personal pronoun matching
pub mod pronouns;

/// Per-document metrics calculator
pub mod metrics;
