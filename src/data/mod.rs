// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between files on disk and the token lists the
// metrics calculator counts over.
//
//   Input.csv
//       │
//       ▼
//   InputTableLoader  → ordered (URL_ID, URL) rows
//
//   MasterDictionary/ + StopWords/
//       │
//       ▼
//   LexiconLoader     → positive / negative / stop-word sets
//
//   article text
//       │
//       ▼
//   split_sentences   → sentence slices
//       │
//       ▼
//   tokenize_sentence → Treebank-style word tokens
//
// Each module is responsible for exactly one step.

/// Shared CSV reading/writing helpers
pub mod csv;

/// Reads the URL_ID / URL input table
pub mod input_table;

/// Loads sentiment dictionaries and stop words
pub mod lexicon;

/// Splits text into sentences
pub mod sentences;

/// Splits sentences into word tokens
pub mod tokenizer;
