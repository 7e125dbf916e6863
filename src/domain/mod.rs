// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, error enums and traits describing what
// the pipeline works with.
//
// Rules for this layer:
//   - NO network calls, NO file I/O
//   - NO HTML or CSV parsing
//   - Only plain data types and the traits other layers implement
//
// The pipeline moves data through these types in one direction:
//
//   InputRecord  →  Article  →  AnalysisRecord
//   (url list)      (text)      (report row)

// One (identifier, url) row from the input table
pub mod input_record;

// A scraped article: title + concatenated paragraph text
pub mod article;

// The per-article metrics row written to the report
pub mod analysis_record;

// Typed failures for fetching, input parsing and analysis
pub mod error;

// Collaborator traits (page fetching, syllable counting)
pub mod traits;
