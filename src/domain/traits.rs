// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two external capabilities the pipeline depends on are
// expressed as traits so the use cases never name a concrete
// implementation:
//
//   PageFetcher      — turns a URL into raw HTML
//                      (HttpPageFetcher in infra, stubs in tests)
//
//   SyllableCounter  — estimates syllables in an English word
//                      (VowelGroupCounter heuristic, or a
//                       PronouncingDictionary loaded from disk)

use crate::domain::error::FetchError;

// ─── PageFetcher ──────────────────────────────────────────────────────────────
/// Anything that can retrieve the HTML of a page.
pub trait PageFetcher {
    /// Fetch the page body. Non-success statuses are errors.
    fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

// ─── SyllableCounter ──────────────────────────────────────────────────────────
/// Estimates how many syllables a lower-cased word has.
pub trait SyllableCounter {
    fn syllables(&self, word: &str) -> usize;
}

