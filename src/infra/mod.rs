// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the outside world:
//
//   http_fetcher.rs   — blocking reqwest client behind the
//                       PageFetcher trait
//
//   html_extractor.rs — scraper-based <title> / <p> extraction
//                       turning raw HTML into an Article
//
//   article_store.rs  — one <identifier>.txt file per article
//
//   report.rs         — the output table (CSV with hyperlink
//                       formulas, or JSON) plus the saved run
//                       configuration
//
// The application layer wires these together; the analysis
// layer never imports anything from here.

/// HTTP page fetching
pub mod http_fetcher;

/// HTML → Article extraction
pub mod html_extractor;

/// Text artifact persistence
pub mod article_store;

/// Output table writer
pub mod report;
