// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers for the two stages
// of the pipeline (fetching articles, analysing them).
//
// Rules for this layer:
//   - No metric formulas here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file or network access (that's Layer 4 and 6)
//   - Only workflow coordination and the per-row failure policy

// What to do when a row fails
pub mod failure_policy;

// The scraping workflow
pub mod fetch_use_case;

// The metrics workflow
pub mod analyze_use_case;
