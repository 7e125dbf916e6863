// ============================================================
// Layer 2 — Row Failure Policy
// ============================================================
// Both stages process rows one at a time. When a row fails
// (page unreachable, article file missing, nothing to measure)
// the run either:
//
//   abort — stops immediately with the row's error; nothing
//           further is fetched and no report is written
//   skip  — logs a warning, leaves the row out, and carries on
//
// Skipped identifiers are collected so the caller can print a
// summary at the end of the run.

use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Abort,
    Skip,
}

impl FailurePolicy {
    /// Apply the policy to a failed row.
    ///
    /// Returns the error (with the row named in its context) under
    /// `Abort`; records the identifier and returns Ok under `Skip`.
    pub fn handle(
        self,
        stage:      &str,
        identifier: &str,
        error:      Error,
        skipped:    &mut Vec<String>,
    ) -> Result<()> {
        match self {
            FailurePolicy::Abort => {
                Err(error.context(format!("{stage} failed for URL_ID '{identifier}'")))
            }
            FailurePolicy::Skip => {
                tracing::warn!("Skipping URL_ID '{}' ({}): {:#}", identifier, stage, error);
                skipped.push(identifier.to_string());
                Ok(())
            }
        }
    }
}

/// What a stage did with its rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows that went through the stage successfully
    pub completed: usize,
    /// Identifiers of rows left out under the skip policy, in input order
    pub skipped:   Vec<String>,
}

impl RunSummary {
    pub fn log(&self, stage: &str) {
        if self.skipped.is_empty() {
            tracing::info!("{}: {} rows completed", stage, self.completed);
        } else {
            tracing::warn!(
                "{}: {} rows completed, {} skipped: {}",
                stage,
                self.completed,
                self.skipped.len(),
                self.skipped.join(", ")
            );
        }
    }
}
