// ============================================================
// Layer 3 — InputRecord Domain Type
// ============================================================
// One row of the input table. The identifier is opaque: it is
// only ever used as a file stem and echoed into the report.

use serde::{Deserialize, Serialize};

/// A single (identifier, url) pair read from the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Value of the URL_ID column
    pub identifier: String,

    /// Value of the URL column
    pub url: String,
}

impl InputRecord {
    pub fn new(identifier: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            url:        url.into(),
        }
    }
}
