// ============================================================
// Layer 4 — Input Table Loader
// ============================================================
// Reads the list of articles to process from a CSV file with a
// header row. Columns are looked up by name, so extra columns
// and any column order are accepted:
//
//   URL_ID,URL
//   37,https://example.com/ai-in-healthcare
//   38,https://example.com/what-if-the-creation-is-taking-over
//
// Row order is preserved: it is the order of the final report.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::csv::parse_rows;
use crate::domain::error::InputError;
use crate::domain::input_record::InputRecord;

pub const ID_COLUMN:  &str = "URL_ID";
pub const URL_COLUMN: &str = "URL";

/// Loads InputRecords from a CSV file on disk.
pub struct InputTableLoader {
    path: PathBuf,
}

impl InputTableLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the whole table.
    pub fn load(&self) -> Result<Vec<InputRecord>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read input table '{}'", self.path.display()))?;

        let records = parse_input_table(&text)
            .with_context(|| format!("Malformed input table '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded {} input rows from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Parse CSV text into InputRecords, in row order.
pub fn parse_input_table(text: &str) -> Result<Vec<InputRecord>, InputError> {
    let rows = parse_rows(text)?;
    let mut rows = rows.into_iter();

    let header = rows.next().ok_or(InputError::MissingHeader)?;
    let id_idx  = column_index(&header.fields, ID_COLUMN)?;
    let url_idx = column_index(&header.fields, URL_COLUMN)?;
    let needed  = id_idx.max(url_idx) + 1;

    rows.map(|row| {
        if row.fields.len() < needed {
            return Err(InputError::ShortRow {
                line:     row.line,
                expected: needed,
                found:    row.fields.len(),
            });
        }
        let identifier = row.fields[id_idx].trim();
        if !is_file_name_safe(identifier) {
            return Err(InputError::InvalidIdentifier {
                line:       row.line,
                identifier: identifier.to_string(),
            });
        }
        Ok(InputRecord::new(identifier, row.fields[url_idx].trim()))
    })
    .collect()
}

/// Non-empty, no path separators, not "." or ".."
fn is_file_name_safe(identifier: &str) -> bool {
    !identifier.is_empty()
        && !identifier.contains(['/', '\\'])
        && identifier != "."
        && identifier != ".."
}

fn column_index(header: &[String], name: &'static str) -> Result<usize, InputError> {
    header
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or(InputError::MissingColumn(name))
}
