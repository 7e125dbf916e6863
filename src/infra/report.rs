// ============================================================
// Layer 6 — Report Writer
// ============================================================
// Writes the collected AnalysisRecords as the final output table.
//
// Formats:
//   csv  — one header row + one row per record, columns exactly:
//            URL_ID, URL, POSITIVE SCORE, ..., AVG WORD LENGTH
//          The URL cell is a spreadsheet formula,
//            =HYPERLINK("https://...", "https://...")
//          so it opens as a clickable link in Excel / LibreOffice.
//   json — a pretty-printed array of records with plain URLs.
//
// Floats are written with Rust's shortest round-trip formatting,
// so the same record always produces the same bytes.
//
// The effective run configuration is saved next to the report
// as <report stem>.config.json, so a report can always be
// traced back to the dictionaries and options that produced it.
//
// Example CSV output:
//   URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE,...
//   37,"=HYPERLINK(""https://x.com/a"", ""https://x.com/a"")",31,12,...

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::csv::join_row;
use crate::domain::analysis_record::{AnalysisRecord, REPORT_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Csv,
    Json,
}

pub struct ReportWriter {
    path:   PathBuf,
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self { path: path.into(), format }
    }

    /// Write every record, replacing any existing report.
    pub fn write(&self, records: &[AnalysisRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create report directory '{}'", parent.display()))?;
        }

        let contents = match self.format {
            ReportFormat::Csv  => render_csv(records),
            ReportFormat::Json => serde_json::to_string_pretty(records)?,
        };

        fs::write(&self.path, contents)
            .with_context(|| format!("Cannot write report to '{}'", self.path.display()))?;

        tracing::info!(
            "Wrote {} rows to '{}'",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// `<dir>/<report stem>.config.json`
    pub fn config_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("report");
        self.path.with_file_name(format!("{stem}.config.json"))
    }

    /// Save the run configuration beside the report.
    pub fn save_config<T: Serialize>(&self, config: &T) -> Result<()> {
        let path = self.config_path();
        let json = serde_json::to_string_pretty(config)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved run config to '{}'", path.display());
        Ok(())
    }
}

/// Spreadsheet hyperlink formula showing the URL as its own label.
pub fn hyperlink(url: &str) -> String {
    let quoted = url.replace('"', "\"\"");
    format!("=HYPERLINK(\"{quoted}\", \"{quoted}\")")
}

/// Header row plus one line per record, each ending in '\n'.
pub fn render_csv(records: &[AnalysisRecord]) -> String {
    let mut out = join_row(REPORT_COLUMNS);
    out.push('\n');

    for r in records {
        let row = [
            r.identifier.clone(),
            hyperlink(&r.url),
            r.positive_score.to_string(),
            r.negative_score.to_string(),
            r.polarity_score.to_string(),
            r.subjectivity_score.to_string(),
            r.avg_sentence_length.to_string(),
            r.percentage_complex_words.to_string(),
            r.fog_index.to_string(),
            r.avg_words_per_sentence.to_string(),
            r.complex_word_count.to_string(),
            r.word_count.to_string(),
            r.syllables_per_word.to_string(),
            r.personal_pronouns.to_string(),
            r.avg_word_length.to_string(),
        ];
        out.push_str(&join_row(row));
        out.push('\n');
    }

    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::csv::parse_rows;

    fn record(id: &str, url: &str) -> AnalysisRecord {
        AnalysisRecord {
            identifier:               id.to_string(),
            url:                      url.to_string(),
            positive_score:           3,
            negative_score:           1,
            polarity_score:           0.5,
            subjectivity_score:       0.25,
            avg_sentence_length:      8.0,
            percentage_complex_words: 12.5,
            fog_index:                8.2,
            avg_words_per_sentence:   8.0,
            complex_word_count:       2,
            word_count:               16,
            syllables_per_word:       1.75,
            personal_pronouns:        4,
            avg_word_length:          5.5,
        }
    }

    #[test]
    fn test_hyperlink_formula() {
        assert_eq!(
            hyperlink("https://x.com/a"),
            "=HYPERLINK(\"https://x.com/a\", \"https://x.com/a\")"
        );
    }

    #[test]
    fn test_csv_columns_and_order() {
        let csv  = render_csv(&[record("2", "http://b"), record("1", "http://a")]);
        let rows = parse_rows(&csv).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].fields, REPORT_COLUMNS.to_vec());
        assert_eq!(rows[1].fields[0], "2");
        assert_eq!(rows[2].fields[0], "1");
        assert_eq!(rows[1].fields[1], "=HYPERLINK(\"http://b\", \"http://b\")");
        assert_eq!(rows[1].fields[2], "3");
        assert_eq!(rows[1].fields[4], "0.5");
        assert_eq!(rows[1].fields[8], "8.2");
        assert_eq!(rows[1].fields[14], "5.5");
        assert!(rows.iter().all(|r| r.fields.len() == REPORT_COLUMNS.len()));
    }

    #[test]
    fn test_write_csv_and_config() {
        let dir    = tempfile::tempdir().unwrap();
        let path   = dir.path().join("out").join("Output.csv");
        let writer = ReportWriter::new(&path, ReportFormat::Csv);

        writer.write(&[record("1", "http://a")]).unwrap();
        writer.save_config(&serde_json::json!({ "format": "csv" })).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("URL_ID,URL,POSITIVE SCORE"));
        assert!(dir.path().join("out").join("Output.config.json").exists());
    }

    #[test]
    fn test_write_json_keeps_plain_url() {
        let dir    = tempfile::tempdir().unwrap();
        let path   = dir.path().join("Output.json");
        ReportWriter::new(&path, ReportFormat::Json)
            .write(&[record("1", "http://a")])
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let back: Vec<AnalysisRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, vec![record("1", "http://a")]);
    }
}
