// ============================================================
// Layer 2 — AnalyzeUseCase
// ============================================================
// Orchestrates the metrics stage:
//
//   Step 1: Load dictionaries + stop words       (Layer 4 - data)
//   Step 2: Pick the syllable counter            (Layer 5 - analysis)
//   Step 3: Load the URL_ID / URL table          (Layer 4 - data)
//   Step 4: For each row, read <URL_ID>.txt      (Layer 6 - infra)
//           and compute its AnalysisRecord       (Layer 5 - analysis)
//   Step 5: Write the report + run config        (Layer 6 - infra)
//
// The report is only written once every row has been handled,
// so an aborted run never leaves a half-written table behind.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::{
    metrics::MetricsCalculator,
    syllables::{PronouncingDictionary, VowelGroupCounter},
};
use crate::application::failure_policy::{FailurePolicy, RunSummary};
use crate::data::{input_table::InputTableLoader, lexicon::LexiconLoader};
use crate::domain::{analysis_record::AnalysisRecord, traits::SyllableCounter};
use crate::infra::{
    article_store::ArticleStore,
    report::{ReportFormat, ReportWriter},
};

// ─── Analyze Configuration ────────────────────────────────────────────────────
/// Everything the metrics stage needs. Saved verbatim next to the
/// report so the numbers can be reproduced later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    pub input_path:       PathBuf,
    pub articles_dir:     PathBuf,
    pub positive_dict:    PathBuf,
    pub negative_dict:    PathBuf,
    pub stopwords_dir:    PathBuf,
    pub stopwords_prefix: String,
    /// CMU-format pronouncing dictionary; heuristic counting when absent
    pub syllable_dict:    Option<PathBuf>,
    pub output_path:      PathBuf,
    pub format:           ReportFormat,
    pub on_error:         FailurePolicy,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            input_path:       PathBuf::from("Input.csv"),
            articles_dir:     PathBuf::from("."),
            positive_dict:    PathBuf::from("MasterDictionary").join("positive-words.txt"),
            negative_dict:    PathBuf::from("MasterDictionary").join("negative-words.txt"),
            stopwords_dir:    PathBuf::from("StopWords"),
            stopwords_prefix: "StopWords_".to_string(),
            syllable_dict:    None,
            output_path:      PathBuf::from("Output.csv"),
            format:           ReportFormat::Csv,
            on_error:         FailurePolicy::Abort,
        }
    }
}

// ─── AnalyzeUseCase ───────────────────────────────────────────────────────────
pub struct AnalyzeUseCase {
    config: AnalyzeConfig,
}

impl AnalyzeUseCase {
    pub fn new(config: AnalyzeConfig) -> Self {
        Self { config }
    }

    /// Run the whole stage and write the report.
    pub fn execute(&self) -> Result<RunSummary> {
        let cfg = &self.config;

        // ── Step 1: lexicon ───────────────────────────────────────────────────
        let lexicon = LexiconLoader {
            positive_path:    cfg.positive_dict.clone(),
            negative_path:    cfg.negative_dict.clone(),
            stopwords_dir:    cfg.stopwords_dir.clone(),
            stopwords_prefix: cfg.stopwords_prefix.clone(),
        }
        .load()?;

        // ── Step 2: syllable counter ──────────────────────────────────────────
        let counter: Box<dyn SyllableCounter> = match &cfg.syllable_dict {
            Some(path) => Box::new(PronouncingDictionary::load(path)?),
            None => {
                tracing::info!("No pronouncing dictionary given, using vowel-group heuristic");
                Box::new(VowelGroupCounter)
            }
        };

        let calculator = MetricsCalculator::new(&lexicon, counter.as_ref())?;

        // ── Steps 3-4: rows ───────────────────────────────────────────────────
        let inputs = InputTableLoader::new(&cfg.input_path).load()?;
        let store  = ArticleStore::new(&cfg.articles_dir);

        let mut records: Vec<AnalysisRecord> = Vec::with_capacity(inputs.len());
        let mut summary = RunSummary::default();

        for input in &inputs {
            let result = store.load_text(&input.identifier).and_then(|text| {
                Ok(calculator.analyze(&input.identifier, &input.url, &text)?)
            });

            match result {
                Ok(record) => {
                    tracing::debug!(
                        "URL_ID {}: {} words, polarity {:.3}, fog {:.2}",
                        record.identifier,
                        record.word_count,
                        record.polarity_score,
                        record.fog_index
                    );
                    records.push(record);
                    summary.completed += 1;
                }
                Err(e) => cfg.on_error.handle("analyze", &input.identifier, e, &mut summary.skipped)?,
            }
        }

        // ── Step 5: report ────────────────────────────────────────────────────
        let writer = ReportWriter::new(&cfg.output_path, cfg.format);
        writer.write(&records)?;
        writer.save_config(cfg)?;

        summary.log("analyze");
        Ok(summary)
    }
}
