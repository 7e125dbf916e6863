// ============================================================
// Layer 2 — FetchUseCase
// ============================================================
// Orchestrates the scraping stage, one input row at a time:
//
//   Step 1: Load the URL_ID / URL table         (Layer 4 - data)
//   Step 2: Fetch the page HTML                 (Layer 6 - infra)
//   Step 3: Extract <title> and <p> text        (Layer 6 - infra)
//   Step 4: Save <URL_ID>.txt                   (Layer 6 - infra)
//
// Rows are processed strictly in order with an optional pause
// between requests. A failing row is handled by the configured
// FailurePolicy.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, thread, time::Duration};

use crate::application::failure_policy::{FailurePolicy, RunSummary};
use crate::data::input_table::InputTableLoader;
use crate::domain::{input_record::InputRecord, traits::PageFetcher};
use crate::infra::{
    article_store::ArticleStore,
    html_extractor::extract_article,
    http_fetcher::{HttpPageFetcher, DEFAULT_USER_AGENT},
};

// ─── Fetch Configuration ──────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub input_path:   PathBuf,
    pub articles_dir: PathBuf,
    pub timeout_secs: u64,
    pub delay_ms:     u64,
    pub user_agent:   String,
    pub on_error:     FailurePolicy,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            input_path:   PathBuf::from("Input.csv"),
            articles_dir: PathBuf::from("."),
            timeout_secs: 30,
            delay_ms:     0,
            user_agent:   DEFAULT_USER_AGENT.to_string(),
            on_error:     FailurePolicy::Abort,
        }
    }
}

// ─── FetchUseCase ─────────────────────────────────────────────────────────────
pub struct FetchUseCase<F: PageFetcher> {
    config:  FetchConfig,
    fetcher: F,
}

impl FetchUseCase<HttpPageFetcher> {
    /// Build the use case with a real HTTP client.
    pub fn with_http(config: FetchConfig) -> Result<Self> {
        let fetcher = HttpPageFetcher::new(
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )?;
        Ok(Self::new(config, fetcher))
    }
}

impl<F: PageFetcher> FetchUseCase<F> {
    pub fn new(config: FetchConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Run the whole stage.
    pub fn execute(&self) -> Result<RunSummary> {
        let cfg = &self.config;

        // ── Step 1: input table ───────────────────────────────────────────────
        let records = InputTableLoader::new(&cfg.input_path).load()?;
        let store   = ArticleStore::new(&cfg.articles_dir);
        let delay   = Duration::from_millis(cfg.delay_ms);

        let mut summary = RunSummary::default();

        for (i, record) in records.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                thread::sleep(delay);
            }

            // ── Steps 2-4: fetch, extract, save ───────────────────────────────
            match self.fetch_one(record, &store) {
                Ok(()) => summary.completed += 1,
                Err(e) => cfg.on_error.handle("fetch", &record.identifier, e, &mut summary.skipped)?,
            }
        }

        summary.log("fetch");
        Ok(summary)
    }

    fn fetch_one(&self, record: &InputRecord, store: &ArticleStore) -> Result<()> {
        let html    = self.fetcher.fetch_html(&record.url)?;
        let article = extract_article(&record.identifier, &record.url, &html)?;
        let path    = store.save(&article)?;

        tracing::info!(
            "Fetched URL_ID {} ({} chars) → '{}'",
            record.identifier,
            article.body.len(),
            path.display()
        );
        Ok(())
    }
}
