// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates every real step to Layer 2 (application).
//
// Three commands are supported:
//   1. `fetch`   — scrape each URL into <URL_ID>.txt
//   2. `analyze` — compute metrics for the saved articles
//   3. `run`     — both, one after the other

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AnalyzeArgs, Commands, FetchArgs, RunArgs};

use crate::application::{
    analyze_use_case::{AnalyzeConfig, AnalyzeUseCase},
    failure_policy::RunSummary,
    fetch_use_case::{FetchConfig, FetchUseCase},
};

#[derive(Parser, Debug)]
#[command(
    name = "article-sentiment",
    version,
    about = "Scrape articles from a URL list and score their sentiment and readability."
)]
pub struct Cli {
    /// The subcommand to run (fetch, analyze or run)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand to its use case. Never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Fetch(args)   => run_fetch(args),
            Commands::Analyze(args) => run_analyze(args),
            Commands::Run(args)     => run_all(args),
        }
    }
}

fn run_fetch(args: FetchArgs) -> Result<()> {
    let config: FetchConfig = args.into();
    tracing::info!("Fetching URLs listed in '{}'", config.input_path.display());

    let articles_dir = config.articles_dir.clone();
    let summary = FetchUseCase::with_http(config)?.execute()?;

    print_summary("Fetched", &summary);
    println!("Articles saved in '{}'", articles_dir.display());
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let config: AnalyzeConfig = args.into();
    tracing::info!("Analyzing articles in '{}'", config.articles_dir.display());

    let output  = config.output_path.clone();
    let summary = AnalyzeUseCase::new(config).execute()?;

    print_summary("Analyzed", &summary);
    println!("Report written to '{}'", output.display());
    Ok(())
}

fn run_all(args: RunArgs) -> Result<()> {
    let (fetch, analyze): (FetchConfig, AnalyzeConfig) = args.into();

    let fetched = FetchUseCase::with_http(fetch)?.execute()?;
    print_summary("Fetched", &fetched);

    let output   = analyze.output_path.clone();
    let analyzed = AnalyzeUseCase::new(analyze).execute()?;
    print_summary("Analyzed", &analyzed);

    println!("Report written to '{}'", output.display());
    Ok(())
}

fn print_summary(verb: &str, summary: &RunSummary) {
    if summary.skipped.is_empty() {
        println!("{verb} {} rows.", summary.completed);
    } else {
        println!(
            "{verb} {} rows, skipped {}: {}",
            summary.completed,
            summary.skipped.len(),
            summary.skipped.join(", ")
        );
    }
}
