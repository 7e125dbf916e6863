// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `fetch`, `analyze` and `run`
// and all their configurable flags.
//
// Flags shared between subcommands live in small Args structs
// that are flattened into each command, so `run` accepts
// exactly the union of `fetch` and `analyze`.

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::{
    analyze_use_case::AnalyzeConfig,
    failure_policy::FailurePolicy,
    fetch_use_case::FetchConfig,
};
use crate::infra::{http_fetcher::DEFAULT_USER_AGENT, report::ReportFormat};

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download every URL in the input table into <URL_ID>.txt
    Fetch(FetchArgs),

    /// Compute text metrics for already fetched articles
    Analyze(AnalyzeArgs),

    /// Fetch, then analyze
    Run(RunArgs),
}

// ─── Shared flags ─────────────────────────────────────────────────────────────

/// What to do when a single row fails
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OnErrorArg {
    /// Stop the whole run at the first failing row
    Abort,
    /// Log a warning, leave the row out and carry on
    Skip,
}

impl From<OnErrorArg> for FailurePolicy {
    fn from(a: OnErrorArg) -> Self {
        match a {
            OnErrorArg::Abort => FailurePolicy::Abort,
            OnErrorArg::Skip  => FailurePolicy::Skip,
        }
    }
}

/// Output table format
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    /// Spreadsheet-friendly CSV with hyperlink formulas
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(a: FormatArg) -> Self {
        match a {
            FormatArg::Csv  => ReportFormat::Csv,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SharedArgs {
    /// CSV table with URL_ID and URL columns
    #[arg(long, default_value = "Input.csv")]
    pub input: PathBuf,

    /// Directory holding the <URL_ID>.txt article files
    #[arg(long, default_value = ".")]
    pub articles_dir: PathBuf,

    /// Failure policy for individual rows
    #[arg(long, value_enum, default_value_t = OnErrorArg::Abort)]
    pub on_error: OnErrorArg,
}

#[derive(Args, Debug, Clone)]
pub struct FetchOptions {
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Pause between consecutive requests, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeOptions {
    /// Directory with positive-words.txt and negative-words.txt
    #[arg(long, default_value = "MasterDictionary")]
    pub dictionary_dir: PathBuf,

    /// Positive word list (overrides <dictionary-dir>/positive-words.txt)
    #[arg(long)]
    pub positive_dict: Option<PathBuf>,

    /// Negative word list (overrides <dictionary-dir>/negative-words.txt)
    #[arg(long)]
    pub negative_dict: Option<PathBuf>,

    /// Directory with the stop-word lists
    #[arg(long, default_value = "StopWords")]
    pub stopwords_dir: PathBuf,

    /// Only files starting with this prefix and ending in .txt are read
    #[arg(long, default_value = "StopWords_")]
    pub stopwords_prefix: String,

    /// CMU-format pronouncing dictionary for syllable counts
    /// (falls back to a spelling heuristic when omitted)
    #[arg(long)]
    pub syllable_dict: Option<PathBuf>,

    /// Where to write the report
    #[arg(long, default_value = "Output.csv")]
    pub output: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,
}

// ─── Per-command argument sets ────────────────────────────────────────────────

/// All arguments for the `fetch` command
#[derive(Args, Debug)]
pub struct FetchArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    #[command(flatten)]
    pub fetch: FetchOptions,
}

/// All arguments for the `analyze` command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    #[command(flatten)]
    pub analyze: AnalyzeOptions,
}

/// All arguments for the `run` command
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    #[command(flatten)]
    pub fetch: FetchOptions,

    #[command(flatten)]
    pub analyze: AnalyzeOptions,
}

// ─── CLI → application config ─────────────────────────────────────────────────
// The application layer never sees clap types.

fn fetch_config(shared: &SharedArgs, opts: FetchOptions) -> FetchConfig {
    FetchConfig {
        input_path:   shared.input.clone(),
        articles_dir: shared.articles_dir.clone(),
        timeout_secs: opts.timeout_secs,
        delay_ms:     opts.delay_ms,
        user_agent:   opts.user_agent,
        on_error:     shared.on_error.into(),
    }
}

fn analyze_config(shared: &SharedArgs, opts: AnalyzeOptions) -> AnalyzeConfig {
    let positive_dict = opts
        .positive_dict
        .unwrap_or_else(|| opts.dictionary_dir.join("positive-words.txt"));
    let negative_dict = opts
        .negative_dict
        .unwrap_or_else(|| opts.dictionary_dir.join("negative-words.txt"));

    AnalyzeConfig {
        input_path:       shared.input.clone(),
        articles_dir:     shared.articles_dir.clone(),
        positive_dict,
        negative_dict,
        stopwords_dir:    opts.stopwords_dir,
        stopwords_prefix: opts.stopwords_prefix,
        syllable_dict:    opts.syllable_dict,
        output_path:      opts.output,
        format:           opts.format.into(),
        on_error:         shared.on_error.into(),
    }
}

impl From<FetchArgs> for FetchConfig {
    fn from(a: FetchArgs) -> Self {
        fetch_config(&a.shared, a.fetch)
    }
}

impl From<AnalyzeArgs> for AnalyzeConfig {
    fn from(a: AnalyzeArgs) -> Self {
        analyze_config(&a.shared, a.analyze)
    }
}

impl From<RunArgs> for (FetchConfig, AnalyzeConfig) {
    fn from(a: RunArgs) -> Self {
        (
            fetch_config(&a.shared, a.fetch),
            analyze_config(&a.shared, a.analyze),
        )
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_analyze_defaults_match_file_layout() {
        let Commands::Analyze(args) = parse(&["article-sentiment", "analyze"]) else {
            panic!("expected analyze");
        };
        let cfg: AnalyzeConfig = args.into();

        assert_eq!(cfg.input_path, PathBuf::from("Input.csv"));
        assert_eq!(cfg.positive_dict, PathBuf::from("MasterDictionary/positive-words.txt"));
        assert_eq!(cfg.negative_dict, PathBuf::from("MasterDictionary/negative-words.txt"));
        assert_eq!(cfg.stopwords_prefix, "StopWords_");
        assert_eq!(cfg.output_path, PathBuf::from("Output.csv"));
        assert_eq!(cfg.format, ReportFormat::Csv);
        assert_eq!(cfg.on_error, FailurePolicy::Abort);
        assert!(cfg.syllable_dict.is_none());
    }

    #[test]
    fn test_dictionary_overrides_and_enums() {
        let Commands::Analyze(args) = parse(&[
            "article-sentiment", "analyze",
            "--positive-dict", "pos.txt",
            "--format", "json",
            "--on-error", "skip",
        ]) else {
            panic!("expected analyze");
        };
        let cfg: AnalyzeConfig = args.into();

        assert_eq!(cfg.positive_dict, PathBuf::from("pos.txt"));
        assert_eq!(cfg.negative_dict, PathBuf::from("MasterDictionary/negative-words.txt"));
        assert_eq!(cfg.format, ReportFormat::Json);
        assert_eq!(cfg.on_error, FailurePolicy::Skip);
    }

    #[test]
    fn test_run_shares_input_between_stages() {
        let Commands::Run(args) = parse(&[
            "article-sentiment", "run",
            "--input", "urls.csv",
            "--articles-dir", "out",
            "--delay-ms", "250",
        ]) else {
            panic!("expected run");
        };
        let (fetch, analyze): (FetchConfig, AnalyzeConfig) = args.into();

        assert_eq!(fetch.input_path, analyze.input_path);
        assert_eq!(fetch.articles_dir, PathBuf::from("out"));
        assert_eq!(analyze.articles_dir, PathBuf::from("out"));
        assert_eq!(fetch.delay_ms, 250);
        assert_eq!(fetch.timeout_secs, 30);
    }
}
