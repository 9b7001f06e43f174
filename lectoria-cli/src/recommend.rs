//! Recommend command implementation for the Lectoria CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use lectoria_core::{BookCandidate, ContextDraft, RecommendationResult};
use lectoria_pipeline::{
    HttpJustificationProvider, HttpJustificationProviderConfig, InMemoryStore, Orchestrator,
    SliceSearch,
};
use lectoria_scorer::{CandidateScorer, DEFAULT_TOP_N};

use crate::CliError;

pub(crate) const ARG_CONTEXT: &str = "context";
pub(crate) const ARG_BOOKS: &str = "books";

const DEFAULT_USER_ID: &str = "anonymous";

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Rank a book catalogue for one reader. The reader context \
                 and the candidate catalogue are provided as JSON files; \
                 justifications come from the given webhook when one is \
                 configured and fall back to locally derived reasons \
                 otherwise.",
    about = "Recommend books for a reader context"
)]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the reader context.
    #[arg(long = ARG_CONTEXT, value_name = "path")]
    pub(crate) context: Utf8PathBuf,
    /// Path to a JSON file containing the candidate catalogue.
    #[arg(long = ARG_BOOKS, value_name = "path")]
    pub(crate) books: Utf8PathBuf,
    /// Number of recommendations to return.
    #[arg(long, value_name = "count", default_value_t = DEFAULT_TOP_N)]
    pub(crate) top_n: usize,
    /// Webhook URL for remote justifications.
    #[arg(long, value_name = "url")]
    pub(crate) webhook_url: Option<String>,
    /// User the recommendation is stored under.
    #[arg(long, value_name = "id", default_value = DEFAULT_USER_ID)]
    pub(crate) user_id: String,
}

/// Run the recommend command, writing the result as pretty JSON to `out`.
pub(crate) fn run_recommend(args: RecommendArgs, out: &mut impl Write) -> Result<(), CliError> {
    let draft: ContextDraft = read_json(&args.context, ARG_CONTEXT)?;
    let catalogue: Vec<BookCandidate> = read_json(&args.books, ARG_BOOKS)?;

    let mut orchestrator = Orchestrator::new(
        SliceSearch::new(catalogue),
        InMemoryStore::new(),
        CandidateScorer::new(),
    )
    .with_top_n(args.top_n);

    if let Some(url) = &args.webhook_url {
        let justifier = HttpJustificationProvider::with_config(
            HttpJustificationProviderConfig::new(url.clone()).with_user_id(args.user_id.clone()),
        )
        .map_err(|source| CliError::BuildJustifier {
            url: url.clone(),
            source,
        })?;
        orchestrator = orchestrator.with_justifier(Box::new(justifier));
    }

    let result = orchestrator.recommend(&args.user_id, &draft)?;
    write_result(&result, out)
}

fn read_json<T: serde::de::DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
        CliError::ReadInput {
            field,
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_result(result: &RecommendationResult, out: &mut impl Write) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(result).map_err(CliError::SerializeResult)?;
    writeln!(out, "{rendered}").map_err(CliError::WriteOutput)
}
