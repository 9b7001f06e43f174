//! Command-line interface for the Lectoria recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;
use recommend::RecommendArgs;

/// Run the Lectoria CLI with the current process arguments.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, input loading, or the
/// pipeline itself fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => {
            let mut stdout = std::io::stdout().lock();
            recommend::run_recommend(args, &mut stdout)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "lectoria",
    about = "Book recommendations from a reader context and a catalogue",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a catalogue for one reader context.
    Recommend(RecommendArgs),
}
