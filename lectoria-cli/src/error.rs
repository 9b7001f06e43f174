//! Error types emitted by the Lectoria CLI.

use camino::Utf8PathBuf;
use lectoria_pipeline::{OrchestrationError, ProviderBuildError};
use thiserror::Error;

/// Errors emitted by the Lectoria CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// A referenced input path could not be read.
    #[error("failed to read {field} file {path:?}: {source}")]
    ReadInput {
        /// Which flag the path came from.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
        /// The underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An input file held JSON that could not be decoded.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Which flag the path came from.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
        /// The underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Constructing the webhook justification provider failed.
    #[error("failed to build justifier for {url:?}: {source}")]
    BuildJustifier {
        /// Webhook URL the provider was built for.
        url: String,
        /// The underlying build failure.
        #[source]
        source: ProviderBuildError,
    },
    /// The recommendation pipeline failed fatally.
    #[error(transparent)]
    Recommendation(#[from] OrchestrationError),
    /// Serialising the recommendation result failed.
    #[error("failed to serialize recommendation result: {0}")]
    SerializeResult(#[source] serde_json::Error),
    /// Writing the result to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
