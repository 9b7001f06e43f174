//! Justification trait towards the external language-model webhook.

use thiserror::Error;

use crate::{ReaderContext, ScoredCandidate};

/// A human-readable explanation for one ranked candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Justification {
    /// Free text shown to the reader.
    pub text: String,
    /// Short list of reasons, at least one entry.
    pub key_reasons: Vec<String>,
}

/// Errors from [`JustificationProvider::justify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JustificationError {
    /// The provider did not answer within its time budget.
    #[error("justification service timed out after {timeout_secs}s")]
    Timeout {
        /// Budget that was exceeded.
        timeout_secs: u64,
    },
    /// The provider answered with a non-success HTTP status.
    #[error("justification service returned HTTP {status}: {message}")]
    Http {
        /// Status code from the service.
        status: u16,
        /// Body or client description of the failure.
        message: String,
    },
    /// The provider was unreachable.
    #[error("justification service unreachable: {message}")]
    Network {
        /// Description from the HTTP client.
        message: String,
    },
    /// The provider's response could not be decoded.
    #[error("failed to parse justification response: {message}")]
    Parse {
        /// Description from the decoder.
        message: String,
    },
    /// The provider answered but did not cover every candidate.
    #[error("justification response covered {received} of {expected} candidates")]
    Incomplete {
        /// Candidates sent to the provider.
        expected: usize,
        /// Candidates the response covered.
        received: usize,
    },
}

/// Produce one [`Justification`] per scored candidate, in input order.
///
/// The orchestrator treats any error as a signal to fall back to the local
/// justification builder; implementations must bound their own latency.
pub trait JustificationProvider: Send + Sync {
    /// Justify `candidates` for `context`.
    fn justify(
        &self,
        context: &ReaderContext,
        candidates: &[ScoredCandidate],
    ) -> Result<Vec<Justification>, JustificationError>;
}
