//! Candidate search trait towards the external catalogue collaborator.

use thiserror::Error;

use crate::{BookCandidate, ReaderContext};

/// Errors from [`CandidateSearch::search`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The search backend was unreachable or rejected the query.
    #[error("search backend failed: {message}")]
    Backend {
        /// Description supplied by the backend client.
        message: String,
    },
}

/// Find candidate books matching a reader's interests.
///
/// An empty result is not an error; it merely yields an empty ranking
/// downstream. Implementations should exclude the context's avoided genres.
pub trait CandidateSearch: Send + Sync {
    /// Return candidates whose genre or tags match the context's interests.
    fn search(&self, context: &ReaderContext) -> Result<Vec<BookCandidate>, SearchError>;
}
