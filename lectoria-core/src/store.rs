//! Persistence trait towards the external store collaborator.
//!
//! The store is the system of record for reader contexts and finished
//! recommendations; the engine itself keeps no state between calls.

use thiserror::Error;

use crate::{ReaderContext, RecommendedBook, RunMetadata};

/// Errors from [`RecommendationStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store was unreachable or rejected the write.
    #[error("store backend failed: {message}")]
    Backend {
        /// Description supplied by the store client.
        message: String,
    },
    /// No reader context exists for the user a recommendation refers to.
    #[error("no reader context stored for user '{user_id}'")]
    MissingContext {
        /// User whose context was expected.
        user_id: String,
    },
}

/// Persist reader contexts and finished recommendations.
///
/// A failed [`save_context`](RecommendationStore::save_context) is non-fatal
/// to a pipeline run; a failed
/// [`save_recommendation`](RecommendationStore::save_recommendation) is
/// fatal because callers retrieve results later by the returned id.
pub trait RecommendationStore: Send + Sync {
    /// Upsert the reader context for `user_id`.
    fn save_context(&self, user_id: &str, context: &ReaderContext) -> Result<(), StoreError>;

    /// Persist a finished ranking and return its durable identifier.
    fn save_recommendation(
        &self,
        user_id: &str,
        books: &[RecommendedBook],
        metadata: &RunMetadata,
    ) -> Result<String, StoreError>;
}
