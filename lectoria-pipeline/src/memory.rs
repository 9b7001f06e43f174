//! In-process search and store backends.
//!
//! [`SliceSearch`] serves an owned catalogue; [`InMemoryStore`] keeps
//! contexts and recommendations behind a mutex. Both are the default
//! backends for the CLI and for tests; production deployments substitute
//! their own [`CandidateSearch`] and [`RecommendationStore`] implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use lectoria_core::{
    BookCandidate, CandidateSearch, ReaderContext, RecommendationStore, RecommendedBook,
    RunMetadata, SearchError, StoreError,
};

/// Default cap on candidates returned by [`SliceSearch`].
pub const DEFAULT_SEARCH_LIMIT: usize = 30;

/// [`CandidateSearch`] over an owned, in-memory catalogue.
///
/// A candidate matches when its genre or any tag equals one of the
/// context's interests, ignoring case. Candidates whose genre is among the
/// context's avoided genres are excluded before matching. At most
/// [`DEFAULT_SEARCH_LIMIT`] candidates are returned, in catalogue order.
#[derive(Debug, Clone)]
pub struct SliceSearch {
    catalogue: Vec<BookCandidate>,
    limit: usize,
}

impl SliceSearch {
    /// Serve the given catalogue with the default limit.
    #[must_use]
    pub fn new(catalogue: Vec<BookCandidate>) -> Self {
        Self {
            catalogue,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Override the candidate cap.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn matches(book: &BookCandidate, context: &ReaderContext) -> bool {
        context.has_interest(&book.genre) || book.tags.iter().any(|tag| context.has_interest(tag))
    }

    fn avoided(book: &BookCandidate, context: &ReaderContext) -> bool {
        let genre = book.genre.to_lowercase();
        context
            .avoided_genres
            .iter()
            .any(|avoided| avoided.to_lowercase() == genre)
    }
}

impl CandidateSearch for SliceSearch {
    fn search(&self, context: &ReaderContext) -> Result<Vec<BookCandidate>, SearchError> {
        Ok(self
            .catalogue
            .iter()
            .filter(|book| !Self::avoided(book, context))
            .filter(|book| Self::matches(book, context))
            .take(self.limit)
            .cloned()
            .collect())
    }
}

/// A recommendation as the in-memory store retains it.
#[derive(Debug, Clone)]
pub struct StoredRecommendation {
    /// Identifier returned to the caller.
    pub id: String,
    /// User the recommendation was produced for.
    pub user_id: String,
    /// The ranked books.
    pub books: Vec<RecommendedBook>,
    /// Diagnostics for the producing run.
    pub metadata: RunMetadata,
}

#[derive(Debug, Default)]
struct StoreState {
    contexts: HashMap<String, ReaderContext>,
    recommendations: Vec<StoredRecommendation>,
}

/// [`RecommendationStore`] backed by process memory.
///
/// Recommendation ids are `rec-1`, `rec-2`, … in insertion order. Saving a
/// recommendation for a user without a stored context fails with
/// [`StoreError::MissingContext`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored context for `user_id`, if any.
    #[must_use]
    pub fn context_for(&self, user_id: &str) -> Option<ReaderContext> {
        self.lock_state().contexts.get(user_id).cloned()
    }

    /// Snapshot of the stored recommendations, oldest first.
    #[must_use]
    pub fn recommendations(&self) -> Vec<StoredRecommendation> {
        self.lock_state().recommendations.clone()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, StoreState> {
        // A poisoned mutex only means another thread panicked mid-write;
        // the map of plain values is still usable.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl RecommendationStore for InMemoryStore {
    fn save_context(&self, user_id: &str, context: &ReaderContext) -> Result<(), StoreError> {
        self.lock_state()
            .contexts
            .insert(user_id.to_owned(), context.clone());
        Ok(())
    }

    fn save_recommendation(
        &self,
        user_id: &str,
        books: &[RecommendedBook],
        metadata: &RunMetadata,
    ) -> Result<String, StoreError> {
        let mut state = self.lock_state();
        if !state.contexts.contains_key(user_id) {
            return Err(StoreError::MissingContext {
                user_id: user_id.to_owned(),
            });
        }
        let id = format!("rec-{}", state.recommendations.len() + 1);
        state.recommendations.push(StoredRecommendation {
            id: id.clone(),
            user_id: user_id.to_owned(),
            books: books.to_vec(),
            metadata: metadata.clone(),
        });
        Ok(id)
    }
}
