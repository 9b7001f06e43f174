//! The recommendation pipeline: validate, search, score, justify, persist.

use lectoria_core::{
    BookCandidate, CandidateSearch, ContextDraft, ContextValidationError, Justification,
    ReaderContext, RecommendationResult, RecommendationStore, RecommendedBook, RunMetadata,
    ScoredCandidate, Scorer, StoreError,
};
use lectoria_scorer::{DEFAULT_TOP_N, build_justification, rank};
use log::warn;
use thiserror::Error;

use crate::diagnostics::{Diagnostics, stage};

/// Fatal pipeline failures.
///
/// Everything else (context persistence, search, the remote justifier)
/// degrades: the run continues and the failure is recorded in
/// [`RunMetadata::errors`].
#[derive(Debug, Error)]
pub enum OrchestrationError {
    /// The input draft failed validation; nothing ran.
    #[error("context validation failed")]
    Validation {
        /// The collected violations.
        #[source]
        source: ContextValidationError,
    },
    /// The finished ranking could not be persisted.
    ///
    /// The computed books and metadata are carried so callers can surface
    /// or retry the result despite the store failure.
    #[error("failed to persist recommendation")]
    Persistence {
        /// The store failure.
        #[source]
        source: StoreError,
        /// The ranking that could not be saved.
        books: Vec<RecommendedBook>,
        /// Diagnostics for the failed run.
        metadata: RunMetadata,
    },
}

/// Drives one recommendation run across the pipeline stages.
///
/// The search, store, and scorer collaborators are fixed at construction;
/// a remote justification provider is optional and falls back to the local
/// builder on any failure.
pub struct Orchestrator<S, R, C> {
    search: S,
    store: R,
    scorer: C,
    justifier: Option<Box<dyn lectoria_core::JustificationProvider>>,
    top_n: usize,
}

impl<S, R, C> std::fmt::Debug for Orchestrator<S, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("justifier", &self.justifier.is_some())
            .field("top_n", &self.top_n)
            .finish_non_exhaustive()
    }
}

impl<S, R, C> Orchestrator<S, R, C>
where
    S: CandidateSearch,
    R: RecommendationStore,
    C: Scorer,
{
    /// Build an orchestrator over the given collaborators.
    ///
    /// Justification defaults to the local builder; the ranking length
    /// defaults to [`DEFAULT_TOP_N`].
    pub fn new(search: S, store: R, scorer: C) -> Self {
        Self {
            search,
            store,
            scorer,
            justifier: None,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Use a remote justification provider, falling back to the local
    /// builder when it fails.
    #[must_use]
    pub fn with_justifier(
        mut self,
        justifier: Box<dyn lectoria_core::JustificationProvider>,
    ) -> Self {
        self.justifier = Some(justifier);
        self
    }

    /// Override the number of recommendations returned.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Run the pipeline for `user_id` over the given draft.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestrationError::Validation`] when the draft is invalid
    /// and [`OrchestrationError::Persistence`] when the finished ranking
    /// cannot be saved. All other stage failures degrade and are recorded
    /// in the result's metadata.
    pub fn recommend(
        &self,
        user_id: &str,
        draft: &ContextDraft,
    ) -> Result<RecommendationResult, OrchestrationError> {
        let mut diagnostics = Diagnostics::start();

        diagnostics.record_agent(stage::VALIDATION);
        let context = draft
            .validate()
            .map_err(|source| OrchestrationError::Validation { source })?;

        diagnostics.record_agent(stage::CONTEXT);
        if let Err(err) = self.store.save_context(user_id, &context) {
            warn!("context persistence failed for '{user_id}': {err}");
            diagnostics.record_error(format!("context: {err}"));
        }

        diagnostics.record_agent(stage::SEARCH);
        let candidates = self.search_candidates(&context, &mut diagnostics);

        diagnostics.record_agent(stage::SCORING);
        let ranking = rank(&self.scorer, &candidates, &context, self.top_n);

        diagnostics.record_agent(stage::JUSTIFIER);
        let justifications = self.justify(&context, &ranking, &mut diagnostics);

        let books = assemble_books(&ranking, justifications);
        let total_score = mean_score(&ranking);

        diagnostics.record_agent(stage::PERSISTENCE);
        let metadata = diagnostics.finish(total_score);
        match self.store.save_recommendation(user_id, &books, &metadata) {
            Ok(recommendation_id) => Ok(RecommendationResult {
                recommendation_id,
                books,
                metadata,
            }),
            Err(source) => Err(OrchestrationError::Persistence {
                source,
                books,
                metadata,
            }),
        }
    }

    fn search_candidates(
        &self,
        context: &ReaderContext,
        diagnostics: &mut Diagnostics,
    ) -> Vec<BookCandidate> {
        match self.search.search(context) {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!("candidate search failed: {err}");
                diagnostics.record_error(format!("search: {err}"));
                Vec::new()
            }
        }
    }

    fn justify(
        &self,
        context: &ReaderContext,
        ranking: &[ScoredCandidate],
        diagnostics: &mut Diagnostics,
    ) -> Vec<Justification> {
        if let Some(justifier) = &self.justifier {
            match justifier.justify(context, ranking) {
                Ok(justifications) if justifications.len() == ranking.len() => {
                    return justifications;
                }
                Ok(justifications) => {
                    warn!(
                        "justifier covered {} of {} candidates; using local fallback",
                        justifications.len(),
                        ranking.len()
                    );
                    diagnostics
                        .record_error("justifier: incomplete response; using local fallback");
                }
                Err(err) => {
                    warn!("justifier failed: {err}; using local fallback");
                    diagnostics.record_error(format!("justifier: {err}; using local fallback"));
                }
            }
        }

        ranking
            .iter()
            .map(|candidate| build_justification(candidate, context))
            .collect()
    }
}

fn assemble_books(
    ranking: &[ScoredCandidate],
    justifications: Vec<Justification>,
) -> Vec<RecommendedBook> {
    ranking
        .iter()
        .zip(justifications)
        .map(|(candidate, justification)| RecommendedBook {
            book_id: candidate.book.id.clone(),
            title: candidate.book.title.clone(),
            author: candidate.book.author.clone(),
            genre: candidate.book.genre.clone(),
            score: candidate.score,
            score_breakdown: candidate.breakdown,
            justification: justification.text,
            key_reasons: justification.key_reasons,
        })
        .collect()
}

/// Mean composite score across the ranking, `0.0` when empty.
fn mean_score(ranking: &[ScoredCandidate]) -> f32 {
    if ranking.is_empty() {
        return 0.0;
    }
    let sum: f32 = ranking.iter().map(|candidate| candidate.score).sum();
    #[expect(
        clippy::cast_precision_loss,
        reason = "rankings are far smaller than f32 mantissa precision"
    )]
    let count = ranking.len() as f32;
    sum / count
}
