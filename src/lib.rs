//! Facade crate for the Lectoria recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the scorer and
//! pipeline implementations behind feature flags.

#![forbid(unsafe_code)]

pub use lectoria_core::{
    BookCandidate, CandidateSearch, ContextDraft, ContextValidationError, Difficulty, Intent,
    Justification, JustificationError, JustificationProvider, Mood, Ranking, ReaderContext,
    ReaderProfile, RecommendationResult, RecommendationStore, RecommendedBook, RunMetadata,
    ScoreBreakdown, ScoredCandidate, Scorer, SearchError, StoreError,
};

#[cfg(feature = "scorer")]
pub use lectoria_scorer::{
    CandidateScorer, DEFAULT_TOP_N, LocalJustifier, ScoreWeights, WeightsError,
    build_justification, rank,
};

#[cfg(feature = "pipeline")]
pub use lectoria_pipeline::{
    HttpJustificationProvider, HttpJustificationProviderConfig, InMemoryStore, OrchestrationError,
    Orchestrator, SliceSearch,
};
