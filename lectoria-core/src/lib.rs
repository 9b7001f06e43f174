//! Core domain types for the Lectoria recommendation engine.
//!
//! The crate defines the reader context, book candidates, score shapes, and
//! the traits at the seams towards external collaborators (search, storage,
//! and justification). Constructors and the context validator return
//! `Result` to surface invalid input early; scoring itself is infallible.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod book;
mod context;
mod justify;
mod recommend;
mod score;
mod search;
mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use book::{BookCandidate, Difficulty};
pub use context::{
    ContextDraft, ContextValidationError, Intent, Mood, ReaderContext, ReaderProfile,
};
pub use justify::{Justification, JustificationError, JustificationProvider};
pub use recommend::{RecommendationResult, RecommendedBook, RunMetadata};
pub use score::{Ranking, ScoreBreakdown, ScoredCandidate, Scorer};
pub use search::{CandidateSearch, SearchError};
pub use store::{RecommendationStore, StoreError};
