//! Pipeline orchestration for Lectoria book recommendations.
//!
//! One call to [`Orchestrator::recommend`] walks the whole pipeline:
//! validation, context persistence, candidate search, scoring, justification,
//! and recommendation persistence. Validation and persistence failures are
//! fatal; every other stage degrades and records its failure in the run's
//! metadata.
//!
//! The crate ships in-process backends ([`SliceSearch`], [`InMemoryStore`])
//! and an HTTP justification provider ([`HttpJustificationProvider`]) that
//! posts ranked candidates to an external workflow webhook and falls back to
//! the local justification builder on any failure.

#![forbid(unsafe_code)]

mod diagnostics;
mod memory;
mod orchestrator;
mod webhook;

pub use diagnostics::{Diagnostics, stage};
pub use memory::{DEFAULT_SEARCH_LIMIT, InMemoryStore, SliceSearch, StoredRecommendation};
pub use orchestrator::{OrchestrationError, Orchestrator};
pub use webhook::{
    DEFAULT_USER_AGENT, HttpJustificationProvider, HttpJustificationProviderConfig,
    ProviderBuildError,
};
