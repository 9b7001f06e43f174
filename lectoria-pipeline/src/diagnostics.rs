//! Per-run diagnostics: stage bookkeeping and elapsed time.

use std::time::Instant;

use lectoria_core::RunMetadata;

/// Pipeline stage names recorded in [`RunMetadata::agents_used`].
pub mod stage {
    /// Input validation.
    pub const VALIDATION: &str = "validation";
    /// Context normalisation and persistence.
    pub const CONTEXT: &str = "context";
    /// Candidate search.
    pub const SEARCH: &str = "search";
    /// Scoring and ranking.
    pub const SCORING: &str = "scoring";
    /// Justification, remote or local.
    pub const JUSTIFIER: &str = "justifier";
    /// Recommendation persistence.
    pub const PERSISTENCE: &str = "persistence";
}

/// Accumulates the stages a run passed through and the non-fatal errors it
/// survived.
///
/// Construction starts the clock; [`Diagnostics::finish`] stamps the
/// elapsed time into the produced [`RunMetadata`].
#[derive(Debug)]
pub struct Diagnostics {
    started: Instant,
    agents: Vec<String>,
    errors: Vec<String>,
}

impl Diagnostics {
    /// Start diagnostics for a new run.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            agents: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Record that a stage ran.
    pub fn record_agent(&mut self, name: &str) {
        self.agents.push(name.to_owned());
    }

    /// Record a non-fatal error the run recovered from.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Non-fatal errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Milliseconds elapsed since the run started.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Finalise into run metadata with the given mean composite score.
    #[must_use]
    pub fn finish(self, total_score: f32) -> RunMetadata {
        RunMetadata {
            total_score,
            processing_time_ms: self.elapsed_ms(),
            agents_used: self.agents,
            errors: self.errors,
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::start()
    }
}
