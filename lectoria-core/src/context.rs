//! Reader context: the mood, proficiency, interests, and intent describing a
//! single recommendation request.
//!
//! Callers deliver a loosely-typed [`ContextDraft`] at the boundary;
//! [`ContextDraft::validate`] collects every violated rule before the typed
//! [`ReaderContext`] enters the pipeline.

use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest accepted mood intensity.
pub const MIN_MOOD_INTENSITY: u8 = 1;
/// Highest accepted mood intensity.
pub const MAX_MOOD_INTENSITY: u8 = 5;
const DEFAULT_MOOD_INTENSITY: u8 = 3;

/// Transient emotional state of the reader.
///
/// # Examples
/// ```
/// use lectoria_core::Mood;
///
/// assert_eq!(Mood::Feliz.as_str(), "feliz");
/// assert_eq!("REFLEXIVO".parse::<Mood>(), Ok(Mood::Reflexivo));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mood {
    /// Upbeat, energetic.
    Feliz,
    /// Melancholic, seeking comfort.
    Triste,
    /// Introspective, in the mood to think.
    Reflexivo,
    /// Restless, looking for calm.
    Ansioso,
    /// No strong pull either way.
    Neutral,
}

impl Mood {
    /// Return the mood as its lowercase wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feliz => "feliz",
            Self::Triste => "triste",
            Self::Reflexivo => "reflexivo",
            Self::Ansioso => "ansioso",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feliz" => Ok(Self::Feliz),
            "triste" => Ok(Self::Triste),
            "reflexivo" => Ok(Self::Reflexivo),
            "ansioso" => Ok(Self::Ansioso),
            "neutral" => Ok(Self::Neutral),
            _ => Err(format!("unknown mood '{s}'")),
        }
    }
}

/// Reading proficiency declared by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReaderProfile {
    /// Just getting started.
    Novato,
    /// Comfortable with most material.
    Intermedio,
    /// Reads demanding texts regularly.
    Avanzado,
    /// Seeks out the hardest material.
    Experto,
}

impl ReaderProfile {
    /// Return the profile as its lowercase wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Novato => "novato",
            Self::Intermedio => "intermedio",
            Self::Avanzado => "avanzado",
            Self::Experto => "experto",
        }
    }
}

impl std::fmt::Display for ReaderProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReaderProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "novato" => Ok(Self::Novato),
            "intermedio" => Ok(Self::Intermedio),
            "avanzado" => Ok(Self::Avanzado),
            "experto" => Ok(Self::Experto),
            _ => Err(format!("unknown profile '{s}'")),
        }
    }
}

/// Why the reader wants a book right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Intent {
    /// Unwind.
    Relax,
    /// Learn something.
    Aprendizaje,
    /// Escape into a story.
    #[cfg_attr(feature = "serde", serde(rename = "evasión"))]
    Evasion,
}

impl Intent {
    /// Return the intent as its lowercase wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relax => "relax",
            Self::Aprendizaje => "aprendizaje",
            Self::Evasion => "evasión",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relax" => Ok(Self::Relax),
            "aprendizaje" => Ok(Self::Aprendizaje),
            "evasión" | "evasion" => Ok(Self::Evasion),
            _ => Err(format!("unknown intent '{s}'")),
        }
    }
}

/// Validated reader context for one scoring call.
///
/// Immutable once constructed; interests keep their original casing and are
/// matched case-insensitively downstream.
///
/// # Examples
/// ```
/// use lectoria_core::{Intent, Mood, ReaderContext, ReaderProfile};
///
/// let context = ReaderContext::new(Mood::Feliz, ReaderProfile::Novato, Intent::Evasion)
///     .with_interest("ficción")
///     .with_intensity(4);
/// assert_eq!(context.mood_intensity, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReaderContext {
    /// Current mood.
    pub mood: Mood,
    /// Mood intensity, clamped to `1..=5`.
    pub mood_intensity: u8,
    /// Reading proficiency.
    pub profile: ReaderProfile,
    /// Favourite genres and themes.
    pub interests: Vec<String>,
    /// Genres the reader does not want to see.
    pub avoided_genres: Vec<String>,
    /// Reading intent.
    pub intent: Intent,
}

impl ReaderContext {
    /// Construct a context with no interests and the default intensity.
    pub fn new(mood: Mood, profile: ReaderProfile, intent: Intent) -> Self {
        Self {
            mood,
            mood_intensity: DEFAULT_MOOD_INTENSITY,
            profile,
            interests: Vec::new(),
            avoided_genres: Vec::new(),
            intent,
        }
    }

    /// Add an interest while returning `self` for chaining.
    #[must_use]
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.push(interest.into());
        self
    }

    /// Replace the interest list while returning `self` for chaining.
    #[must_use]
    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }

    /// Add an avoided genre while returning `self` for chaining.
    #[must_use]
    pub fn with_avoided_genre(mut self, genre: impl Into<String>) -> Self {
        self.avoided_genres.push(genre.into());
        self
    }

    /// Set the mood intensity, clamped to `1..=5`.
    #[must_use]
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.mood_intensity = intensity.clamp(MIN_MOOD_INTENSITY, MAX_MOOD_INTENSITY);
        self
    }

    /// Report whether `term` matches one of the interests, ignoring case.
    ///
    /// Uses Unicode lowercasing so accented pairs such as `Ó`/`ó` compare
    /// equal.
    pub fn has_interest(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.interests
            .iter()
            .any(|interest| interest.to_lowercase() == needle)
    }
}

/// Loosely-typed reader context as delivered by callers.
///
/// Every field is optional so that validation can report all violations
/// jointly instead of failing on the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ContextDraft {
    /// Mood token, e.g. `"feliz"`.
    pub mood: Option<String>,
    /// Mood intensity; out-of-range values are clamped.
    pub mood_intensity: Option<u8>,
    /// Profile token, e.g. `"novato"`.
    pub profile: Option<String>,
    /// Favourite genres and themes.
    pub interests: Vec<String>,
    /// Genres to exclude from results.
    pub avoided_genres: Vec<String>,
    /// Intent token, e.g. `"evasión"`.
    pub intent: Option<String>,
}

/// All rules violated by a [`ContextDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid reader context: {}", errors.join(", "))]
pub struct ContextValidationError {
    /// One human-readable message per violated rule.
    pub errors: Vec<String>,
}

impl ContextDraft {
    /// Validate the draft and produce a typed [`ReaderContext`].
    ///
    /// Pure: the draft is not mutated and the same input always yields the
    /// same output.
    ///
    /// # Errors
    /// Returns [`ContextValidationError`] carrying one message per violated
    /// rule; downstream stages must not run when validation fails.
    pub fn validate(&self) -> Result<ReaderContext, ContextValidationError> {
        let mut errors = Vec::new();

        let mood = parse_field(self.mood.as_deref(), "mood is required", &mut errors);
        let profile = parse_field(self.profile.as_deref(), "profile is required", &mut errors);
        let intent = parse_field(self.intent.as_deref(), "intent is required", &mut errors);
        if self.interests.is_empty() {
            errors.push("at least one interest is required".to_owned());
        }

        match (mood, profile, intent) {
            (Some(mood), Some(profile), Some(intent)) if errors.is_empty() => {
                let context = ReaderContext::new(mood, profile, intent)
                    .with_interests(self.interests.clone())
                    .with_intensity(self.mood_intensity.unwrap_or(DEFAULT_MOOD_INTENSITY));
                Ok(ReaderContext {
                    avoided_genres: self.avoided_genres.clone(),
                    ..context
                })
            }
            _ => Err(ContextValidationError { errors }),
        }
    }
}

/// Parse an optional enum token, pushing a distinct message for a missing or
/// unknown value.
fn parse_field<T>(raw: Option<&str>, missing: &str, errors: &mut Vec<String>) -> Option<T>
where
    T: FromStr<Err = String>,
{
    match raw {
        None => {
            errors.push(missing.to_owned());
            None
        }
        Some(token) => match token.parse::<T>() {
            Ok(value) => Some(value),
            Err(message) => {
                errors.push(message);
                None
            }
        },
    }
}
