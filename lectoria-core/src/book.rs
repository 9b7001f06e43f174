//! Book candidates supplied by the external search collaborator.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Difficulty tiers a candidate may declare.
///
/// Candidates without a difficulty are treated as [`Difficulty::Intermediate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Accessible to new readers.
    Beginner,
    /// The assumed tier when a candidate declares none.
    #[default]
    Intermediate,
    /// Demanding material.
    Advanced,
}

impl Difficulty {
    /// Return the difficulty as its lowercase wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("unknown difficulty '{s}'")),
        }
    }
}

/// A book eligible for scoring against a reader context.
///
/// Read-only to the engine; optional fields degrade to neutral defaults
/// rather than failing scoring.
///
/// # Examples
/// ```
/// use lectoria_core::{BookCandidate, Difficulty};
///
/// let book = BookCandidate::new("b1", "Dune", "Frank Herbert", "Ciencia Ficción")
///     .with_tags(vec!["aventura".into(), "política".into()])
///     .with_difficulty(Difficulty::Advanced);
/// assert_eq!(book.difficulty_or_default(), Difficulty::Advanced);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BookCandidate {
    /// Stable unique identifier.
    pub id: String,
    /// Title shown to the reader.
    pub title: String,
    /// Author shown to the reader.
    pub author: String,
    /// Single primary genre.
    pub genre: String,
    /// Free-form thematic tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Declared difficulty, when known.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient_difficulty")
    )]
    pub difficulty: Option<Difficulty>,
    /// Short synopsis, when available.
    #[cfg_attr(feature = "serde", serde(default))]
    pub synopsis: Option<String>,
    /// Year of first publication, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub publication_year: Option<i32>,
}

/// Accept any difficulty token on the wire, treating unknown ones as
/// absent so a malformed catalogue entry degrades to the default tier
/// instead of failing the whole payload.
#[cfg(feature = "serde")]
fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|token| token.parse().ok()))
}

impl BookCandidate {
    /// Construct a candidate with the required fields only.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            tags: Vec::new(),
            difficulty: None,
            synopsis: None,
            publication_year: None,
        }
    }

    /// Replace the tag list while returning `self` for chaining.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the declared difficulty while returning `self` for chaining.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set the synopsis while returning `self` for chaining.
    #[must_use]
    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = Some(synopsis.into());
        self
    }

    /// Set the publication year while returning `self` for chaining.
    #[must_use]
    pub fn with_publication_year(mut self, year: i32) -> Self {
        self.publication_year = Some(year);
        self
    }

    /// Declared difficulty, or [`Difficulty::Intermediate`] when absent.
    pub fn difficulty_or_default(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_difficulty_defaults_to_intermediate() {
        let book = BookCandidate::new("b1", "Rayuela", "Julio Cortázar", "ficción");
        assert_eq!(book.difficulty_or_default(), Difficulty::Intermediate);
    }

    #[rstest]
    fn difficulty_parses_wire_tokens() {
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert!("medium".parse::<Difficulty>().is_err());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn candidate_deserialises_with_optional_fields_missing() {
        let book: BookCandidate = serde_json::from_str(
            r#"{"id":"b1","title":"Rayuela","author":"Julio Cortázar","genre":"ficción"}"#,
        )
        .unwrap();
        assert!(book.tags.is_empty());
        assert!(book.difficulty.is_none());
        assert!(book.publication_year.is_none());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn unknown_difficulty_degrades_to_the_default() {
        let book: BookCandidate = serde_json::from_str(
            r#"{"id":"b1","title":"Rayuela","author":"Julio Cortázar","genre":"ficción","difficulty":"medio"}"#,
        )
        .unwrap();
        assert!(book.difficulty.is_none());
        assert_eq!(book.difficulty_or_default(), Difficulty::Intermediate);
    }
}
