use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── SET SOURCES ───────────────────────────────────────────────────────────────
//

/// A labelled question set and the path its source serves it from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSource {
    pub label: String,
    pub path: String,
}

impl SetSource {
    #[must_use]
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The quiz sets on offer, plus which of them make up the aggregate ("large") quiz.
///
/// The aggregate is always the first `aggregate_count` sets, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCatalog {
    sets: Vec<SetSource>,
    aggregate_count: usize,
    aggregate_label: String,
}

impl QuizCatalog {
    pub const DEFAULT_SET_COUNT: usize = 30;
    pub const DEFAULT_AGGREGATE_COUNT: usize = 20;

    /// Build a catalog from explicit sources.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` with no sets, `CatalogError::DuplicateLabel` when two
    /// sets share a label, and `CatalogError::AggregateOutOfRange` when the aggregate would be
    /// empty or reach past the end of the list.
    pub fn new(sets: Vec<SetSource>, aggregate_count: usize) -> Result<Self, CatalogError> {
        if sets.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut labels = HashSet::new();
        for set in &sets {
            if set.label.trim().is_empty() {
                return Err(CatalogError::EmptyLabel);
            }
            if !labels.insert(set.label.as_str()) {
                return Err(CatalogError::DuplicateLabel {
                    label: set.label.clone(),
                });
            }
        }

        if aggregate_count == 0 || aggregate_count > sets.len() {
            return Err(CatalogError::AggregateOutOfRange {
                count: aggregate_count,
                sets: sets.len(),
            });
        }

        let aggregate_label = default_aggregate_label(&sets[..aggregate_count]);
        Ok(Self {
            sets,
            aggregate_count,
            aggregate_label,
        })
    }

    /// `count` sets named `Set N`, served from `/assets/questionsN.json`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`QuizCatalog::new`].
    pub fn numbered(count: usize, aggregate_count: usize) -> Result<Self, CatalogError> {
        Self::new(numbered_sources(count), aggregate_count)
    }

    /// Override the label shown for the aggregate quiz.
    #[must_use]
    pub fn with_aggregate_label(mut self, label: impl Into<String>) -> Self {
        self.aggregate_label = label.into();
        self
    }

    #[must_use]
    pub fn sets(&self) -> &[SetSource] {
        &self.sets
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SetSource> {
        self.sets.get(index)
    }

    #[must_use]
    pub fn aggregate_sources(&self) -> &[SetSource] {
        &self.sets[..self.aggregate_count]
    }

    #[must_use]
    pub fn aggregate_label(&self) -> &str {
        &self.aggregate_label
    }

    /// Human label for a choice, or `None` if it points past the catalog.
    #[must_use]
    pub fn label_for(&self, choice: QuizChoice) -> Option<&str> {
        match choice {
            QuizChoice::Set(index) => self.get(index).map(|set| set.label.as_str()),
            QuizChoice::Aggregate => Some(self.aggregate_label()),
        }
    }
}

impl Default for QuizCatalog {
    fn default() -> Self {
        let sets = numbered_sources(Self::DEFAULT_SET_COUNT);
        let aggregate_label = default_aggregate_label(&sets[..Self::DEFAULT_AGGREGATE_COUNT]);
        Self {
            sets,
            aggregate_count: Self::DEFAULT_AGGREGATE_COUNT,
            aggregate_label,
        }
    }
}

/// `Large Quiz (Sets 1-20)` for numbered sets, `Large Quiz (Intro - Deep)` otherwise.
fn default_aggregate_label(sources: &[SetSource]) -> String {
    let (Some(first), Some(last)) = (sources.first(), sources.last()) else {
        return "Large Quiz".to_string();
    };
    if sources.len() == 1 {
        return format!("Large Quiz ({})", first.label);
    }
    match (first.label.strip_prefix("Set "), last.label.strip_prefix("Set ")) {
        (Some(from), Some(to)) => format!("Large Quiz (Sets {from}-{to})"),
        _ => format!("Large Quiz ({} - {})", first.label, last.label),
    }
}

fn numbered_sources(count: usize) -> Vec<SetSource> {
    (1..=count)
        .map(|n| SetSource::new(format!("Set {n}"), format!("/assets/questions{n}.json")))
        .collect()
}

/// Serialized catalog, as read from a config file.
///
/// ```json
/// { "sets": [{ "label": "Set 1", "path": "/assets/questions1.json" }], "aggregateCount": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    pub sets: Vec<SetSource>,
    #[serde(default)]
    pub aggregate_count: Option<usize>,
    #[serde(default)]
    pub aggregate_label: Option<String>,
}

impl CatalogConfig {
    /// Validate into a catalog. A missing `aggregateCount` covers every set.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the listed sets do not form a valid catalog.
    pub fn into_catalog(self) -> Result<QuizCatalog, CatalogError> {
        let aggregate_count = self.aggregate_count.unwrap_or(self.sets.len());
        let catalog = QuizCatalog::new(self.sets, aggregate_count)?;
        Ok(match self.aggregate_label {
            Some(label) => catalog.with_aggregate_label(label),
            None => catalog,
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no quiz sets")]
    Empty,

    #[error("quiz set label cannot be empty")]
    EmptyLabel,

    #[error("duplicate quiz set label: {label}")]
    DuplicateLabel { label: String },

    #[error("aggregate of {count} sets does not fit a catalog of {sets}")]
    AggregateOutOfRange { count: usize, sets: usize },
}

//
// ─── CHOICE ────────────────────────────────────────────────────────────────────
//

/// Which quiz the user picked: one catalog set (0-based index) or the aggregate.
///
/// Renders as `set-<n>` (1-based) or `large`, which is also what `FromStr` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizChoice {
    Set(usize),
    Aggregate,
}

impl fmt::Display for QuizChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizChoice::Set(index) => write!(f, "set-{}", index + 1),
            QuizChoice::Aggregate => f.write_str("large"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown quiz choice: {raw}")]
pub struct ChoiceParseError {
    pub raw: String,
}

impl FromStr for QuizChoice {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ChoiceParseError { raw: s.to_string() };
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("large") {
            return Ok(QuizChoice::Aggregate);
        }
        let number = trimmed
            .strip_prefix("set-")
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(err)?;
        number.checked_sub(1).map(QuizChoice::Set).ok_or_else(err)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
