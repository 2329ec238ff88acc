//! Extracted term representations.
//!
//! A [`TermOccurrence`] is one raw discovery of qualifying text at a
//! specific file/argument position. Deduplication folds occurrences into
//! [`Term`]s: a term stays in its single-location form until a second
//! occurrence of the same text promotes it, once, to the multi-location
//! form.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One raw discovery of a qualifying text, prior to deduplication.
///
/// `text` is non-empty and passed script detection when the occurrence
/// was created; it is never re-validated downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermOccurrence {
    pub text: String,
    #[serde(rename = "file")]
    pub source_file: String,
    /// Zero-based position of the argument in the call.
    pub argument_index: usize,
    pub discovered_at: DateTime<Utc>,
}

/// A file/argument position a term was discovered at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermLocation {
    #[serde(rename = "file")]
    pub source_file: String,
    pub argument_index: usize,
}

impl From<&TermOccurrence> for TermLocation {
    fn from(occurrence: &TermOccurrence) -> Self {
        Self {
            source_file: occurrence.source_file.clone(),
            argument_index: occurrence.argument_index,
        }
    }
}

/// A deduplicated term: one per distinct text per extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Term {
    Single(TermOccurrence),
    #[serde(rename_all = "camelCase")]
    Multi {
        text: String,
        locations: Vec<TermLocation>,
    },
}

impl Term {
    pub fn text(&self) -> &str {
        match self {
            Term::Single(occurrence) => &occurrence.text,
            Term::Multi { text, .. } => text,
        }
    }

    /// All locations this term was discovered at, in discovery order.
    pub fn locations(&self) -> Vec<TermLocation> {
        match self {
            Term::Single(occurrence) => vec![TermLocation::from(occurrence)],
            Term::Multi { locations, .. } => locations.clone(),
        }
    }

    /// Fold another occurrence of the same text into this term.
    ///
    /// The second occurrence promotes a `Single` to `Multi`, seeding the
    /// location list with the original position; later occurrences append.
    /// Promotion is one-directional and the single-location timestamp is
    /// dropped with the single-location form.
    pub(crate) fn absorb(&mut self, occurrence: &TermOccurrence) {
        debug_assert_eq!(self.text(), occurrence.text);
        match self {
            Term::Single(first) => {
                *self = Term::Multi {
                    text: first.text.clone(),
                    locations: vec![TermLocation::from(&*first), TermLocation::from(occurrence)],
                };
            }
            Term::Multi { locations, .. } => locations.push(TermLocation::from(occurrence)),
        }
    }
}
