//! Translation-map filtering.
//!
//! The translation map is read-only external state supplied by the
//! caller (see `crate::locales` for the file-backed loader); the filter
//! itself is a pure pass over the final terms. Absence of a map never
//! drops terms.

use std::collections::HashMap;

use crate::core::term::Term;

#[derive(Debug, Clone, Default)]
pub struct TranslationMap {
    entries: HashMap<String, String>,
}

impl TranslationMap {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A text counts as translated only if it has an entry whose value is
    /// non-blank after trimming.
    pub fn is_translated(&self, text: &str) -> bool {
        self.entries
            .get(text)
            .is_some_and(|translated| !translated.trim().is_empty())
    }
}

/// Drop terms whose text already has a translation.
///
/// Without a map every term passes through unchanged; order is preserved
/// either way.
pub fn filter_untranslated(terms: Vec<Term>, map: Option<&TranslationMap>) -> Vec<Term> {
    let Some(map) = map else {
        return terms;
    };
    terms
        .into_iter()
        .filter(|term| !map.is_translated(term.text()))
        .collect()
}
