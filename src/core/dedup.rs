//! Occurrence deduplication.

use std::collections::HashMap;

use crate::core::term::{Term, TermOccurrence};

/// Merge raw occurrences into one [`Term`] per distinct text.
///
/// Output preserves the relative order of each text's first appearance,
/// and locations within a promoted term preserve discovery order.
/// Equality is exact string equality: no case folding, trimming or
/// Unicode normalization. With `enabled` false every occurrence passes
/// through as its own single-location term, for callers that need
/// per-occurrence fidelity.
pub fn deduplicate(occurrences: Vec<TermOccurrence>, enabled: bool) -> Vec<Term> {
    if !enabled {
        return occurrences.into_iter().map(Term::Single).collect();
    }

    // Direct text-to-slot lookup keeps duplicate merging O(1) per occurrence.
    let mut slot_by_text: HashMap<String, usize> = HashMap::new();
    let mut terms: Vec<Term> = Vec::new();

    for occurrence in occurrences {
        match slot_by_text.get(occurrence.text.as_str()) {
            Some(&slot) => terms[slot].absorb(&occurrence),
            None => {
                slot_by_text.insert(occurrence.text.clone(), terms.len());
                terms.push(Term::Single(occurrence));
            }
        }
    }

    terms
}
