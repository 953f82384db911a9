//! Cross-language entry alignment.

use glossa_types::{Entry, EquivalentWords, LanguageSet};
use smallvec::SmallVec;

use crate::analyzer::Tokenizer;

/// Per-entry list of counterpart tokenizations.
///
/// Inline capacity covers the usual handful of configured languages
/// without touching the heap.
pub type EquivalentsList = SmallVec<[EquivalentWords; 4]>;

/// Finds the counterpart of `reference` in one language and tokenizes it.
///
/// A linear scan for the first entry whose composite key matches; the
/// corpus is small enough that no per-language index pays for itself.
/// Returns `None` when the language has no counterpart.
#[must_use]
pub fn find_equivalent(
    tokenizer: &Tokenizer<'_>,
    language: &LanguageSet,
    reference: &Entry,
) -> Option<EquivalentWords> {
    let key = reference.key();

    language
        .entries
        .iter()
        .find(|entry| entry.key() == key)
        .map(|entry| EquivalentWords {
            code: language.code.clone(),
            words: tokenizer.tokenize(&entry.text),
        })
}

/// Collects the counterpart tokenizations of `reference` across all other
/// languages, discarding misses.
///
/// The result length is therefore at most `languages.len()`, and shorter
/// whenever some language lacks the entry.
#[must_use]
pub fn other_language_equivalents(
    tokenizer: &Tokenizer<'_>,
    languages: &[LanguageSet],
    reference: &Entry,
) -> EquivalentsList {
    languages
        .iter()
        .filter_map(|language| find_equivalent(tokenizer, language, reference))
        .collect()
}
