//! Common-word extraction and the inclusion policy.

use glossa_types::{Entry, LanguageSet};

use crate::analyzer::Tokenizer;
use crate::extract::aligner::other_language_equivalents;

/// Computes the words of `reference` shared by every available counterpart,
/// subject to the inclusion policy.
///
/// A word is kept iff it is a member of the token set of *every* aligned
/// counterpart. Duplicate reference words are tested and kept
/// independently. Languages without a counterpart entry do not constrain
/// the test; an entry with *zero* aligned counterparts contributes nothing
/// (membership over an empty set would otherwise be vacuously true and
/// leak whole entries into the dictionary).
///
/// The kept sequence is returned only when it is a *proper*, non-empty
/// subset of the reference words: some overlap, but not total. Wholly
/// identical entries are generic phrases rather than invariant terms, and
/// entries with no overlap share nothing worth keeping; both return the
/// empty sequence.
#[must_use]
pub fn common_words(
    tokenizer: &Tokenizer<'_>,
    other_languages: &[LanguageSet],
    reference: &Entry,
) -> Vec<String> {
    let reference_words = tokenizer.tokenize(&reference.text);
    let equivalents = other_language_equivalents(tokenizer, other_languages, reference);

    if equivalents.is_empty() {
        return Vec::new();
    }

    let kept: Vec<String> = reference_words
        .iter()
        .filter(|word| {
            equivalents
                .iter()
                .all(|counterpart| counterpart.words.iter().any(|w| w == *word))
        })
        .cloned()
        .collect();

    if !kept.is_empty() && kept.len() < reference_words.len() {
        kept
    } else {
        Vec::new()
    }
}
