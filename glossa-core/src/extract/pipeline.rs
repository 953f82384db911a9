//! Dictionary fold and output deduplication.

use glossa_types::LanguageSet;
use rustc_hash::FxHashSet;

use crate::analyzer::Tokenizer;
use crate::extract::extractor::common_words;
use crate::extract::stats::ExtractStats;

/// Folds the whole reference language into the deduplicated dictionary.
///
/// Iterates `main`'s entries in file order, concatenating each entry's
/// [`common_words`] contribution, then collapses the accumulation to one
/// occurrence per word. First-seen order is kept so unchanged input yields
/// byte-identical output; only set semantics are contractual.
///
/// `on_block(entries_done)` fires after every `block_size` entries for
/// progress reporting and has no effect on the result; `block_size == 0`
/// disables it.
pub fn extract_dictionary<F>(
    main: &LanguageSet,
    other_languages: &[LanguageSet],
    tokenizer: &Tokenizer<'_>,
    block_size: usize,
    mut on_block: F,
) -> (Vec<String>, ExtractStats)
where
    F: FnMut(usize),
{
    let mut collected: Vec<String> = Vec::new();
    let mut entries_contributing = 0usize;

    for (index, entry) in main.entries.iter().enumerate() {
        let words = common_words(tokenizer, other_languages, entry);
        if !words.is_empty() {
            entries_contributing += 1;
        }
        collected.extend(words);

        if block_size > 0 && (index + 1) % block_size == 0 {
            on_block(index + 1);
        }
    }

    let words_collected = collected.len();

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut dictionary: Vec<String> = Vec::new();
    for word in collected {
        if !seen.contains(&word) {
            seen.insert(word.clone());
            dictionary.push(word);
        }
    }

    let stats = ExtractStats {
        entries_processed: main.entries.len(),
        entries_contributing,
        words_collected,
        unique_words: dictionary.len(),
    };

    (dictionary, stats)
}
