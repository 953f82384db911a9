//! Entry normalization.
//!
//! First stage of the pipeline. Raw entries arrive with two artifacts the
//! matcher must never see:
//!
//! - entries under denylisted ids (known-bad records in the corpus)
//! - literal break escapes, the four-character sequences `\n\n` and
//!   `\r\n` embedded verbatim in entry text
//!
//! The normalizer drops the former and rewrites the latter into the
//! space-delimited `${newline}` placeholder, which the tokenizer later
//! excludes from word comparison. New [`Entry`] values are constructed
//! rather than patched in place, so per-language normalization can run on
//! worker threads without aliasing.

use glossa_types::{Entry, LanguageSet};

/// The marker substituted for a recognized break escape.
///
/// Drivers register this with the tokenizer's placeholder denylist so it
/// never surfaces as a word.
pub const NEWLINE_PLACEHOLDER: &str = "${newline}";

const DOUBLE_NEWLINE_ESCAPE: &str = "\\n\\n";
const CARRIAGE_NEWLINE_ESCAPE: &str = "\\r\\n";
const PLACEHOLDER_PADDED: &str = " ${newline} ";

/// Entry normalizer - denylist filtering plus break-escape rewriting.
#[derive(Debug, Clone, Copy)]
pub struct EntryNormalizer<'a> {
    denylist: &'a [&'a str],
}

impl<'a> EntryNormalizer<'a> {
    /// Creates a normalizer that drops entries with the given ids.
    #[inline]
    pub const fn new(denylist: &'a [&'a str]) -> Self {
        Self { denylist }
    }

    /// Normalizes one language's raw entries into an immutable
    /// [`LanguageSet`].
    ///
    /// Entry order is preserved; absent escapes and an empty denylist are
    /// no-ops.
    #[must_use]
    pub fn normalize(&self, code: &str, raw: Vec<Entry>) -> LanguageSet {
        let entries = raw
            .into_iter()
            .filter(|entry| !self.denylist.contains(&entry.id.as_str()))
            .map(|entry| {
                let Entry {
                    id,
                    index,
                    unknown,
                    text,
                } = entry;
                Entry {
                    id,
                    index,
                    unknown,
                    text: rewrite_break_escapes(text),
                }
            })
            .collect();

        LanguageSet {
            code: code.to_owned(),
            entries,
        }
    }
}

/// Replaces every `\n\n` and `\r\n` escape with ` ${newline} `.
///
/// The double-newline rewrite runs first, matching the order the corpus
/// tooling historically applied.
fn rewrite_break_escapes(text: String) -> String {
    if !text.contains('\\') {
        return text;
    }

    text.replace(DOUBLE_NEWLINE_ESCAPE, PLACEHOLDER_PADDED)
        .replace(CARRIAGE_NEWLINE_ESCAPE, PLACEHOLDER_PADDED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Tokenizer;

    const DENYLIST: &[&str] = &["3427285", "242841733"];

    fn normalize(raw: Vec<Entry>) -> LanguageSet {
        EntryNormalizer::new(DENYLIST).normalize("en", raw)
    }

    #[test]
    fn denylisted_ids_removed() {
        let set = normalize(vec![
            Entry::new("1", "0", "", "keep me"),
            Entry::new("3427285", "0", "", "drop me"),
            Entry::new("2", "0", "", "keep me too"),
            Entry::new("242841733", "5", "x", "drop me too"),
        ]);

        let ids: Vec<&str> = set.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn empty_denylist_keeps_everything() {
        let set = EntryNormalizer::new(&[]).normalize(
            "en",
            vec![Entry::new("3427285", "0", "", "kept under empty denylist")],
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn double_newline_escape_rewritten() {
        let set = normalize(vec![Entry::new("1", "0", "", r"first\n\nsecond")]);
        assert_eq!(set.entries[0].text, "first ${newline} second");
    }

    #[test]
    fn carriage_newline_escape_rewritten() {
        let set = normalize(vec![Entry::new("1", "0", "", r"first\r\nsecond")]);
        assert_eq!(set.entries[0].text, "first ${newline} second");
    }

    #[test]
    fn multiple_escapes_all_rewritten() {
        let set = normalize(vec![Entry::new("1", "0", "", r"a\n\nb\r\nc\n\nd")]);
        assert_eq!(
            set.entries[0].text,
            "a ${newline} b ${newline} c ${newline} d"
        );
    }

    #[test]
    fn single_newline_escape_untouched() {
        let set = normalize(vec![Entry::new("1", "0", "", r"one\ntwo")]);
        assert_eq!(set.entries[0].text, r"one\ntwo");
    }

    #[test]
    fn text_without_escapes_untouched() {
        let set = normalize(vec![Entry::new("1", "0", "", "plain text")]);
        assert_eq!(set.entries[0].text, "plain text");
    }

    #[test]
    fn entry_order_preserved() {
        let set = normalize(vec![
            Entry::new("b", "0", "", "second id first"),
            Entry::new("a", "0", "", "first id second"),
        ]);
        assert_eq!(set.entries[0].id, "b");
        assert_eq!(set.entries[1].id, "a");
    }

    #[test]
    fn language_code_recorded() {
        let set = EntryNormalizer::new(&[]).normalize("fr", Vec::new());
        assert_eq!(set.code, "fr");
        assert!(set.is_empty());
    }

    #[test]
    fn no_raw_escape_survives_into_tokens() {
        let set = normalize(vec![Entry::new("1", "0", "", r"above\n\nbelow")]);
        let tokenizer = Tokenizer::new(&[NEWLINE_PLACEHOLDER]);
        let words = tokenizer.tokenize(&set.entries[0].text);

        assert_eq!(words, ["above", "below"]);
        assert!(words.iter().all(|w| !w.contains("\\n")));
        assert!(words.iter().all(|w| w != NEWLINE_PLACEHOLDER));
    }
}
