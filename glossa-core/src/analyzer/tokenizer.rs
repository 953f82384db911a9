//! Word Tokenizer Module
//!
//! This module splits an entry's text into the word tokens that the
//! cross-language matcher compares. It's the last preparation stage before
//! matching: entry text goes in, a clean sequence of comparable words comes
//! out.
//!
//! ## What It Does
//!
//! Given `"Hyperion betrayed us."`, it emits:
//!
//! ```ignore
//! "Hyperion"
//! "betrayed"
//! "us"
//! ```
//!
//! Three things happen on the way:
//!
//! 1. A fixed set of punctuation characters (period, comma, horizontal
//!    ellipsis) is removed. Removal substitutes nothing: two words joined
//!    only by a stripped character and no space merge into one token
//!    (`"end.Start"` → `"endStart"`). The merged token simply never matches
//!    across languages unless it is itself invariant.
//! 2. The result is split on single ASCII spaces; runs of spaces produce
//!    empty fragments, which are dropped.
//! 3. Tokens exactly equal to a known placeholder marker (the rewritten
//!    break escapes, see [`super::normalizer`]) are dropped.
//!
//! ## Key Features
//!
//! - **Borrowed fast path**: text without denylisted punctuation (the
//!   common case) is split in place, no copy
//! - **Streaming**: [`Tokenizer::tokenize_with`] emits tokens via callback,
//!   no intermediate collection
//! - **Fast**: the split is a single `memchr` byte scan for ASCII space
//! - **Pure**: no cross-entry state; every call stands alone
//!
//! ## Usage
//!
//! ```
//! use glossa_core::analyzer::tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::new(&["${newline}"]);
//! let words = tokenizer.tokenize("Welcome to Vvardenfell, outlander");
//! assert_eq!(words, ["Welcome", "to", "Vvardenfell", "outlander"]);
//! ```

use core::str;
use std::borrow::Cow;

use glossa_types::TokenSet;
use memchr::memchr_iter;

/// Characters removed from text before splitting.
///
/// Removal does not substitute whitespace; see the module docs for the
/// token-merge consequence.
const PUNCTUATION: &[char] = &['.', ',', '…'];

/// Word tokenizer - splits entry text into comparable tokens.
///
/// Holds only the placeholder denylist; the punctuation set is fixed.
/// Cheap to construct and freely reusable across entries.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    placeholders: &'a [&'a str],
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer that drops the given placeholder tokens.
    #[inline]
    pub const fn new(placeholders: &'a [&'a str]) -> Self {
        Self { placeholders }
    }

    /// Tokenizes `text` into an owned [`TokenSet`], in text order.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> TokenSet {
        let mut out = TokenSet::new();
        self.tokenize_with(text, |token| out.push(token.to_owned()));
        out
    }

    /// Tokenizes `text` and emits each kept token via callback.
    ///
    /// Tokens are slices into `text` (or into a punctuation-stripped copy
    /// when one was needed); no per-token allocation.
    pub fn tokenize_with<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        let cleaned = strip_punctuation(text);
        let bytes = cleaned.as_bytes();

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `cleaned` is valid UTF-8. We split only on ASCII
                // space (0x20), which is never a continuation byte, so
                // `bytes[start..i]` is always a valid UTF-8 subslice.
                let token = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                if !self.is_placeholder(token) {
                    emit(token);
                }
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above; `start` was set to `i + 1`
            // after an ASCII space byte, so `bytes[start..]` is a valid
            // UTF-8 subslice.
            let token = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            if !self.is_placeholder(token) {
                emit(token);
            }
        }
    }

    #[inline(always)]
    fn is_placeholder(&self, token: &str) -> bool {
        self.placeholders.contains(&token)
    }
}

/// Removes denylisted punctuation, borrowing the input when nothing needs
/// stripping.
fn strip_punctuation(text: &str) -> Cow<'_, str> {
    if !text.contains(PUNCTUATION) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.chars().filter(|c| !PUNCTUATION.contains(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDERS: &[&str] = &["${newline}"];

    fn tokens(input: &str) -> TokenSet {
        Tokenizer::new(PLACEHOLDERS).tokenize(input)
    }

    #[test]
    fn plain_words() {
        assert_eq!(tokens("alpha beta gamma"), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn single_word() {
        assert_eq!(tokens("Hyperion"), ["Hyperion"]);
    }

    #[test]
    fn empty_input() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn strips_periods_and_commas() {
        assert_eq!(tokens("Hyperion betrayed us."), ["Hyperion", "betrayed", "us"]);
        assert_eq!(tokens("one, two, three"), ["one", "two", "three"]);
    }

    #[test]
    fn strips_ellipsis() {
        assert_eq!(tokens("wait… what"), ["wait", "what"]);
    }

    #[test]
    fn stripping_merges_unspaced_words() {
        assert_eq!(tokens("end.Start"), ["endStart"]);
    }

    #[test]
    fn consecutive_spaces_yield_no_empty_tokens() {
        assert_eq!(tokens("a  b   c"), ["a", "b", "c"]);
    }

    #[test]
    fn leading_and_trailing_spaces_dropped() {
        assert_eq!(tokens("  hello world "), ["hello", "world"]);
    }

    #[test]
    fn only_punctuation_yields_nothing() {
        assert!(tokens("...").is_empty());
        assert!(tokens(", , ,").is_empty());
    }

    #[test]
    fn placeholder_token_excluded() {
        assert_eq!(tokens("before ${newline} after"), ["before", "after"]);
    }

    #[test]
    fn placeholder_only_if_exact() {
        // A placeholder fused with other characters is an ordinary token.
        assert_eq!(tokens("x${newline}y"), ["x${newline}y"]);
    }

    #[test]
    fn no_placeholders_configured() {
        let t = Tokenizer::new(&[]);
        assert_eq!(t.tokenize("a ${newline} b"), ["a", "${newline}", "b"]);
    }

    #[test]
    fn order_mirrors_text() {
        assert_eq!(tokens("c b a"), ["c", "b", "a"]);
    }

    #[test]
    fn duplicates_preserved() {
        assert_eq!(tokens("go go go"), ["go", "go", "go"]);
    }

    #[test]
    fn unicode_words_pass_through() {
        assert_eq!(tokens("nos traicionó"), ["nos", "traicionó"]);
        assert_eq!(tokens("hat uns betrogen"), ["hat", "uns", "betrogen"]);
    }

    #[test]
    fn fast_path_borrows_input() {
        let input = "no punctuation here";
        assert!(matches!(strip_punctuation(input), Cow::Borrowed(_)));
        assert!(matches!(strip_punctuation("dot."), Cow::Owned(_)));
    }

    #[test]
    fn streaming_matches_materialized() {
        let t = Tokenizer::new(PLACEHOLDERS);
        let input = "The Ebonheart Pact, the Aldmeri Dominion… and more";

        let mut streamed = Vec::new();
        t.tokenize_with(input, |token| streamed.push(token.to_owned()));

        assert_eq!(streamed, t.tokenize(input));
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new(PLACEHOLDERS);
        assert_eq!(t.tokenize("one two").len(), 2);
        assert_eq!(t.tokenize("one two three").len(), 3);
    }
}
