//! Core types for the Glossa invariant-term extractor.
//!
//! This crate provides the fundamental types that are shared across
//! the Glossa ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and CLI share the same types
//! - **Clean boundaries**: No circular dependencies between crates
//! - **Zero dependencies**: The data model pulls in nothing

#![warn(missing_docs)]

use core::fmt;

/// An ordered sequence of word tokens derived from an entry's text.
///
/// Token order mirrors text order, which keeps iteration deterministic.
/// Matching itself only ever tests membership, so order carries no
/// semantic weight.
pub type TokenSet = Vec<String>;

/// A single localized text record.
///
/// One `id` may carry several sub-entries, so identity for alignment
/// purposes is the composite `(id, index, unknown)` triple (see
/// [`Entry::key`]), never `id` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Shared identifier across languages.
    pub id: String,
    /// Sub-position discriminator within an id.
    pub index: String,
    /// Auxiliary discriminator; opaque, compared verbatim.
    pub unknown: String,
    /// The localized text payload.
    pub text: String,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(
        id: impl Into<String>,
        index: impl Into<String>,
        unknown: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            index: index.into(),
            unknown: unknown.into(),
            text: text.into(),
        }
    }

    /// Returns the composite alignment key for this entry.
    #[inline(always)]
    #[must_use]
    pub fn key(&self) -> EntryKey<'_> {
        EntryKey {
            id: &self.id,
            index: &self.index,
            unknown: &self.unknown,
        }
    }
}

/// Borrowed composite key identifying an entry across language sets.
///
/// Two entries are counterparts iff their keys compare equal; all three
/// components must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey<'a> {
    /// Shared identifier.
    pub id: &'a str,
    /// Sub-position discriminator.
    pub index: &'a str,
    /// Auxiliary discriminator.
    pub unknown: &'a str,
}

impl fmt::Display for EntryKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.id, self.index, self.unknown)
    }
}

/// All entries of one language, in file order.
///
/// Built once at load time and never mutated afterwards; the extraction
/// pipeline only ever reads it.
#[derive(Debug, Clone)]
pub struct LanguageSet {
    /// Language identifier, e.g. `"en"`.
    pub code: String,
    /// Entries in source-file order.
    pub entries: Vec<Entry>,
}

impl LanguageSet {
    /// Returns the number of entries in this language.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this language carries no entries.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The tokenized counterpart of a reference entry in one other language.
#[derive(Debug, Clone)]
pub struct EquivalentWords {
    /// Language the counterpart was found in.
    pub code: String,
    /// Tokenization of the counterpart's text.
    pub words: TokenSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_equal_when_all_components_agree() {
        let a = Entry::new("100", "0", "", "first");
        let b = Entry::new("100", "0", "", "completely different text");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn keys_differ_on_index() {
        let a = Entry::new("100", "0", "", "text");
        let b = Entry::new("100", "1", "", "text");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn keys_differ_on_unknown() {
        let a = Entry::new("100", "0", "x", "text");
        let b = Entry::new("100", "0", "y", "text");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn key_usable_in_hash_set() {
        use std::collections::HashSet;

        let a = Entry::new("100", "0", "", "text");
        let b = Entry::new("100", "0", "", "other");
        let c = Entry::new("200", "0", "", "text");

        let mut set = HashSet::new();
        set.insert(a.key());
        assert!(set.contains(&b.key()));
        assert!(!set.contains(&c.key()));
    }

    #[test]
    fn key_display() {
        let e = Entry::new("42", "1", "u", "text");
        assert_eq!(format!("{}", e.key()), "42:1:u");
    }

    #[test]
    fn language_set_len() {
        let lang = LanguageSet {
            code: "en".to_owned(),
            entries: vec![Entry::new("1", "0", "", "a")],
        };
        assert_eq!(lang.len(), 1);
        assert!(!lang.is_empty());
    }
}
