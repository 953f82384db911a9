//! Core matching and filtering pipeline for Glossa.
//!
//! Glossa scans a multilingual localization corpus for words that survive
//! translation untouched: proper nouns and other invariant terms that
//! appear word-for-word identical across every language's rendition of an
//! entry, while the surrounding text differs.
//!
//! The pipeline has two halves:
//!
//! - [`analyzer`] - per-entry text preparation: denylist filtering,
//!   break-escape rewriting, word tokenization
//! - [`extract`] - cross-language alignment, the common-word computation
//!   with its inclusion policy, and the dictionary fold
//!
//! File reading and output writing live with the driver; this crate is
//! pure computation over already-loaded [`glossa_types::LanguageSet`]s.

pub mod analyzer;
pub mod extract;
