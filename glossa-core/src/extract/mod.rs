//! Cross-language extraction pipeline.
//!
//! Given one reference language and a set of counterpart languages, this
//! module computes the dictionary of words that appear identically in
//! every available counterpart of a reference entry while the entry as a
//! whole is *not* identical: the signature of an untranslated term
//! embedded in otherwise-translated text.
//!
//! Threading:
//! - Everything here is read-only over [`glossa_types::LanguageSet`]s
//!   built before the run; the fold itself is sequential, in file order.

mod aligner;
mod extractor;
mod pipeline;
mod stats;

pub use aligner::{find_equivalent, other_language_equivalents, EquivalentsList};
pub use extractor::common_words;
pub use pipeline::extract_dictionary;
pub use stats::ExtractStats;
