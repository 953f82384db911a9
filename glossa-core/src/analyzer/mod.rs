//! Text analysis pipeline.
//!
//! This module provides the per-entry text processing components:
//! - **Normalizer**: Drops denylisted entries and rewrites break escapes
//! - **Tokenizer**: Splits entry text into comparable word tokens

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::EntryNormalizer;
pub use tokenizer::Tokenizer;
