//! Glossa Job Driver
//!
//! This binary runs the full extraction job: it reads every configured
//! language file, folds the cross-language matcher over the main
//! language's entries and writes the deduplicated dictionary of invariant
//! terms.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: read ./resources, write ./entities.csv
//! ./target/release/glossa
//!
//! # Explicit corpus directory and output path
//! ./target/release/glossa /data/eso-lang /tmp/entities.csv
//! ```
//!
//! The corpus directory must hold one `<code>.lang.csv` file per
//! configured language. The output file is overwritten on every run and
//! only written after all processing succeeds; a failed run leaves no
//! partial output.
//!
//! ## Output
//!
//! Progress and a final summary go to stdout:
//!
//! ```text
//! Job started. Reading en, fr, de language files
//! Reading files complete. Took 1.284 s.
//! Processing 118_204 entries. Block size is 10_000.
//! Processed block ending at entry 10_000. Took 0.912 s.
//! ...
//! Processing finished. Took 11.310 s. 118_204 entries, 1_006 contributing, 1_371 words collected, 842 unique
//! Job finished. Found 842 entities. Took 12.601 s.
//! ```
//!
//! Errors go to stderr and the process exits non-zero; alignment misses
//! and empty contributions are not errors and are simply absent from the
//! output.

mod corpus;

use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use glossa_core::analyzer::normalizer::NEWLINE_PLACEHOLDER;
use glossa_core::analyzer::{EntryNormalizer, Tokenizer};
use glossa_core::extract::extract_dictionary;
use glossa_types::LanguageSet;

use corpus::CorpusError;

/// Entry ids excluded from every language before processing.
const IGNORED_IDS: &[&str] = &["3427285", "242841733"];

/// Marker tokens excluded from word comparison.
const PLACEHOLDERS: &[&str] = &[NEWLINE_PLACEHOLDER];

/// Language files loaded at startup.
const LANGUAGE_CODES: &[&str] = &["en", "fr", "de"];

/// The language whose entries drive the extraction.
const MAIN_LANGUAGE: &str = "en";

/// Progress-reporting granularity, in entries. No effect on the result.
const BLOCK_SIZE: usize = 10_000;

const DEFAULT_RESOURCES_DIR: &str = "./resources";
const DEFAULT_OUTPUT_FILE: &str = "./entities.csv";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 3 {
        eprintln!("Usage: glossa [resources-dir] [output-file]");
        std::process::exit(1);
    }

    let resources = PathBuf::from(
        args.get(1)
            .map(String::as_str)
            .unwrap_or(DEFAULT_RESOURCES_DIR),
    );
    let output = PathBuf::from(
        args.get(2)
            .map(String::as_str)
            .unwrap_or(DEFAULT_OUTPUT_FILE),
    );

    if let Err(err) = run(&resources, &output) {
        eprintln!("glossa: {err}");
        std::process::exit(1);
    }
}

fn run(resources: &Path, output: &Path) -> Result<(), CorpusError> {
    let job_start = Instant::now();
    println!(
        "Job started. Reading {} language files",
        LANGUAGE_CODES.join(", ")
    );

    let read_start = Instant::now();
    let normalizer = EntryNormalizer::new(IGNORED_IDS);
    let languages = corpus::load_languages(resources, LANGUAGE_CODES, &normalizer)?;
    println!(
        "Reading files complete. Took {:.3} s.",
        read_start.elapsed().as_secs_f64()
    );

    let (main_language, other_languages) = partition_main(languages)?;

    println!(
        "Processing {} entries. Block size is {}.",
        fmt_count(main_language.len()),
        fmt_count(BLOCK_SIZE)
    );

    let tokenizer = Tokenizer::new(PLACEHOLDERS);
    let processing_start = Instant::now();
    let mut block_start = Instant::now();

    let (dictionary, stats) = extract_dictionary(
        &main_language,
        &other_languages,
        &tokenizer,
        BLOCK_SIZE,
        |entries_done| {
            println!(
                "Processed block ending at entry {}. Took {:.3} s.",
                fmt_count(entries_done),
                block_start.elapsed().as_secs_f64()
            );
            block_start = Instant::now();
        },
    );

    println!(
        "Processing finished. Took {:.3} s. {}",
        processing_start.elapsed().as_secs_f64(),
        stats
    );

    corpus::write_dictionary(output, &dictionary)?;

    println!(
        "Job finished. Found {} entities. Took {:.3} s.",
        fmt_count(dictionary.len()),
        job_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Splits the loaded sets into the main language and the rest.
fn partition_main(
    languages: Vec<LanguageSet>,
) -> Result<(LanguageSet, Vec<LanguageSet>), CorpusError> {
    let mut main_language = None;
    let mut others = Vec::with_capacity(languages.len().saturating_sub(1));

    for language in languages {
        if main_language.is_none() && language.code == MAIN_LANGUAGE {
            main_language = Some(language);
        } else {
            others.push(language);
        }
    }

    let main_language = main_language.ok_or_else(|| CorpusError::MissingLanguage {
        code: MAIN_LANGUAGE.to_owned(),
    })?;

    Ok((main_language, others))
}

fn fmt_count(n: usize) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
