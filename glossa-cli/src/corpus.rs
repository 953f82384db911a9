//! Language corpus I/O.
//!
//! Reads the per-language delimited files into raw entries, fans the reads
//! out across a thread pool, and writes the final dictionary. All failures
//! here are fatal to the job: a missing file, an absent column or a
//! malformed row aborts the run before any output is produced.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Deserialize;

use glossa_core::analyzer::EntryNormalizer;
use glossa_types::{Entry, LanguageSet};

/// Columns every language file must carry, by exact header name.
const REQUIRED_COLUMNS: [&str; 4] = ["ID", "Index", "Unknown", "Text"];

/// One row of a language file. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Index")]
    index: String,
    #[serde(rename = "Unknown")]
    unknown: String,
    #[serde(rename = "Text")]
    text: String,
}

impl From<RawRecord> for Entry {
    fn from(record: RawRecord) -> Self {
        Entry {
            id: record.id,
            index: record.index,
            unknown: record.unknown,
            text: record.text,
        }
    }
}

/// Errors that can abort a corpus job.
#[derive(Debug)]
pub enum CorpusError {
    /// A configured language file is missing or unreadable.
    Read {
        /// Path of the file that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// A language file lacks one of the required columns.
    MissingColumn {
        /// Path of the offending file.
        path: PathBuf,
        /// The absent column, by exact header name.
        column: &'static str,
    },
    /// A row could not be parsed.
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying CSV failure.
        source: csv::Error,
    },
    /// The configured main language was not among the loaded sets.
    MissingLanguage {
        /// The main language code.
        code: String,
    },
    /// The output listing could not be written.
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            CorpusError::MissingColumn { path, column } => {
                write!(f, "{}: missing required column `{}`", path.display(), column)
            }
            CorpusError::Parse { path, source } => {
                write!(f, "{}: malformed row: {}", path.display(), source)
            }
            CorpusError::MissingLanguage { code } => {
                write!(f, "main language `{}` was not loaded", code)
            }
            CorpusError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Read { source, .. } | CorpusError::Write { source, .. } => Some(source),
            CorpusError::Parse { source, .. } => Some(source),
            CorpusError::MissingColumn { .. } | CorpusError::MissingLanguage { .. } => None,
        }
    }
}

/// Returns the conventional path of one language's file.
pub fn language_file_path(dir: &Path, code: &str) -> PathBuf {
    dir.join(format!("{code}.lang.csv"))
}

/// Reads one language file into raw entries, in row order.
pub fn read_language_file(dir: &Path, code: &str) -> Result<Vec<Entry>, CorpusError> {
    let path = language_file_path(dir, code);
    let file = fs::File::open(&path).map_err(|source| CorpusError::Read {
        path: path.clone(),
        source,
    })?;
    parse_entries(file, &path)
}

fn parse_entries<R: io::Read>(input: R, path: &Path) -> Result<Vec<Entry>, CorpusError> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader
        .headers()
        .map_err(|source| CorpusError::Parse {
            path: path.to_owned(),
            source,
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|name| name == column) {
            return Err(CorpusError::MissingColumn {
                path: path.to_owned(),
                column,
            });
        }
    }

    let mut entries = Vec::new();
    for record in reader.deserialize::<RawRecord>() {
        let record = record.map_err(|source| CorpusError::Parse {
            path: path.to_owned(),
            source,
        })?;
        entries.push(record.into());
    }

    Ok(entries)
}

/// Reads and normalizes every configured language in parallel.
///
/// The `collect` over per-language `Result`s is the join barrier: all
/// files must load before the pipeline starts, and any single failure
/// aborts the whole job. Result order follows `codes`.
pub fn load_languages(
    dir: &Path,
    codes: &[&str],
    normalizer: &EntryNormalizer<'_>,
) -> Result<Vec<LanguageSet>, CorpusError> {
    codes
        .par_iter()
        .map(|code| read_language_file(dir, code).map(|raw| normalizer.normalize(code, raw)))
        .collect()
}

/// Writes the dictionary, one word per line, overwriting any previous
/// output.
///
/// Called exactly once, after all processing, so a failed run never leaves
/// a partial listing behind.
pub fn write_dictionary(path: &Path, words: &[String]) -> Result<(), CorpusError> {
    fs::write(path, words.join("\n")).map_err(|source| CorpusError::Write {
        path: path.to_owned(),
        source,
    })
}
