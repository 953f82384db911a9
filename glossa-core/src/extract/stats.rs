//! Run statistics snapshot.

/// Counters describing one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractStats {
    /// Reference entries iterated.
    pub entries_processed: usize,
    /// Reference entries whose contribution was non-empty.
    pub entries_contributing: usize,
    /// Words accumulated before deduplication.
    pub words_collected: usize,
    /// Words in the final dictionary.
    pub unique_words: usize,
}

impl core::fmt::Display for ExtractStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} entries, {} contributing, {} words collected, {} unique",
            self.entries_processed,
            self.entries_contributing,
            self.words_collected,
            self.unique_words
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_all_counters() {
        let stats = ExtractStats {
            entries_processed: 4,
            entries_contributing: 2,
            words_collected: 3,
            unique_words: 1,
        };
        assert_eq!(
            format!("{stats}"),
            "4 entries, 2 contributing, 3 words collected, 1 unique"
        );
    }
}
