//! Collected search results
//!
//! Each distinct word is kept once, together with the first path that spelled it.

use crate::core::Path;
use rustc_hash::FxHashMap;

/// Distinct words found on a board, each with one witness path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    entries: FxHashMap<String, Path>,
}

impl FoundWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word, building its path only if the word is new
    ///
    /// Returns `true` if the word had not been seen before.
    pub fn record(&mut self, word: &str, path: impl FnOnce() -> Path) -> bool {
        if self.entries.contains_key(word) {
            return false;
        }
        self.entries.insert(word.to_owned(), path());
        true
    }

    /// Fold another result set into this one
    ///
    /// Words already present keep their existing path.
    pub fn merge(&mut self, other: Self) {
        for (word, path) in other.entries {
            self.entries.entry(word).or_insert(path);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Path that spelled `word`, if it was found
    #[must_use]
    pub fn path(&self, word: &str) -> Option<&Path> {
        self.entries.get(word)
    }

    /// Iterate over words in arbitrary order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over words and their paths in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(w, p)| (w.as_str(), p))
    }

    /// Words in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words().collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn path(n: usize) -> Path {
        Path::new((0..n).map(|c| Cell::new(0, c)).collect())
    }

    #[test]
    fn record_keeps_first_path() {
        let mut found = FoundWords::new();

        assert!(found.record("AT", || path(2)));
        assert!(!found.record("AT", || panic!("path built for a known word")));

        assert_eq!(found.len(), 1);
        assert_eq!(found.path("AT"), Some(&path(2)));
    }

    #[test]
    fn merge_unions_words() {
        let mut left = FoundWords::new();
        left.record("CAT", || path(3));
        left.record("AT", || path(2));

        let mut right = FoundWords::new();
        right.record("AT", || path(1));
        right.record("TA", || path(2));

        left.merge(right);

        assert_eq!(left.sorted(), ["AT", "CAT", "TA"]);
        assert_eq!(left.path("AT"), Some(&path(2)));
    }

    #[test]
    fn empty_by_default() {
        let found = FoundWords::default();
        assert!(found.is_empty());
        assert!(!found.contains("A"));
        assert!(found.sorted().is_empty());
    }
}
