//! Dictionary of valid words
//!
//! A Lexicon answers two questions about an uppercase string: is it a full
//! word, and is it a proper prefix of some longer word. The search walks the
//! underlying trie one letter at a time through [`NodeId`] cursors.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{LexiconError, load_from_file};
pub use trie::NodeId;

use trie::Trie;

/// Set of full words plus the set of their proper prefixes, stored as a trie
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    trie: Trie,
}

impl Lexicon {
    /// Create an empty lexicon
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from raw words
    ///
    /// Each word is trimmed and uppercased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["cat", " Cats ", "", "at"]);
    ///
    /// assert_eq!(lexicon.len(), 3);
    /// assert!(lexicon.contains("CATS"));
    /// assert!(lexicon.is_prefix("CA"));
    /// assert!(!lexicon.is_prefix("CATS"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Build a lexicon from the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let lexicon = Self::from_words(WORDS);
        tracing::debug!(words = lexicon.len(), "loaded embedded dictionary");
        lexicon
    }

    /// Normalize and add one word, returning `true` if it was new
    pub fn insert(&mut self, raw: &str) -> bool {
        let word = normalize(raw);
        self.trie.insert(&word)
    }

    /// Check if `word` is a full dictionary word
    ///
    /// The lookup is case-insensitive.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty()
            && self
                .trie
                .find(&word)
                .is_some_and(|node| self.trie.is_terminal(node))
    }

    /// Check if `stem` is a non-empty proper prefix of some dictionary word
    ///
    /// The lookup is case-insensitive.
    #[must_use]
    pub fn is_prefix(&self, stem: &str) -> bool {
        let stem = normalize(stem);
        !stem.is_empty()
            && self
                .trie
                .find(&stem)
                .is_some_and(|node| self.trie.has_children(node))
    }

    /// Number of distinct words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.trie.word_count()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.trie.word_count() == 0
    }

    /// Number of trie nodes, a rough measure of memory use
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// All words, sorted
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len());
        self.trie.for_each_word(|w| words.push(w.to_string()));
        words.sort_unstable();
        words
    }

    /// Cursor at the empty string
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Extend a cursor by one uppercase letter
    ///
    /// Returns `None` when no dictionary word starts with the extended string.
    #[inline]
    #[must_use]
    pub fn step(&self, node: NodeId, letter: char) -> Option<NodeId> {
        self.trie.child(node, letter)
    }

    /// Check if the string at a cursor is a full word
    #[inline]
    #[must_use]
    pub fn is_word_at(&self, node: NodeId) -> bool {
        self.trie.is_terminal(node)
    }

    /// Check if the string at a cursor can still grow into a longer word
    #[inline]
    #[must_use]
    pub fn is_prefix_at(&self, node: NodeId) -> bool {
        self.trie.has_children(node)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}
