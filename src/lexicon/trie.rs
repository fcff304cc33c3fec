//! Prefix trie backing the lexicon
//!
//! Nodes live in one arena vector and refer to their children by index.
//! A node is terminal when the letters leading to it spell a full word, and
//! it is a proper prefix when it has at least one child.

use rustc_hash::FxHashMap;

/// Index of a node in the trie arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The empty string
    pub const ROOT: Self = Self(0);

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: FxHashMap<char, NodeId>,
    terminal: bool,
}

/// Arena-allocated prefix tree over `char`
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Insert a word, returning `true` if it was not already present
    ///
    /// The empty string is never stored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = NodeId::ROOT;
        for letter in word.chars() {
            current = match self.nodes[current.index()].children.get(&letter) {
                Some(&next) => next,
                None => {
                    let next = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::default());
                    self.nodes[current.index()].children.insert(letter, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current.index()];
        let added = !node.terminal;
        node.terminal = true;
        if added {
            self.words += 1;
        }
        added
    }

    /// Follow one edge from `node`
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: char) -> Option<NodeId> {
        self.nodes[node.index()].children.get(&letter).copied()
    }

    /// Walk from the root along every letter of `key`
    #[must_use]
    pub fn find(&self, key: &str) -> Option<NodeId> {
        key.chars()
            .try_fold(NodeId::ROOT, |node, letter| self.child(node, letter))
    }

    /// Check if the letters leading to `node` form a full word
    #[inline]
    #[must_use]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.index()].terminal
    }

    /// Check if some longer word continues past `node`
    #[inline]
    #[must_use]
    pub fn has_children(&self, node: NodeId) -> bool {
        !self.nodes[node.index()].children.is_empty()
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }

    /// Number of nodes, including the root
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Visit every stored word in no particular order
    pub(crate) fn for_each_word(&self, mut visit: impl FnMut(&str)) {
        let mut prefix = String::new();
        self.walk(NodeId::ROOT, &mut prefix, &mut visit);
    }

    fn walk(&self, node: NodeId, prefix: &mut String, visit: &mut impl FnMut(&str)) {
        let entry = &self.nodes[node.index()];
        if entry.terminal {
            visit(prefix);
        }
        for (&letter, &next) in &entry.children {
            prefix.push(letter);
            self.walk(next, prefix, visit);
            prefix.pop();
        }
    }
}
