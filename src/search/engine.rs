//! Prefix-pruned depth-first search over the grid
//!
//! Every cell seeds a walk. Each step extends the current path by one unused
//! neighbour and advances a trie cursor by that cell's letter. A walk stops as
//! soon as the cursor falls off the trie (no word starts with these letters) or
//! reaches a node with no children (no longer word continues from here).

use super::found::FoundWords;
use crate::core::{AdjacencyIndex, Grid, Path};
use crate::lexicon::{Lexicon, NodeId};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// The deadline is polled on a walker's first visit and once per this many
/// visited nodes after that
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// How a search should run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Search start cells on the rayon thread pool
    pub parallel: bool,
    /// Give up and return what was found so far once this instant passes
    pub deadline: Option<Instant>,
}

impl SearchOptions {
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            deadline: None,
        }
    }

    #[must_use]
    pub const fn parallel() -> Self {
        Self {
            parallel: true,
            deadline: None,
        }
    }

    /// Stop searching `timeout` from now
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }
}

/// Outcome of a search run
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub words: FoundWords,
    /// Number of path extensions evaluated
    pub visited: u64,
    /// Extensions cut because no dictionary word starts with their letters
    pub pruned: u64,
    /// The deadline passed before the search finished; `words` is partial
    pub timed_out: bool,
    pub duration: Duration,
}

/// Enumerates every dictionary word spellable along a simple path in a grid
///
/// Grid, adjacency and lexicon are borrowed read-only, so one engine can be
/// shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct PathSearchEngine<'a> {
    grid: &'a Grid,
    adjacency: &'a AdjacencyIndex,
    lexicon: &'a Lexicon,
}

impl<'a> PathSearchEngine<'a> {
    /// Create an engine over a grid, its adjacency index and a lexicon
    ///
    /// # Panics
    /// Panics if `adjacency` was built for a grid of a different shape.
    #[must_use]
    pub fn new(grid: &'a Grid, adjacency: &'a AdjacencyIndex, lexicon: &'a Lexicon) -> Self {
        assert!(
            adjacency.fits(grid),
            "adjacency index built for another grid shape than {}x{}",
            grid.width(),
            grid.height()
        );
        Self {
            grid,
            adjacency,
            lexicon,
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &'a Grid {
        self.grid
    }

    #[must_use]
    pub const fn adjacency(&self) -> &'a AdjacencyIndex {
        self.adjacency
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Find all words on a single thread
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{AdjacencyIndex, Grid};
    /// use boggle_solver::lexicon::Lexicon;
    /// use boggle_solver::search::PathSearchEngine;
    ///
    /// let grid = Grid::from_rows(&["ca", "ts"]).unwrap();
    /// let adjacency = AdjacencyIndex::build(&grid);
    /// let lexicon = Lexicon::from_words(["cat", "cats", "at", "dog"]);
    ///
    /// let found = PathSearchEngine::new(&grid, &adjacency, &lexicon).search();
    /// assert_eq!(found.sorted(), ["AT", "CAT", "CATS"]);
    /// ```
    #[must_use]
    pub fn search(&self) -> FoundWords {
        self.run(SearchOptions::sequential()).words
    }

    /// Find all words, one rayon task per start cell
    #[must_use]
    pub fn search_parallel(&self) -> FoundWords {
        self.run(SearchOptions::parallel()).words
    }

    /// Run a search with explicit options and report statistics
    #[must_use]
    pub fn run(&self, options: SearchOptions) -> SearchReport {
        let started = Instant::now();

        let tally = if options.parallel {
            (0..self.grid.len())
                .into_par_iter()
                .fold(
                    || Walker::new(self, options.deadline),
                    |mut walker, start| {
                        walker.search_from(start);
                        walker
                    },
                )
                .map(Walker::finish)
                .reduce(Tally::default, Tally::merge)
        } else {
            let mut walker = Walker::new(self, options.deadline);
            for start in 0..self.grid.len() {
                walker.search_from(start);
            }
            walker.finish()
        };

        let duration = started.elapsed();

        if tally.timed_out {
            tracing::warn!(
                found = tally.words.len(),
                visited = tally.visited,
                "search deadline reached, returning partial results"
            );
        } else {
            tracing::debug!(
                found = tally.words.len(),
                visited = tally.visited,
                pruned = tally.pruned,
                parallel = options.parallel,
                elapsed_ms = duration.as_millis(),
                "search complete"
            );
        }

        SearchReport {
            words: tally.words,
            visited: tally.visited,
            pruned: tally.pruned,
            timed_out: tally.timed_out,
            duration,
        }
    }
}

/// Partial results from one or more walkers
#[derive(Debug, Default)]
struct Tally {
    words: FoundWords,
    visited: u64,
    pruned: u64,
    timed_out: bool,
}

impl Tally {
    fn merge(mut self, other: Self) -> Self {
        self.words.merge(other.words);
        self.visited += other.visited;
        self.pruned += other.pruned;
        self.timed_out |= other.timed_out;
        self
    }
}

/// Backtracking state for one thread of search
///
/// The path, the visited flags and the word buffer are pushed before each
/// recursive step and popped after it returns, so sibling branches never see
/// each other's extensions.
struct Walker<'a> {
    grid: &'a Grid,
    adjacency: &'a AdjacencyIndex,
    lexicon: &'a Lexicon,
    deadline: Option<Instant>,
    path: Vec<usize>,
    in_path: Vec<bool>,
    word: String,
    tally: Tally,
}

impl<'a> Walker<'a> {
    fn new(engine: &PathSearchEngine<'a>, deadline: Option<Instant>) -> Self {
        Self {
            grid: engine.grid,
            adjacency: engine.adjacency,
            lexicon: engine.lexicon,
            deadline,
            path: Vec::with_capacity(engine.grid.len()),
            in_path: vec![false; engine.grid.len()],
            word: String::with_capacity(engine.grid.len()),
            tally: Tally::default(),
        }
    }

    fn search_from(&mut self, start: usize) {
        if !self.tally.timed_out {
            self.extend(start, self.lexicon.root());
        }
    }

    fn extend(&mut self, index: usize, parent: NodeId) {
        self.tally.visited += 1;
        if self.deadline_passed() {
            return;
        }

        let letter = self.grid.letter_at(index);
        let Some(node) = self.lexicon.step(parent, letter) else {
            self.tally.pruned += 1;
            return;
        };

        self.path.push(index);
        self.in_path[index] = true;
        self.word.push(letter);

        if self.lexicon.is_word_at(node) {
            let grid = self.grid;
            let path = &self.path;
            self.tally.words.record(&self.word, || {
                Path::new(path.iter().map(|&i| grid.cell_at(i)).collect())
            });
        }

        if self.lexicon.is_prefix_at(node) {
            let adjacency = self.adjacency;
            for &next in adjacency.neighbour_indices(index) {
                if !self.in_path[next] {
                    self.extend(next, node);
                }
                if self.tally.timed_out {
                    break;
                }
            }
        }

        self.word.pop();
        self.in_path[index] = false;
        self.path.pop();
    }

    fn deadline_passed(&mut self) -> bool {
        if self.tally.timed_out {
            return true;
        }
        if let Some(deadline) = self.deadline
            && (self.tally.visited == 1 || self.tally.visited % DEADLINE_CHECK_INTERVAL == 0)
            && Instant::now() >= deadline
        {
            self.tally.timed_out = true;
        }
        self.tally.timed_out
    }

    fn finish(self) -> Tally {
        self.tally
    }
}
