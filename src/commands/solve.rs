//! Board solving command
//!
//! Finds every word on a board and arranges the results for display.

use crate::core::{AdjacencyIndex, Grid, Path};
use crate::lexicon::Lexicon;
use crate::search::{PathSearchEngine, SearchOptions};
use std::collections::BTreeMap;
use std::time::Duration;

/// Configuration for solving a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Hide words shorter than this from the result
    pub min_length: usize,
    pub parallel: bool,
    pub timeout: Option<Duration>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_length: 1,
            parallel: false,
            timeout: None,
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A word found on the board with the path that spells it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub path: Path,
}

/// Result of solving a board
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub board: String,
    /// Words at least `min_length` long, shortest first, alphabetical within a length
    pub words: Vec<FoundWord>,
    /// Distinct words found before the length filter
    pub total_found: usize,
    pub visited: u64,
    pub pruned: u64,
    pub timed_out: bool,
    pub duration: Duration,
}

impl SolveResult {
    /// Number of listed words of each length
    #[must_use]
    pub fn count_by_length(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for found in &self.words {
            *counts.entry(found.word.chars().count()).or_insert(0) += 1;
        }
        counts
    }

    /// The longest listed word, alphabetically first on ties
    #[must_use]
    pub fn longest(&self) -> Option<&FoundWord> {
        self.words
            .iter()
            .rev()
            .max_by_key(|found| found.word.chars().count())
    }
}

/// Solve a board against a lexicon
#[must_use]
pub fn solve_board(grid: &Grid, lexicon: &Lexicon, config: &SolveConfig) -> SolveResult {
    let adjacency = AdjacencyIndex::build(grid);
    let engine = PathSearchEngine::new(grid, &adjacency, lexicon);

    let mut options = SearchOptions {
        parallel: config.parallel,
        deadline: None,
    };
    if let Some(timeout) = config.timeout {
        options = options.with_timeout(timeout);
    }

    let report = engine.run(options);
    let total_found = report.words.len();

    let mut words: Vec<FoundWord> = report
        .words
        .iter()
        .filter(|(word, _)| word.chars().count() >= config.min_length)
        .map(|(word, path)| FoundWord {
            word: word.to_string(),
            path: path.clone(),
        })
        .collect();
    words.sort_by(|a, b| {
        a.word
            .chars()
            .count()
            .cmp(&b.word.chars().count())
            .then_with(|| a.word.cmp(&b.word))
    });

    SolveResult {
        board: grid.to_string(),
        words,
        total_found,
        visited: report.visited,
        pruned: report.pruned,
        timed_out: report.timed_out,
        duration: report.duration,
    }
}
