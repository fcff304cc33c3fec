//! Benchmark command
//!
//! Solves many seeded random boards and measures search throughput.

use crate::core::{AdjacencyIndex, Grid, GridError};
use crate::lexicon::Lexicon;
use crate::search::{PathSearchEngine, SearchOptions};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub boards: usize,
    pub width: usize,
    pub height: usize,
    /// Seed for the board sequence; the same seed always yields the same boards
    pub seed: u64,
    pub parallel: bool,
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub total_visited: u64,
    /// Boards bucketed by word count, in buckets of ten
    pub distribution: HashMap<usize, usize>,
    pub richest_board: Option<(String, usize)>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Run the search on a sequence of random boards
///
/// # Errors
///
/// Returns `GridError` if the configured dimensions are zero.
pub fn run_benchmark(
    lexicon: &Lexicon,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, GridError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let options = SearchOptions {
        parallel: config.parallel,
        deadline: None,
    };

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.boards as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░");
        pb.set_style(style);
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut total_visited = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut richest_board: Option<(String, usize)> = None;

    let start = Instant::now();

    for idx in 0..config.boards {
        let grid = Grid::random(config.width, config.height, &mut rng)?;
        let adjacency = AdjacencyIndex::build(&grid);
        let report = PathSearchEngine::new(&grid, &adjacency, lexicon).run(options);

        let found = report.words.len();
        total_words += found;
        total_visited += report.visited;
        min_words = min_words.min(found);
        max_words = max_words.max(found);
        *distribution.entry(found / 10 * 10).or_insert(0) += 1;

        if richest_board.as_ref().is_none_or(|(_, best)| found > *best) {
            richest_board = Some((grid.to_string(), found));
        }

        if idx % 10 == 0 {
            let avg = total_words as f64 / (idx + 1) as f64;
            pb.set_message(format!("Avg: {avg:.1} words"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_boards = config.boards;

    tracing::info!(
        boards = total_boards,
        words = total_words,
        elapsed_ms = duration.as_millis(),
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        total_boards,
        total_words,
        average_words: if total_boards == 0 {
            0.0
        } else {
            total_words as f64 / total_boards as f64
        },
        min_words: if total_boards == 0 { 0 } else { min_words },
        max_words,
        total_visited,
        distribution,
        richest_board,
        duration,
        boards_per_second: total_boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
