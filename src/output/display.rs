//! Display functions for command results

use super::formatters::{create_progress_bar, pluralize, word_columns};
use crate::commands::{BenchmarkResult, CheckResult, SolveResult};
use colored::Colorize;
use std::fmt::Write;

const WORD_COLUMNS: usize = 6;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Board: {}", result.board.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let counts = result.count_by_length();
    for (&length, &count) in counts.iter().rev() {
        println!(
            "\n{} {}",
            format!("{length} letters").bright_cyan().bold(),
            format!("({count})").bright_black()
        );

        let words: Vec<&str> = result
            .words
            .iter()
            .filter(|f| f.word.chars().count() == length)
            .map(|f| f.word.as_str())
            .collect();

        for line in word_columns(&words, WORD_COLUMNS) {
            println!("  {line}");
        }
    }

    if verbose {
        if let Some(longest) = result.longest() {
            println!("\n  Longest:  {} via {}", longest.word.green(), longest.path);
        }
        println!("  Visited:  {} path extensions", result.visited);
        println!("  Pruned:   {} dead prefixes", result.pruned);
        println!("  Time:     {:.2}ms", result.duration.as_secs_f64() * 1000.0);
    }

    println!();
    if result.timed_out {
        println!(
            "{}",
            format!(
                "⏱  Timed out after listing {}",
                pluralize(result.words.len(), "word", "words")
            )
            .yellow()
            .bold()
        );
    } else {
        let hidden = result.total_found - result.words.len();
        let mut summary = format!("✅ Found {}", pluralize(result.words.len(), "word", "words"));
        if hidden > 0 {
            let _ = write!(summary, " ({hidden} shorter words hidden)");
        }
        println!("{}", summary.green().bold());
    }
}

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult) {
    let word = result.word.bright_yellow().bold();

    if result.in_lexicon {
        println!("📖 {word} is in the dictionary");
    } else {
        println!("📖 {word} is {} in the dictionary", "not".red());
    }

    match &result.path {
        Some(path) => println!("🧭 Found on the board: {path}"),
        None => println!("🧭 {} on the board", "Not found".red()),
    }

    if result.is_playable() {
        println!("{}", "✅ Playable".green().bold());
    } else {
        println!("{}", "❌ Not playable".red().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Nodes visited:    {}", result.total_visited);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if let Some((board, count)) = &result.richest_board {
        println!("   Richest board:    {board} ({count})");
    }

    if result.total_boards == 0 {
        return;
    }

    println!("\n📈 {}", "Words per board:".bright_cyan().bold());
    let mut buckets: Vec<_> = result.distribution.iter().collect();
    buckets.sort_unstable();
    for (&bucket, &count) in buckets {
        let pct = (count as f64 / result.total_boards as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>4}-{:<4} {} {count:4} ({pct:5.1}%)",
            bucket,
            bucket + 9,
            bar.green()
        );
    }
}
