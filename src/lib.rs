//! Boggle Solver
//!
//! Finds every dictionary word that can be spelled on a letter grid by moving
//! between neighbouring cells (diagonals included) without reusing a cell.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::core::{AdjacencyIndex, Grid};
//! use boggle_solver::lexicon::Lexicon;
//! use boggle_solver::search::PathSearchEngine;
//!
//! let grid: Grid = "CA/TS".parse().unwrap();
//! let adjacency = AdjacencyIndex::build(&grid);
//! let lexicon = Lexicon::from_words(["cat", "cats", "at"]);
//!
//! let found = PathSearchEngine::new(&grid, &adjacency, &lexicon).search();
//! assert_eq!(found.len(), 3);
//! ```

// Board, cells, adjacency and paths
pub mod core;

// Dictionary trie and loading
pub mod lexicon;

// Depth-first word search
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
