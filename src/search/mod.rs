//! Word search over a letter grid
//!
//! [`PathSearchEngine`] enumerates every dictionary word on the board;
//! [`trace_word`] locates one given word.

mod engine;
mod found;
mod trace;

pub use engine::{PathSearchEngine, SearchOptions, SearchReport};
pub use found::FoundWords;
pub use trace::trace_word;
