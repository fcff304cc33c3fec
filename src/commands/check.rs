//! Single word check
//!
//! Reports whether a word is in the dictionary and whether it can be traced on the board.

use crate::core::{AdjacencyIndex, Grid, Path};
use crate::lexicon::Lexicon;
use crate::search::trace_word;

/// Result of checking one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The word as normalized for lookup
    pub word: String,
    pub in_lexicon: bool,
    /// A path spelling the word, if one exists
    pub path: Option<Path>,
}

impl CheckResult {
    /// The word is both a dictionary word and present on the board
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.in_lexicon && self.path.is_some()
    }
}

/// Check a word against a board and a lexicon
///
/// # Errors
///
/// Returns an error if the word is empty or contains anything but letters.
pub fn check_word(grid: &Grid, lexicon: &Lexicon, word: &str) -> Result<CheckResult, String> {
    let word = word.trim().to_uppercase();

    if word.is_empty() {
        return Err("Word to check is empty".to_string());
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("Word to check must contain only letters: {word}"));
    }

    let adjacency = AdjacencyIndex::build(grid);
    let path = trace_word(grid, &adjacency, &word);

    Ok(CheckResult {
        in_lexicon: lexicon.contains(&word),
        word,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Grid, Lexicon) {
        let grid = Grid::from_rows(&["CA", "TS"]).unwrap();
        let lexicon = Lexicon::from_words(["CAT", "CATS", "TACO"]);
        (grid, lexicon)
    }

    #[test]
    fn playable_word() {
        let (grid, lexicon) = setup();
        let result = check_word(&grid, &lexicon, "cats").unwrap();

        assert_eq!(result.word, "CATS");
        assert!(result.in_lexicon);
        assert!(result.is_playable());
        assert_eq!(result.path.unwrap().word(&grid), "CATS");
    }

    #[test]
    fn on_board_but_not_a_word() {
        let (grid, lexicon) = setup();
        let result = check_word(&grid, &lexicon, "SAT").unwrap();

        assert!(!result.in_lexicon);
        assert!(result.path.is_some());
        assert!(!result.is_playable());
    }

    #[test]
    fn word_but_not_on_board() {
        let (grid, lexicon) = setup();
        let result = check_word(&grid, &lexicon, "taco").unwrap();

        assert!(result.in_lexicon);
        assert!(result.path.is_none());
        assert!(!result.is_playable());
    }

    #[test]
    fn rejects_bad_input() {
        let (grid, lexicon) = setup();

        assert!(check_word(&grid, &lexicon, "  ").is_err());
        assert!(check_word(&grid, &lexicon, "c4t").is_err());
    }
}
