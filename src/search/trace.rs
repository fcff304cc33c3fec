//! Locating a single word on the board
//!
//! Unlike the full search this walks letters of one known word, so it needs
//! no lexicon.

use crate::core::{AdjacencyIndex, Grid, Path};

/// Find one simple path whose letters spell `word`
///
/// The word is matched case-insensitively. Returns `None` for an empty word or
/// when no such path exists.
///
/// # Examples
/// ```
/// use boggle_solver::core::{AdjacencyIndex, Cell, Grid};
/// use boggle_solver::search::trace_word;
///
/// let grid = Grid::from_rows(&["ca", "ts"]).unwrap();
/// let adjacency = AdjacencyIndex::build(&grid);
///
/// let path = trace_word(&grid, &adjacency, "cats").unwrap();
/// assert_eq!(path.cells()[0], Cell::new(0, 0));
/// assert_eq!(path.word(&grid), "CATS");
///
/// assert!(trace_word(&grid, &adjacency, "tact").is_none());
/// ```
#[must_use]
pub fn trace_word(grid: &Grid, adjacency: &AdjacencyIndex, word: &str) -> Option<Path> {
    let letters: Vec<char> = word.trim().to_uppercase().chars().collect();
    if letters.is_empty() || letters.len() > grid.len() {
        return None;
    }

    let mut tracer = Tracer {
        grid,
        adjacency,
        letters: &letters,
        path: Vec::with_capacity(letters.len()),
        in_path: vec![false; grid.len()],
    };

    (0..grid.len())
        .any(|start| tracer.matches_from(start))
        .then(|| Path::new(tracer.path.iter().map(|&i| grid.cell_at(i)).collect()))
}

struct Tracer<'a> {
    grid: &'a Grid,
    adjacency: &'a AdjacencyIndex,
    letters: &'a [char],
    path: Vec<usize>,
    in_path: Vec<bool>,
}

impl Tracer<'_> {
    /// Try to match the next letter at `index`, leaving the path in place on success
    fn matches_from(&mut self, index: usize) -> bool {
        let depth = self.path.len();
        if self.grid.letter_at(index) != self.letters[depth] {
            return false;
        }

        self.path.push(index);
        self.in_path[index] = true;

        if self.path.len() == self.letters.len() {
            return true;
        }

        let adjacency = self.adjacency;
        for &next in adjacency.neighbour_indices(index) {
            if !self.in_path[next] && self.matches_from(next) {
                return true;
            }
        }

        self.in_path[index] = false;
        self.path.pop();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> (Grid, AdjacencyIndex) {
        let grid = Grid::from_rows(rows).unwrap();
        let adjacency = AdjacencyIndex::build(&grid);
        (grid, adjacency)
    }

    #[test]
    fn traced_path_is_valid() {
        let (grid, adjacency) = board(&["SEAT", "RNTO", "IDEL", "PAMS"]);

        for word in ["SEAT", "TEN", "DAMS", "NET"] {
            let path = trace_word(&grid, &adjacency, word).unwrap();
            assert_eq!(path.word(&grid), word);
            assert!(path.validate(&grid, &adjacency).is_ok());
        }
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        // The first A leads nowhere; the second A reaches the T
        let (grid, adjacency) = board(&["AXX", "XXX", "XAT"]);

        let path = trace_word(&grid, &adjacency, "AT").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.word(&grid), "AT");
    }

    #[test]
    fn repeated_letter_needs_repeated_cells() {
        let (grid, adjacency) = board(&["AB"]);
        assert!(trace_word(&grid, &adjacency, "ABA").is_none());

        let (grid, adjacency) = board(&["ABA"]);
        assert!(trace_word(&grid, &adjacency, "ABA").is_some());
    }

    #[test]
    fn empty_and_oversized_words() {
        let (grid, adjacency) = board(&["AB"]);

        assert!(trace_word(&grid, &adjacency, "").is_none());
        assert!(trace_word(&grid, &adjacency, "   ").is_none());
        assert!(trace_word(&grid, &adjacency, "ABAB").is_none());
    }
}
