//! Paths through the grid
//!
//! A Path is an ordered sequence of cells. A valid path visits each cell at
//! most once and steps only between neighbouring cells.

use super::{AdjacencyIndex, Cell, Grid};
use rustc_hash::FxHashSet;
use std::fmt;

/// Reasons a sequence of cells is not a playable path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathViolation {
    Empty,
    OffBoard(Cell),
    Repeated(Cell),
    NotAdjacent(Cell, Cell),
}

impl fmt::Display for PathViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path is empty"),
            Self::OffBoard(cell) => write!(f, "{cell} is off the board"),
            Self::Repeated(cell) => write!(f, "{cell} is used more than once"),
            Self::NotAdjacent(a, b) => write!(f, "{a} and {b} are not adjacent"),
        }
    }
}

/// An ordered sequence of cells
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<Cell>);

impl Path {
    #[must_use]
    pub const fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate the letters along the path
    ///
    /// Cells that are off the board contribute nothing.
    #[must_use]
    pub fn word(&self, grid: &Grid) -> String {
        self.0.iter().filter_map(|&cell| grid.letter(cell)).collect()
    }

    /// Check that no cell appears twice
    #[must_use]
    pub fn is_simple(&self) -> bool {
        let unique: FxHashSet<_> = self.0.iter().collect();
        unique.len() == self.0.len()
    }

    /// Check that each cell neighbours the one before it
    #[must_use]
    pub fn is_connected(&self, adjacency: &AdjacencyIndex) -> bool {
        self.0
            .windows(2)
            .all(|pair| adjacency.is_adjacent(pair[0], pair[1]))
    }

    /// Check that the path is non-empty, on the board, simple and connected
    ///
    /// # Errors
    /// Returns the first `PathViolation` found, scanning from the start.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{AdjacencyIndex, Cell, Grid, Path, PathViolation};
    ///
    /// let grid = Grid::from_rows(&["ca", "ts"]).unwrap();
    /// let adjacency = AdjacencyIndex::build(&grid);
    ///
    /// let cat = Path::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
    /// assert!(cat.validate(&grid, &adjacency).is_ok());
    /// assert_eq!(cat.word(&grid), "CAT");
    ///
    /// let looped = Path::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 0)]);
    /// assert_eq!(
    ///     looped.validate(&grid, &adjacency),
    ///     Err(PathViolation::Repeated(Cell::new(0, 0)))
    /// );
    /// ```
    pub fn validate(&self, grid: &Grid, adjacency: &AdjacencyIndex) -> Result<(), PathViolation> {
        if self.0.is_empty() {
            return Err(PathViolation::Empty);
        }

        let mut seen = FxHashSet::default();
        let mut previous: Option<Cell> = None;

        for &cell in &self.0 {
            if !grid.contains(cell) {
                return Err(PathViolation::OffBoard(cell));
            }
            if !seen.insert(cell) {
                return Err(PathViolation::Repeated(cell));
            }
            if let Some(prev) = previous
                && !adjacency.is_adjacent(prev, cell)
            {
                return Err(PathViolation::NotAdjacent(prev, cell));
            }
            previous = Some(cell);
        }

        Ok(())
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self(cells)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> (Grid, AdjacencyIndex) {
        let grid = Grid::from_rows(&["CAT", "DOG", "SUN"]).unwrap();
        let adjacency = AdjacencyIndex::build(&grid);
        (grid, adjacency)
    }

    fn path(cells: &[(usize, usize)]) -> Path {
        cells.iter().map(|&(r, c)| Cell::new(r, c)).collect::<Vec<_>>().into()
    }

    #[test]
    fn word_follows_cell_order() {
        let (grid, _) = board();
        assert_eq!(path(&[(0, 0), (0, 1), (0, 2)]).word(&grid), "CAT");
        assert_eq!(path(&[(1, 0), (1, 1), (1, 2)]).word(&grid), "DOG");
        assert_eq!(path(&[(1, 2), (1, 1), (1, 0)]).word(&grid), "GOD");
    }

    #[test]
    fn validate_accepts_diagonal_steps() {
        let (grid, adjacency) = board();
        assert!(path(&[(0, 0), (1, 1), (2, 2)]).validate(&grid, &adjacency).is_ok());
    }

    #[test]
    fn validate_rejects_empty() {
        let (grid, adjacency) = board();
        assert_eq!(
            Path::default().validate(&grid, &adjacency),
            Err(PathViolation::Empty)
        );
    }

    #[test]
    fn validate_rejects_jumps() {
        let (grid, adjacency) = board();
        assert_eq!(
            path(&[(0, 0), (2, 2)]).validate(&grid, &adjacency),
            Err(PathViolation::NotAdjacent(Cell::new(0, 0), Cell::new(2, 2)))
        );
    }

    #[test]
    fn validate_rejects_off_board() {
        let (grid, adjacency) = board();
        assert_eq!(
            path(&[(2, 2), (3, 3)]).validate(&grid, &adjacency),
            Err(PathViolation::OffBoard(Cell::new(3, 3)))
        );
    }

    #[test]
    fn simple_and_connected_checks() {
        let (_, adjacency) = board();
        let repeat = path(&[(0, 0), (0, 1), (0, 0)]);

        assert!(!repeat.is_simple());
        assert!(repeat.is_connected(&adjacency));
        assert!(path(&[(0, 0), (0, 1)]).is_simple());
    }

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(path(&[(0, 0), (1, 1)]).to_string(), "(0,0) -> (1,1)");
    }
}
