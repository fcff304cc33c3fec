//! Letter grid representation
//!
//! A Grid stores one uppercase letter per cell in row-major order. It is
//! validated once on construction and never mutated afterwards.

use super::Cell;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for malformed boards
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimension { width: usize, height: usize },

    #[error("expected {expected} letters for the grid, got {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("row {row} has {found} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid of {width}x{height} cells is too large to address")]
    TooLarge { width: usize, height: usize },

    #[error("cell ({row},{col}) holds '{letter}', which is not an ASCII letter")]
    InvalidLetter { row: usize, col: usize, letter: char },
}

/// A rectangular board of letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Create a grid from row-major letters
    ///
    /// Letters are uppercased.
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - Either dimension is zero
    /// - `width * height` overflows `usize`
    /// - The letter count is not `width * height`
    /// - Any letter is not ASCII alphabetic
    pub fn new(width: usize, height: usize, letters: Vec<char>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }

        let expected = area(width, height)?;
        if letters.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: letters.len(),
            });
        }

        let mut normalized = Vec::with_capacity(expected);
        for (i, letter) in letters.into_iter().enumerate() {
            if !letter.is_ascii_alphabetic() {
                return Err(GridError::InvalidLetter {
                    row: i / width,
                    col: i % width,
                    letter,
                });
            }
            normalized.push(letter.to_ascii_uppercase());
        }

        Ok(Self {
            width,
            height,
            letters: normalized,
        })
    }

    /// Create a grid from one string per row
    ///
    /// # Errors
    /// Returns `GridError::RaggedRow` if rows differ in length, plus anything
    /// [`Grid::new`] rejects.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Cell, Grid};
    ///
    /// let grid = Grid::from_rows(&["ca", "ts"]).unwrap();
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.letter(Cell::new(1, 0)), Some('T'));
    ///
    /// assert!(Grid::from_rows(&["cat", "s"]).is_err());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());

        let mut letters = Vec::with_capacity(width * height);
        for (row, text) in rows.iter().enumerate() {
            let found = text.as_ref().chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            letters.extend(text.as_ref().chars());
        }

        Self::new(width, height, letters)
    }

    /// Generate a grid of uniformly random letters `A..=Z`
    ///
    /// The random source is passed in so boards can be reproduced from a seed.
    ///
    /// # Errors
    /// Returns `GridError::EmptyDimension` if either dimension is zero and
    /// `GridError::TooLarge` if the cell count overflows.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Grid;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let a = Grid::random(4, 4, &mut StdRng::seed_from_u64(7)).unwrap();
    /// let b = Grid::random(4, 4, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }

        let letters = (0..area(width, height)?)
            .map(|_| char::from(b'A' + rng.random_range(0..26u8)))
            .collect();

        Self::new(width, height, letters)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed grid; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if a cell lies on the board
    #[inline]
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Row-major index of a cell, or `None` when it is off the board
    #[inline]
    #[must_use]
    pub const fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.width + cell.col)
        } else {
            None
        }
    }

    /// Cell at a row-major index
    ///
    /// # Panics
    /// Panics in debug mode if `index >= len()`
    #[inline]
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Cell {
        debug_assert!(index < self.letters.len(), "cell index out of range");
        Cell::new(index / self.width, index % self.width)
    }

    /// Letter at a cell
    #[inline]
    #[must_use]
    pub fn letter(&self, cell: Cell) -> Option<char> {
        self.index_of(cell).map(|i| self.letters[i])
    }

    /// Letter at a row-major index
    #[inline]
    pub(crate) fn letter_at(&self, index: usize) -> char {
        self.letters[index]
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.letters.len()).map(|i| self.cell_at(i))
    }

    /// Iterate over the board one row of letters at a time
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.width)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse a board written as rows separated by `/`, `,` or whitespace
    ///
    /// `"CAT/DOG/SUN"` is a 3x3 board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();

        Self::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    /// Compact single-line form that round-trips through `FromStr`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for letter in row {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Cell count of a `width` by `height` board
fn area(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_uppercases_letters() {
        let grid = Grid::new(2, 1, vec!['q', 'U']).unwrap();
        assert_eq!(grid.letter(Cell::new(0, 0)), Some('Q'));
        assert_eq!(grid.letter(Cell::new(0, 1)), Some('U'));
    }

    #[test]
    fn new_rejects_zero_dimension() {
        assert_eq!(
            Grid::new(0, 3, vec![]),
            Err(GridError::EmptyDimension {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn new_rejects_wrong_letter_count() {
        assert_eq!(
            Grid::new(2, 2, vec!['A', 'B', 'C']),
            Err(GridError::SizeMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        assert_eq!(
            Grid::new(usize::MAX, 2, vec![]),
            Err(GridError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );

        let side = 1usize << (usize::BITS / 2);
        assert!(matches!(
            Grid::new(side, side, vec![]),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn random_rejects_overflowing_dimensions() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Grid::random(usize::MAX, 3, &mut rng),
            Err(GridError::TooLarge {
                width: usize::MAX,
                height: 3
            })
        );
    }

    #[test]
    fn random_rejects_zero_dimension() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Grid::random(4, 0, &mut rng),
            Err(GridError::EmptyDimension { .. })
        ));
    }

    #[test]
    fn new_rejects_non_letters() {
        let err = Grid::new(2, 2, vec!['A', 'B', '3', 'D']).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidLetter {
                row: 1,
                col: 0,
                letter: '3'
            }
        );
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Grid::from_rows(&["ABC", "DE"]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        let rows: [&str; 0] = [];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(GridError::EmptyDimension { .. })
        ));
    }

    #[test]
    fn parse_accepts_several_separators() {
        let slash: Grid = "cat/dog".parse().unwrap();
        let comma: Grid = "CAT,DOG".parse().unwrap();
        let space: Grid = "cat dog".parse().unwrap();

        assert_eq!(slash, comma);
        assert_eq!(slash, space);
        assert_eq!(slash.width(), 3);
        assert_eq!(slash.height(), 2);
    }

    #[test]
    fn display_round_trips() {
        let grid: Grid = "CAT/DOG/SUN".parse().unwrap();
        let text = grid.to_string();

        assert_eq!(text, "CAT/DOG/SUN");
        assert_eq!(text.parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn random_is_reproducible_from_seed() {
        let a = Grid::random(5, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(5, 3, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), 15);
        assert!(a.rows().flatten().all(char::is_ascii_uppercase));
    }

    #[test]
    fn index_and_cell_agree() {
        let grid = Grid::from_rows(&["ABC", "DEF"]).unwrap();

        for (i, cell) in grid.cells().enumerate() {
            assert_eq!(grid.index_of(cell), Some(i));
            assert_eq!(grid.cell_at(i), cell);
        }
        assert_eq!(grid.index_of(Cell::new(2, 0)), None);
        assert_eq!(grid.index_of(Cell::new(0, 3)), None);
    }

    #[test]
    fn cells_cover_rectangle() {
        let grid = Grid::from_rows(&["AB", "CD", "EF"]).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();

        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
    }
}
