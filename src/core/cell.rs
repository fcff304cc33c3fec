//! Grid coordinates
//!
//! A Cell names one board position by row and column.

use std::fmt;

/// Row/column offsets of the 8 surrounding positions
///
/// Ordered top-left to bottom-right, row by row.
pub const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A single board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply an offset, returning `None` if either coordinate would go negative
    ///
    /// The upper bound is not checked here; that depends on the grid.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        match (
            self.row.checked_add_signed(d_row),
            self.col.checked_add_signed(d_col),
        ) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Check if two cells touch along an edge or a corner
    #[inline]
    #[must_use]
    pub const fn touches(self, other: Self) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_negative_coordinates() {
        let origin = Cell::new(0, 0);

        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 1), Some(Cell::new(1, 1)));
    }

    #[test]
    fn touches_includes_diagonals() {
        let a = Cell::new(0, 0);

        assert!(a.touches(Cell::new(0, 1)));
        assert!(a.touches(Cell::new(1, 1)));
        assert!(a.touches(Cell::new(1, 0)));
        assert!(!a.touches(Cell::new(2, 2)));
        assert!(!a.touches(Cell::new(0, 2)));
    }

    #[test]
    fn cell_does_not_touch_itself() {
        let a = Cell::new(3, 3);
        assert!(!a.touches(a));
    }

    #[test]
    fn offsets_exclude_origin() {
        assert!(!NEIGHBOUR_OFFSETS.contains(&(0, 0)));
        assert_eq!(NEIGHBOUR_OFFSETS.len(), 8);
    }

    #[test]
    fn display_format() {
        assert_eq!(Cell::new(2, 7).to_string(), "(2,7)");
    }
}
