//! Neighbour lookup for every cell of a grid
//!
//! Built once from a [`Grid`] and read-only afterwards.

use super::cell::NEIGHBOUR_OFFSETS;
use super::{Cell, Grid};

/// Precomputed 8-directional neighbours of each cell
///
/// Edge and corner cells have fewer neighbours; the relation is symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyIndex {
    width: usize,
    height: usize,
    /// Neighbours of each cell, indexed by the cell's row-major index
    neighbours: Vec<Vec<Cell>>,
    /// Same relation as row-major indices, used by the search hot loop
    indices: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    /// Derive the neighbour relation from a grid
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{AdjacencyIndex, Cell, Grid};
    ///
    /// let grid = Grid::from_rows(&["abc", "def", "ghi"]).unwrap();
    /// let adjacency = AdjacencyIndex::build(&grid);
    ///
    /// assert_eq!(adjacency.neighbours(Cell::new(0, 0)).len(), 3);
    /// assert_eq!(adjacency.neighbours(Cell::new(1, 1)).len(), 8);
    /// ```
    #[must_use]
    pub fn build(grid: &Grid) -> Self {
        let neighbours: Vec<Vec<Cell>> = grid
            .cells()
            .map(|cell| {
                NEIGHBOUR_OFFSETS
                    .iter()
                    .filter_map(|&(d_row, d_col)| cell.offset(d_row, d_col))
                    .filter(|&n| grid.contains(n))
                    .collect()
            })
            .collect();

        let indices = neighbours
            .iter()
            .map(|cells| cells.iter().filter_map(|&n| grid.index_of(n)).collect())
            .collect();

        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            "built adjacency index"
        );

        Self {
            width: grid.width(),
            height: grid.height(),
            neighbours,
            indices,
        }
    }

    /// Neighbours of a cell
    ///
    /// Returns an empty slice for a cell that is off the board.
    #[must_use]
    pub fn neighbours(&self, cell: Cell) -> &[Cell] {
        self.index_of(cell)
            .map_or(&[], |i| self.neighbours[i].as_slice())
    }

    /// Check if `b` is a neighbour of `a`
    #[must_use]
    pub fn is_adjacent(&self, a: Cell, b: Cell) -> bool {
        self.neighbours(a).contains(&b)
    }

    /// Check if the index was built for a grid of this shape
    #[must_use]
    pub fn fits(&self, grid: &Grid) -> bool {
        self.width == grid.width() && self.height == grid.height()
    }

    /// Number of cells covered by the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Neighbour indices of the cell at a row-major index
    #[inline]
    pub(crate) fn neighbour_indices(&self, index: usize) -> &[usize] {
        &self.indices[index]
    }

    const fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.row < self.height && cell.col < self.width {
            Some(cell.row * self.width + cell.col)
        } else {
            None
        }
    }
}
