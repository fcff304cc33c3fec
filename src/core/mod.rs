//! Core board types
//!
//! Grid, cell coordinates, the neighbour relation and paths. Everything here
//! is immutable once built and can be shared freely across search threads.

mod adjacency;
mod cell;
mod grid;
mod path;

pub use adjacency::AdjacencyIndex;
pub use cell::{Cell, NEIGHBOUR_OFFSETS};
pub use grid::{Grid, GridError};
pub use path::{Path, PathViolation};
