//! Bordered square grid construction and cell access
//!
//! The grid is a square `ndarray` of cells whose outer ring is marked as
//! border at construction. Interior cells are always fully surrounded by
//! other cells, which lets the carver walk neighbor coordinates without
//! explicit edge cases; the `cell` accessors still bounds-check as a safety
//! net.

use ndarray::Array2;

use crate::io::configuration::{MAX_GRID_DIMENSION, MIN_GRID_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::cell::Cell;

/// Square grid of cells with a fully walled border ring
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
    size: usize,
}

impl Grid {
    /// Create an empty grid of `size × size` cells
    ///
    /// Row 0, row `size − 1`, column 0, and column `size − 1` are border
    /// cells; everything else is interior. All walls start closed and no
    /// cell is visited.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` leaves no interior to carve (below
    /// [`MIN_GRID_SIZE`]) or exceeds the allocation limit
    /// [`MAX_GRID_DIMENSION`].
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("a bordered grid needs at least {MIN_GRID_SIZE} cells per side"),
            ));
        }

        if size > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("grid dimension exceeds the limit of {MAX_GRID_DIMENSION}"),
            ));
        }

        let cells = Array2::from_shape_fn((size, size), |(row, col)| {
            let border = row == 0 || col == 0 || row == size - 1 || col == size - 1;
            Cell::new(border)
        });

        Ok(Self { cells, size })
    }

    /// Number of cells per side, border ring included
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of interior cells eligible for carving
    pub const fn interior_len(&self) -> usize {
        (self.size - 2) * (self.size - 2)
    }

    /// Cell at `[row, column]`, or `None` outside the grid
    pub fn cell(&self, coord: [usize; 2]) -> Option<&Cell> {
        self.cells.get(coord)
    }

    /// Mutable cell at `[row, column]`, or `None` outside the grid
    pub fn cell_mut(&mut self, coord: [usize; 2]) -> Option<&mut Cell> {
        self.cells.get_mut(coord)
    }

    /// Iterate over all cells with their `[row, column]` coordinates
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 2], &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ([row, col], cell))
    }
}
