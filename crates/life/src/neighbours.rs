//! The eight cells around a coordinate, with rows and columns wrapping.

use crate::error::GridError;
use crate::grid::{Coord, Grid};

/// Row-major offsets of the 3×3 block around a cell, minus the centre.
#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// View over the neighbourhood of one coordinate. Nothing is stored; each call
/// reads the grid.
///
/// On grids of size 1 or 2 the wrap lands on the same coordinate more than
/// once (or on the centre itself). Those repeats are kept, so every
/// neighbourhood has exactly eight entries.
#[derive(Debug, Clone, Copy)]
pub struct Neighbours<'a, T> {
    row: usize,
    col: usize,
    grid: &'a Grid<T>,
}

impl<'a, T> Neighbours<'a, T> {
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] when either axis of `coordinate` is not in
    /// `0..grid.size()`.
    pub fn new(coordinate: Coord, grid: &'a Grid<T>) -> Result<Self, GridError> {
        let (row, col) = grid.check_bounds(coordinate)?;
        Ok(Self { row, col, grid })
    }

    /// Callers inside the crate that already iterate `0..size`.
    pub(crate) fn around((row, col): Coord, grid: &'a Grid<T>) -> Self {
        Self { row, col, grid }
    }

    #[must_use]
    pub fn coordinates(&self) -> [Coord; 8] {
        let size = self.grid.size();
        OFFSETS.map(|(dr, dc)| (wrap(self.row, dr, size), wrap(self.col, dc, size)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let grid = self.grid;
        self.coordinates()
            .into_iter()
            .map(move |coord| &grid[coord])
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<&'a T> {
        self.iter().collect()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        OFFSETS.len()
    }
}

impl<'a, T> IntoIterator for &Neighbours<'a, T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

/// `(index + offset + size) mod size`
fn wrap(index: usize, offset: isize, size: usize) -> usize {
    (index + size).wrapping_add_signed(offset) % size
}
