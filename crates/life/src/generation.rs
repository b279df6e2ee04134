//! Advancing a grid of cells by one generation.

use log::{debug, log_enabled, Level};

use crate::cell::Cell;
use crate::grid::Grid;
use crate::neighbours::Neighbours;

impl Grid<Cell> {
    /// The next generation. Every cell is computed from this grid only, so
    /// births and deaths happen simultaneously; `self` is left untouched.
    #[must_use]
    pub fn next_generation(&self) -> Self {
        let next = Self::new_from_with(self, |row, col| {
            self[(row, col)].subsequent_state(&Neighbours::around((row, col), self))
        });
        if log_enabled!(Level::Debug) {
            debug!(
                "advanced {0}x{0} grid, population {1} -> {2}",
                self.size(),
                self.population(),
                next.population()
            );
        }
        next
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_alive()).count()
    }
}
