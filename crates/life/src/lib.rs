//! Conway's Game of Life on a square grid whose edges wrap around.

pub mod cell;
pub mod error;
mod generation;
pub mod grid;
pub mod neighbours;
pub mod state;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Coord, ElementId, Grid, Identify};
pub use neighbours::Neighbours;
pub use state::CellState;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

/// Running simulation handed to a browser renderer.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid<Cell>,
    generation: u32,
}

#[wasm_bindgen]
impl Universe {
    /// Random universe of `size`×`size` cells.
    ///
    /// # Errors
    ///
    /// Fails when `size` is zero or too large to allocate.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<Universe, JsError> {
        Ok(Self::with_size(size)?)
    }

    /// Random universe drawn from a `ChaCha8` stream seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Fails when `size` is zero or too large to allocate.
    pub fn seeded(size: usize, seed: u64) -> Result<Universe, JsError> {
        Ok(Self::with_seed(size, seed)?)
    }

    pub fn tick(&mut self) {
        self.grid = self.grid.next_generation();
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Row-major cell bytes: 1 alive, 0 dead.
    #[must_use]
    pub fn cells(&self) -> Vec<u8> {
        self.grid
            .cells()
            .map(|(_, cell)| u8::from(cell.is_alive()))
            .collect()
    }
}

impl Universe {
    /// # Errors
    ///
    /// [`GridError::InvalidSize`] when `size` is zero, [`GridError::TooLarge`]
    /// when the grid cannot be allocated.
    pub fn with_size(size: usize) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new_random(size)?))
    }

    /// # Errors
    ///
    /// [`GridError::InvalidSize`] when `size` is zero, [`GridError::TooLarge`]
    /// when the grid cannot be allocated.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, GridError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Ok(Self::from_grid(Grid::new_random_with(size, &mut rng)?))
    }

    #[must_use]
    pub fn from_grid(grid: Grid<Cell>) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }
}
