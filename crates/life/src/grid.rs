//! Square grid of elements, stored row-major and built once from a generator.

use std::collections::HashMap;
use std::ops::Index;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use log::debug;
use rand::Rng;

use crate::cell::Cell;
use crate::error::GridError;

/// `(row, col)`, both in `0..size`.
pub type Coord = (usize, usize);

/// Process-unique identity token. Elements are looked up by token, not by
/// value, since many cells share a state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ElementId(u64);

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(0);

impl ElementId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Elements that can be found again with [`Grid::coordinates_of`].
pub trait Identify {
    fn id(&self) -> ElementId;
}

/// N×N snapshot. Never modified after construction.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    size: usize,
    elements: Vec<T>,
    // id -> row-major offset, built on the first reverse lookup
    positions: OnceLock<HashMap<ElementId, usize>>,
}

impl<T> Grid<T> {
    /// Build a `size`×`size` grid, calling `generator(row, col)` exactly once per
    /// coordinate in row-major order.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidSize`] when `size` is zero, [`GridError::TooLarge`]
    /// when `size`² elements cannot be counted or allocated.
    pub fn new<F>(size: usize, generator: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> T,
    {
        if size == 0 {
            return Err(GridError::InvalidSize);
        }
        let len = size.checked_mul(size).ok_or(GridError::TooLarge { size })?;
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(len)
            .map_err(|_| GridError::TooLarge { size })?;
        Ok(Self::fill(size, elements, generator))
    }

    /// A grid the size of `source` whose element at `(row, col)` is
    /// `transform(row, col)`. The transform reads `source` itself if it needs
    /// the old element.
    pub fn new_from_with<U, F>(source: &Grid<U>, transform: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::fill(
            source.size,
            Vec::with_capacity(source.elements.len()),
            transform,
        )
    }

    fn fill<F>(size: usize, mut elements: Vec<T>, mut generator: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        for row in 0..size {
            for col in 0..size {
                elements.push(generator(row, col));
            }
        }
        debug!("built {size}x{size} grid");
        Self {
            size,
            elements,
            positions: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major 2D view, one slice per row.
    #[must_use]
    pub fn elements(&self) -> Vec<&[T]> {
        self.rows().collect()
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.elements.chunks(self.size)
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| ((i / self.size, i % self.size), e))
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.in_bounds(row, col) {
            Some(&self.elements[row * self.size + col])
        } else {
            None
        }
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub(crate) fn check_bounds(&self, (row, col): Coord) -> Result<Coord, GridError> {
        if self.in_bounds(row, col) {
            Ok((row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Copy of `source`. Copied elements keep their identity.
    #[must_use]
    pub fn new_from(source: &Self) -> Self {
        Self {
            size: source.size,
            elements: source.elements.clone(),
            positions: OnceLock::new(),
        }
    }
}

impl<T: Identify> Grid<T> {
    /// Position of the element sharing `element`'s identity. If the same
    /// identity sits at several positions the first in row-major order wins.
    ///
    /// # Errors
    ///
    /// [`GridError::NotFound`] when no element of the grid has that identity.
    pub fn coordinates_of(&self, element: &T) -> Result<Coord, GridError> {
        let positions = self.positions.get_or_init(|| {
            let mut positions = HashMap::with_capacity(self.elements.len());
            for (i, e) in self.elements.iter().enumerate() {
                positions.entry(e.id()).or_insert(i);
            }
            positions
        });
        positions
            .get(&element.id())
            .map(|&i| (i / self.size, i % self.size))
            .ok_or(GridError::NotFound)
    }
}

impl Grid<Cell> {
    /// Grid of independently random cells.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidSize`] when `size` is zero, [`GridError::TooLarge`]
    /// when the grid cannot be allocated.
    pub fn new_random(size: usize) -> Result<Self, GridError> {
        Self::new_random_with(size, &mut rand::thread_rng())
    }

    /// Like [`Grid::new_random`], drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::new_random`].
    pub fn new_random_with<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, GridError> {
        Self::new(size, |_, _| Cell::new_with_random_state_from(&mut *rng))
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): Coord) -> &T {
        assert!(
            self.in_bounds(row, col),
            "coordinate ({row}, {col}) is outside a {0}x{0} grid",
            self.size
        );
        &self.elements[row * self.size + col]
    }
}
