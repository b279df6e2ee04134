//! Cell type and the Conway transition rule.

use std::fmt;

use rand::Rng;

use crate::grid::{ElementId, Identify};
use crate::state::CellState;

/// A cell is an entity: two cells holding the same state are still distinct,
/// told apart by their `id`. Copies share the id and count as the same cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    id: ElementId,
    state: CellState,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}

impl Identify for Cell {
    fn id(&self) -> ElementId {
        self.id
    }
}

impl Cell {
    #[must_use]
    pub fn new(state: CellState) -> Self {
        Self {
            id: ElementId::next(),
            state,
        }
    }

    #[must_use]
    pub fn alive() -> Self {
        Self::new(CellState::Alive)
    }

    #[must_use]
    pub fn dead() -> Self {
        Self::new(CellState::Dead)
    }

    #[must_use]
    pub fn new_with_random_state() -> Self {
        Self::new(CellState::random())
    }

    pub fn new_with_random_state_from<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(CellState::random_with(rng))
    }

    #[must_use]
    pub fn state(&self) -> CellState {
        self.state
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state == CellState::Alive
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.state == CellState::Dead
    }

    /// The cell that takes this one's place in the next generation.
    ///
    /// A live cell with two or three live neighbours survives, a dead cell with
    /// exactly three is born, everything else is dead. Any number of neighbours
    /// is accepted; the grid always supplies eight.
    #[must_use]
    pub fn subsequent_state<'a, I>(&self, neighbours: I) -> Self
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let alive = neighbours.into_iter().filter(|n| n.is_alive()).count();

        if self.is_alive() && (alive == 2 || alive == 3) {
            return Self::alive();
        }
        if alive == 3 {
            return Self::alive();
        }
        Self::dead()
    }
}
