//! The two-valued cell state.

use std::fmt;

use rand::Rng;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CellState {
    Alive,
    Dead,
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => write!(f, "Alive"),
            Self::Dead => write!(f, "Dead"),
        }
    }
}

impl CellState {
    pub const ALL: [Self; 2] = [Self::Alive, Self::Dead];

    #[must_use]
    pub fn alive() -> Self {
        Self::Alive
    }

    #[must_use]
    pub fn dead() -> Self {
        Self::Dead
    }

    /// Either state with probability 0.5, drawn from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}
