//! Turning a grid into lines of glyphs.

use life::{Cell, CellState, Grid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    alive: String,
    dead: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new("██", "▒▒")
    }
}

impl Glyphs {
    #[must_use]
    pub fn new(alive: impl Into<String>, dead: impl Into<String>) -> Self {
        Self {
            alive: alive.into(),
            dead: dead.into(),
        }
    }

    #[must_use]
    pub fn glyph(&self, state: CellState) -> &str {
        match state {
            CellState::Alive => &self.alive,
            CellState::Dead => &self.dead,
        }
    }
}

/// One string per grid row.
#[must_use]
pub fn render(grid: &Grid<Cell>, glyphs: &Glyphs) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().map(|cell| glyphs.glyph(cell.state())).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_glyphs() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.glyph(CellState::Alive), "██");
        assert_eq!(glyphs.glyph(CellState::Dead), "▒▒");
    }

    #[test]
    fn renders_one_line_per_row() {
        let grid = Grid::new(3, |row, col| {
            if row == col {
                Cell::alive()
            } else {
                Cell::dead()
            }
        })
        .unwrap();
        let rows = render(&grid, &Glyphs::new("#", "."));
        assert_eq!(rows, vec!["#..", ".#.", "..#"]);
    }

    #[test]
    fn wide_glyphs_repeat_per_cell() {
        let grid = Grid::new(2, |_, _| Cell::dead()).unwrap();
        let rows = render(&grid, &Glyphs::default());
        assert_eq!(rows, vec!["▒▒▒▒", "▒▒▒▒"]);
    }
}
