//! Drawing frames in place with crossterm cursor commands.

use std::io::{self, Write};

use crossterm::cursor::{MoveDown, MoveToColumn, MoveUp};
use crossterm::style::Print;
use crossterm::queue;

/// Each frame is drawn from the current cursor line, after which the cursor
/// goes back up so the next frame overwrites it.
#[derive(Debug)]
pub struct Screen<W: Write> {
    out: W,
    height: u16,
}

impl<W: Write> Screen<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out, height: 0 }
    }

    /// # Errors
    ///
    /// Propagates write failures on the underlying writer.
    pub fn draw(&mut self, rows: &[String]) -> io::Result<()> {
        for row in rows {
            queue!(self.out, Print(row), Print("\n"), MoveToColumn(0))?;
        }
        self.height = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        if self.height > 0 {
            queue!(self.out, MoveUp(self.height))?;
        }
        self.out.flush()
    }

    /// Park the cursor below the last frame.
    ///
    /// # Errors
    ///
    /// Propagates write failures on the underlying writer.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.height > 0 {
            queue!(self.out, MoveDown(self.height))?;
            self.height = 0;
        }
        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
