//! Command-line configuration for the terminal viewer.

use std::time::Duration;

use clap::Parser;

/// Watch Conway's Game of Life evolve on a wrapping grid.
#[derive(Debug, Clone, Parser)]
#[command(name = "life", version)]
pub struct Config {
    /// Width and height of the grid, in cells
    #[arg(long, default_value_t = 40, value_parser = parse_size)]
    pub size: usize,

    /// Pause between frames, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Seed for the initial grid; a fresh one is drawn when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many frames; runs until interrupted when absent
    #[arg(long)]
    pub generations: Option<u64>,

    /// Glyph drawn for a live cell
    #[arg(long, default_value = "██")]
    pub alive: String,

    /// Glyph drawn for a dead cell
    #[arg(long, default_value = "▒▒")]
    pub dead: String,
}

impl Config {
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Largest grid the viewer draws; wider frames no longer fit a terminal.
pub const MAX_SIZE: usize = 1000;

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("`{s}` is not a grid size: {e}"))?;
    if size == 0 {
        return Err("grid size must be at least 1".into());
    }
    if size > MAX_SIZE {
        return Err(format!("grid size must be at most {MAX_SIZE}"));
    }
    Ok(size)
}
