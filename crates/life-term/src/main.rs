//! Terminal viewer: draws a random grid and keeps replacing it with its next
//! generation.

mod config;
mod frame;
mod screen;

use std::io::{self, Write};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use life::{Cell, Grid};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use config::Config;
use frame::Glyphs;
use screen::Screen;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let stdout = io::stdout();
    run(&config, stdout.lock())
}

fn initial_grid(config: &Config) -> Result<Grid<Cell>> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    Grid::new_random_with(config.size, &mut rng).context("building the initial grid")
}

/// Draws frames until `config.generations` is reached, or forever.
fn run<W: Write>(config: &Config, out: W) -> Result<()> {
    let glyphs = Glyphs::new(config.alive.as_str(), config.dead.as_str());
    let mut grid = initial_grid(config)?;
    let mut screen = Screen::new(out);
    info!(
        "starting {0}x{0} grid, seed {1:?}, population {2}",
        config.size,
        config.seed,
        grid.population()
    );

    let mut drawn = 0u64;
    while config.generations.map_or(true, |limit| drawn < limit) {
        screen
            .draw(&frame::render(&grid, &glyphs))
            .context("drawing a frame")?;
        drawn += 1;
        grid = grid.next_generation();
        if !config.delay().is_zero() {
            thread::sleep(config.delay());
        }
    }

    screen.finish().context("restoring the cursor")?;
    info!("stopped after {drawn} frames, population {}", grid.population());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("life").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn seeded_runs_draw_the_same_frames() {
        let cfg = config(&["--size", "6", "--seed", "11", "--generations", "4"]);
        let mut a = Vec::new();
        let mut b = Vec::new();
        run(&cfg, &mut a).unwrap();
        run(&cfg, &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn draws_requested_number_of_frames() {
        let cfg = config(&[
            "--size", "3", "--seed", "1", "--generations", "5", "--alive", "#", "--dead", ".",
        ]);
        let mut out = Vec::new();
        run(&cfg, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("\x1b[3A").count(), 5);
        assert!(out.ends_with("\x1b[3B\n"));
    }

    #[test]
    fn first_frame_is_the_seeded_grid() {
        let cfg = config(&["--size", "4", "--seed", "5", "--generations", "1"]);
        let expected = frame::render(&initial_grid(&cfg).unwrap(), &Glyphs::default());
        let mut out = Vec::new();
        run(&cfg, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(&format!("{}\n", expected[0])));
    }

    #[test]
    fn zero_generations_draws_nothing() {
        let cfg = config(&["--size", "4", "--generations", "0"]);
        let mut out = Vec::new();
        run(&cfg, &mut out).unwrap();
        assert_eq!(out, b"\n");
    }
}
