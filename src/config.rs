//! Command-line configuration of a visualization run.

use std::time::Duration;

use clap::Parser;

use crate::{barriers, error::InvalidConfig, grid, types::Position};

/// Default number of cells along each side of the grid.
pub const DEFAULT_GRID_SIZE: u16 = 40;

/// Default number of random barriers.
pub const DEFAULT_BARRIER_COUNT: usize = 1000;

/// Default delay between two search steps, in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 10;

/// Options recognised on the command line.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(
    version,
    about = "Watch A* search a grid, one expanded cell per frame.",
    long_about = None
)]
pub struct Config {
    /// Number of cells along each side of the grid.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: u16,
    /// Start cell, given as `X,Y`.
    #[arg(long, default_value = "3,8", value_parser = parse_position)]
    pub start: Position,
    /// Target cell, given as `X,Y`.
    #[arg(long, default_value = "38,38", value_parser = parse_position)]
    pub target: Position,
    /// Number of distinct barriers placed at random.
    #[arg(long, default_value_t = DEFAULT_BARRIER_COUNT)]
    pub barriers: usize,
    /// Seed for barrier placement; drawn from system entropy when absent.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Milliseconds to wait between two search steps.
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            start: Position::new(3, 8),
            target: Position::new(38, 38),
            barriers: DEFAULT_BARRIER_COUNT,
            seed: None,
            frame_delay: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

impl Config {
    /// Checks the grid geometry and the barrier count before anything is built from them.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidConfig`] found: an unsupported grid size, a start or target
    /// outside the grid, a shared start and target, or more barriers than free cells.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        grid::validate_geometry(self.size, self.start, self.target)?;

        let available = barriers::available_cells(self.size);
        if self.barriers > available {
            return Err(InvalidConfig::TooManyBarriers {
                requested: self.barriers,
                available,
            });
        }

        Ok(())
    }

    /// Returns the delay between two search steps.
    #[must_use]
    pub const fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay)
    }
}

/// Parses a coordinate given as `X,Y`.
///
/// Whitespace around either component is ignored.
///
/// # Errors
///
/// Returns a message suitable for a usage error if the separator is missing or a component is not
/// a valid `u16`.
pub fn parse_position(input: &str) -> Result<Position, String> {
    let (x, y) = input
        .split_once(',')
        .ok_or_else(|| format!("expected a coordinate as X,Y, got `{input}`"))?;

    let x = x
        .trim()
        .parse::<u16>()
        .map_err(|err| format!("invalid column `{}`: {err}", x.trim()))?;
    let y = y
        .trim()
        .parse::<u16>()
        .map_err(|err| format!("invalid row `{}`: {err}", y.trim()))?;

    Ok(Position::new(x, y))
}
