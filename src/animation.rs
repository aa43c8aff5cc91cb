//! Frame pacing and canvas coordinate helpers for the search visualization.

use std::time::{Duration, Instant};

use crate::types::Position;

/// Clock deciding when the next search step is due.
///
/// The frame loop asks the clock on every iteration; the clock answers `true` at most once per
/// configured delay.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameClock {
    /// Minimum time between two search steps.
    pub(crate) delay: Duration,
    /// Time the last step was let through.
    pub(crate) last_tick: Instant,
}

impl FrameClock {
    /// Creates a clock with the given delay, counting from now.
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_tick: Instant::now(),
        }
    }

    /// Restarts the countdown to the next step.
    pub(crate) fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Returns whether a step is due, restarting the countdown if so.
    pub(crate) fn tick(&mut self) -> bool {
        if self.last_tick.elapsed() >= self.delay {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }

    /// Returns how long until the next step is due.
    ///
    /// The event loop uses this as its polling timeout so that input stays responsive without
    /// delaying the search.
    pub(crate) fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.last_tick.elapsed())
    }
}

/// Transforms grid coordinates to canvas coordinates.
///
/// Grid rows grow downwards while canvas rows grow upwards, so the first grid row is drawn on the
/// `top` canvas row and a cell `(x, y)` lands at `(x, top - y)`. When the canvas has fewer pixel
/// rows than `top + 1`, nothing is drawn on the spare rows at the bottom.
pub(crate) fn transform_grid_to_canvas_coords(
    positions: &[Position],
    top: u16,
) -> Vec<(f64, f64)> {
    positions
        .iter()
        .map(|position| {
            (
                f64::from(position.x),
                f64::from(top.saturating_sub(position.y)),
            )
        })
        .collect()
}
