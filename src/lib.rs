//! Incremental A* search on a fixed-size grid, together with a terminal visualizer that renders
//! the search one expanded cell per frame.
//!
//! The search itself lives in [`SearchEngine`], which owns the grid, the frontier and the closed
//! set of a run and advances by one expansion per [`SearchEngine::step`] call. Everything else in
//! the crate is the display side: the [`App`] frame loop, keyboard handling and ratatui rendering.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod animation;
mod app;
pub mod barriers;
pub mod config;
pub mod error;
mod events;
pub mod frontier;
pub mod grid;
pub mod pathfinding;
pub mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use error::InvalidConfig;
pub use pathfinding::SearchEngine;
pub use types::{CellState, Position, SearchStatus};
