//! Event handling functions for user input and search pacing.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::App;

/// Polling timeout used while the search is not advancing on its own.
const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Returns how long to wait for input before the next frame.
///
/// A running search waits only until its next step is due. A paused or finished one has nothing
/// to animate, so the loop falls back to a fixed timeout instead of redrawing continuously.
pub(crate) fn poll_timeout(app: &App) -> Duration {
    if app.paused || app.engine.status().is_done() {
        IDLE_POLL_TIMEOUT
    } else {
        app.clock.remaining()
    }
}

/// Handles input events and advances the search when a frame is due.
///
/// This function polls for keyboard events for at most [`poll_timeout`], dispatches any key press
/// to [`handle_key`] and then lets the frame clock decide whether the search moves forward.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(poll_timeout(app))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    app.update();

    Ok(())
}

/// Applies a single key press to the application state.
///
/// - `q` or `Esc` quits.
/// - `Space` pauses or resumes the search.
/// - `n` expands exactly one cell while paused.
/// - `r` starts over with fresh barriers.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char(' ') => app.toggle_pause(),
        KeyCode::Char('n') => handle_n_events(app),
        KeyCode::Char('r') => app.reset()?,
        _ => {}
    }

    Ok(())
}

/// Handles 'n' key press events for single stepping.
///
/// Stepping by hand only makes sense while the frame clock is held back, so the key is ignored
/// while the search runs on its own.
pub(crate) fn handle_n_events(app: &mut App) {
    if app.paused {
        let _ = app.engine.step();
    }
}
