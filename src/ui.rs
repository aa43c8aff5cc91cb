//! User interface rendering for the search visualization.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{animation, pathfinding::SearchEngine, types::CellState, App};

/// Order in which cell layers are painted onto the board.
const DRAW_ORDER: [CellState; 7] = [
    CellState::Empty,
    CellState::Barrier,
    CellState::Visited,
    CellState::Frontier,
    CellState::Path,
    CellState::Start,
    CellState::Target,
];

/// Key hints shown under the board.
const KEY_HINTS: &str = "(space) pause / (n) step / (r) reset / (q) quit";

/// Returns the tile colour of a cell state.
pub(crate) const fn state_colour(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::Rgb(255, 255, 255),
        CellState::Start => Color::Rgb(0, 0, 255),
        CellState::Barrier => Color::Rgb(0, 0, 0),
        CellState::Visited => Color::Rgb(0, 180, 0),
        CellState::Frontier => Color::Rgb(255, 234, 0),
        CellState::Path => Color::Rgb(255, 50, 0),
        CellState::Target => Color::Rgb(255, 0, 0),
    }
}

/// Returns the number of terminal rows the board occupies, borders excluded.
///
/// Every terminal row holds two half-block pixels, one per grid row, so odd grids round up.
///
/// # Errors
///
/// This function may return errors from integer conversion.
pub(crate) fn board_rows(size: u16) -> Result<u16> {
    Ok(u16::try_from(rounded_div::i32(i32::from(size), 2))?)
}

/// Returns the highest canvas pixel row of a board with the given number of terminal rows.
///
/// The first grid row is anchored there, so an odd grid leaves its spare half-block row at the
/// bottom of the board instead of between two grid rows.
pub(crate) const fn canvas_top(rows: u16) -> u16 {
    rows.saturating_mul(2).saturating_sub(1)
}

/// Builds the status line summarising the current run.
pub(crate) fn status_line(app: &App) -> String {
    let engine = &app.engine;
    let mut parts = vec![
        engine.status().repr().to_owned(),
        format!("expanded {}", engine.expanded()),
        format!("frontier {}", engine.frontier_len()),
    ];

    if let Some(cost) = engine.path_cost() {
        parts.push(format!(
            "path cost {cost} ({} cells)",
            engine.path().len()
        ));
    }
    if engine.path_truncated() {
        parts.push("path truncated".to_owned());
    }
    if app.paused {
        parts.push("paused".to_owned());
    }

    parts.join(" | ")
}

/// Updates the application UI based on the persistent state.
///
/// This function renders the board in the middle of the screen, a status line right under it and
/// the key hints at the bottom.
///
/// # Errors
///
/// This function may return errors from layout retrieval or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Board and padding area
        Constraint::Length(1), // Status line
        Constraint::Length(2), // Tooltip block
    ])
    .split(frame.area());

    let board_full_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get board area from layout")?;
    let status_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get status area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let size = app.engine.size();
    let rows = board_rows(size)?;
    let board_area = centered(
        board_full_area,
        size.saturating_add(2),
        rows.saturating_add(2),
    )?;

    board(&app.engine, frame, board_area, rows);

    let status = Line::styled(status_line(app), Style::default().fg(Color::Green)).centered();
    frame.render_widget(status, status_area);

    let tooltip_block = Block::bordered()
        .title(KEY_HINTS)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Carves a centered rectangle of the given dimensions out of an area.
///
/// # Errors
///
/// This function may return errors if the layout yields no rectangle.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let row = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area)
        .first()
        .copied()
        .ok_or_eyre("failed to get centered row from vertical layout")?;

    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(row)
        .first()
        .copied()
        .ok_or_eyre("failed to get centered area from horizontal layout")
}

/// Renders the grid as a [`Canvas`] with one half-block pixel per cell.
///
/// Cells are grouped by state and each group is painted as a single layer of [`Points`] in the
/// state's colour. The canvas spans `rows` terminal rows, two pixel rows each.
pub(crate) fn board(engine: &SearchEngine, frame: &mut Frame, area: Rect, rows: u16) {
    let size = engine.size();
    let grid = engine.grid();
    let top = canvas_top(rows);

    let layers: Vec<(Vec<(f64, f64)>, Color)> = DRAW_ORDER
        .iter()
        .map(|&state| {
            let positions: Vec<_> = grid
                .positions()
                .filter(|&position| grid.state(position) == Some(state))
                .collect();
            (
                animation::transform_grid_to_canvas_coords(&positions, top),
                state_colour(state),
            )
        })
        .collect();

    let canvas = Canvas::default()
        .block(
            Block::bordered()
                .title("A* search")
                .title_alignment(Alignment::Center)
                .style(Color::Green)
                .border_type(BorderType::Rounded),
        )
        .x_bounds([0., f64::from(size.saturating_sub(1))])
        .y_bounds([0., f64::from(top)])
        .marker(Marker::HalfBlock)
        .paint(|ctx| {
            for (coords, color) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });

    frame.render_widget(canvas, area);
}
