//! Incremental A* search.
//!
//! This module contains the [`SearchEngine`], which owns the grid, the frontier and the closed set
//! of a single run and advances the search by exactly one expansion per [`step`] call, so that a
//! display loop can render the progress frame by frame.
//!
//! [`step`]: SearchEngine::step

use log::{debug, warn};

use crate::{
    error::InvalidConfig,
    frontier::Frontier,
    grid::{octile_distance, Cell, Grid},
    types::{CellState, Position, SearchStatus},
};

/// Outcome of walking the parent chain back from the cell that discovered the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reconstruction {
    /// The walk reached the start cell.
    Complete,
    /// The walk did not reach the start within the iteration cap.
    Overrun,
    /// The walk met a parent coordinate that lies outside the grid.
    Dangling(Position),
}

/// Decides whether a newly found route to a neighbour replaces what is recorded for it.
///
/// Cells outside the frontier are always taken. Frontier members are re-parented when the new
/// route is no worse than the recorded one; ties are accepted, so a later equal-cost route wins.
const fn accepts_update(in_frontier: bool, tentative_g: u32, recorded_g: u32) -> bool {
    !in_frontier || tentative_g <= recorded_g
}

/// Search state of a single run, advanced one expansion at a time.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    /// Cells with their display state and cost bookkeeping.
    grid: Grid,
    /// Discovered cells waiting to be expanded.
    frontier: Frontier,
    /// Expanded cells, parallel to the grid storage.
    closed: Vec<bool>,
    /// Where the run stands.
    status: SearchStatus,
    /// Number of expanded cells.
    expanded: usize,
    /// Reconstructed path from start to target, once found.
    path: Vec<Position>,
    /// Total cost of the reconstructed path, once found.
    path_cost: Option<u32>,
    /// Whether path reconstruction had to give up on a broken parent chain.
    path_truncated: bool,
}

impl SearchEngine {
    /// Sets up a run on a fresh grid.
    ///
    /// Barriers on the start cell, on the target cell or outside the grid are skipped. The start
    /// cell is seeded into the frontier with its costs estimated from the octile distance.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidConfig`] if the grid dimension is unsupported or if the start or target
    /// cell is out of bounds or shared.
    pub fn new(
        size: u16,
        start: Position,
        target: Position,
        barriers: &[Position],
    ) -> Result<Self, InvalidConfig> {
        let mut grid = Grid::new(size, start, target)?;
        let placed = grid.place_barriers(barriers);

        let g_cost = octile_distance(start, start);
        let h_cost = octile_distance(start, target);
        if let Some(cell) = grid.cell_mut(start) {
            cell.g_cost = g_cost;
            cell.h_cost = h_cost;
            cell.f_cost = g_cost + h_cost;
            cell.parent = None;
        }

        let mut frontier = Frontier::new();
        frontier.push(start, g_cost + h_cost);

        debug!(
            "search initialised on {size}x{size} grid from {start} to {target} with {placed} barriers"
        );

        Ok(Self {
            closed: vec![false; grid.len()],
            grid,
            frontier,
            status: SearchStatus::Running,
            expanded: 0,
            path: Vec::new(),
            path_cost: None,
            path_truncated: false,
        })
    }

    /// Expands the most promising frontier cell and returns the resulting status.
    ///
    /// Calling this once the run is done changes nothing.
    pub fn step(&mut self) -> SearchStatus {
        if self.status.is_done() {
            return self.status;
        }

        let Some(current) = self.frontier.pop() else {
            self.status = SearchStatus::Exhausted;
            debug!(
                "frontier exhausted after {} expansions, no path exists",
                self.expanded
            );
            return self.status;
        };

        if let Some(closed) = self
            .grid
            .index(current)
            .and_then(|idx| self.closed.get_mut(idx))
        {
            *closed = true;
        }
        self.expanded += 1;

        let start = self.grid.start();
        let target = self.grid.target();
        let Some(cell) = self.grid.cell_mut(current) else {
            return self.status;
        };
        if current != start {
            cell.state = CellState::Visited;
        }
        let current_g = cell.g_cost;

        let neighbours: Vec<Position> = self.grid.neighbours(current).collect();
        for neighbour in neighbours {
            if neighbour == target {
                self.finish(current);
                return self.status;
            }
            self.relax(current, current_g, neighbour);
        }

        self.status
    }

    /// Records a route to `neighbour` through `current` if it is admissible and no worse than the
    /// one already known.
    fn relax(&mut self, current: Position, current_g: u32, neighbour: Position) {
        if self.is_closed(neighbour) {
            return;
        }

        let target = self.grid.target();
        let in_frontier = self.frontier.contains(neighbour);
        let Some(cell) = self.grid.cell_mut(neighbour) else {
            return;
        };
        if cell.state == CellState::Barrier {
            return;
        }

        let tentative_g = current_g + octile_distance(current, neighbour);
        if !accepts_update(in_frontier, tentative_g, cell.g_cost) {
            return;
        }

        cell.g_cost = tentative_g;
        cell.h_cost = octile_distance(neighbour, target);
        cell.f_cost = cell.g_cost + cell.h_cost;
        cell.parent = Some(current);
        if cell.state == CellState::Empty {
            cell.state = CellState::Frontier;
        }

        let f_cost = cell.f_cost;
        self.frontier.push(neighbour, f_cost);
    }

    /// Ends the run successfully, `discoverer` being the cell whose expansion reached the target.
    fn finish(&mut self, discoverer: Position) {
        self.status = SearchStatus::Found;

        let target = self.grid.target();
        self.path_cost = self
            .grid
            .cell(discoverer)
            .map(|cell| cell.g_cost + octile_distance(discoverer, target));

        match self.reconstruct_path(discoverer) {
            Reconstruction::Complete => {
                debug!(
                    "target {target} reached after {} expansions, path of {} cells",
                    self.expanded,
                    self.path.len()
                );
            }
            Reconstruction::Overrun => {
                self.path_truncated = true;
                warn!(
                    "path reconstruction exceeded {} iterations, parent chain is cyclic",
                    self.grid.len()
                );
            }
            Reconstruction::Dangling(parent) => {
                self.path_truncated = true;
                warn!("path reconstruction hit parent {parent} outside the grid");
            }
        }
    }

    /// Walks the parent chain from `from` back to the start, marking every cell on it as part of
    /// the path.
    ///
    /// The walk gives up after as many iterations as there are cells, leaving whatever it marked
    /// so far in place.
    fn reconstruct_path(&mut self, from: Position) -> Reconstruction {
        let cap = self.grid.len();
        let mut chain = Vec::new();
        let mut cursor = Some(from);

        let outcome = loop {
            let Some(position) = cursor else {
                break Reconstruction::Complete;
            };
            if chain.len() >= cap {
                break Reconstruction::Overrun;
            }
            let Some(cell) = self.grid.cell_mut(position) else {
                break Reconstruction::Dangling(position);
            };

            cell.state = CellState::Path;
            chain.push(position);
            cursor = cell.parent;
        };

        chain.reverse();
        if outcome == Reconstruction::Complete {
            chain.push(self.grid.target());
        }
        self.path = chain;

        outcome
    }

    /// Returns the display state of the cell at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn cell_state(&self, x: u16, y: u16) -> Option<CellState> {
        self.grid.state(Position::new(x, y))
    }

    /// Returns the cell at a coordinate.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.grid.cell(position)
    }

    /// Returns the grid the run operates on.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the number of cells along each side of the grid.
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.grid.size()
    }

    /// Returns the start coordinate.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.grid.start()
    }

    /// Returns the target coordinate.
    #[must_use]
    pub const fn target(&self) -> Position {
        self.grid.target()
    }

    /// Returns where the run stands.
    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    /// Returns the number of cells expanded so far.
    #[must_use]
    pub const fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the number of cells waiting in the frontier.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Returns whether the cell is waiting in the frontier.
    #[must_use]
    pub fn in_frontier(&self, position: Position) -> bool {
        self.frontier.contains(position)
    }

    /// Returns whether the cell has been expanded.
    #[must_use]
    pub fn is_closed(&self, position: Position) -> bool {
        self.grid
            .index(position)
            .and_then(|idx| self.closed.get(idx))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the reconstructed path from start to target, empty until the target is found.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Returns the total cost of the path, once the target is found.
    #[must_use]
    pub const fn path_cost(&self) -> Option<u32> {
        self.path_cost
    }

    /// Returns whether path reconstruction was aborted on a broken parent chain.
    #[must_use]
    pub const fn path_truncated(&self) -> bool {
        self.path_truncated
    }
}
