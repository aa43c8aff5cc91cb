//! Type definitions shared by the search engine and the display layer.

use std::fmt;

/// Grid coordinate of a single cell.
///
/// Coordinates are stored as `u16` so that every conversion into indices, costs and canvas
/// coordinates is lossless. The origin sits in the top-left corner of the grid, with `x` growing
/// to the right and `y` growing downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column of the cell.
    pub x: u16,
    /// Row of the cell.
    pub y: u16,
}

impl Position {
    /// Builds a new position from a column and a row.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Returns the position displaced by the given offset, if it does not underflow or overflow.
    ///
    /// Grid bounds are not checked here; that is the job of [`Grid`](crate::grid::Grid).
    #[must_use]
    pub const fn offset(self, dx: i16, dy: i16) -> Option<Self> {
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };

        Some(Self { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

/// Display state of a grid cell.
///
/// This enumeration is what the display layer polls every frame to decide the colour of each
/// tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    /// Untouched, walkable cell.
    #[default]
    Empty,
    /// The cell the search starts from.
    Start,
    /// Impassable cell.
    Barrier,
    /// Cell that has already been expanded.
    Visited,
    /// Cell that has been discovered and waits to be expanded.
    Frontier,
    /// Cell on the reconstructed path.
    Path,
    /// The cell the search is looking for.
    Target,
}

/// Lifecycle of a single search run.
///
/// A run starts off [`Running`](SearchStatus::Running) and ends in one of the two terminal
/// states, after which stepping the search is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The frontier still holds cells and the target has not been reached.
    Running,
    /// The target was discovered and the path has been reconstructed.
    Found,
    /// The frontier ran dry before the target was reached; no path exists.
    Exhausted,
}

impl SearchStatus {
    /// Returns whether the search has reached a terminal state.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }

    /// Returns the human readable label used in the status line.
    #[must_use]
    pub const fn repr(self) -> &'static str {
        match self {
            Self::Running => "Searching",
            Self::Found => "Path found",
            Self::Exhausted => "No path",
        }
    }
}
