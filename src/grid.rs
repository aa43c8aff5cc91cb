//! Grid data model.
//!
//! This module contains the [`Grid`] and [`Cell`] types the search engine mutates and the display
//! layer reads, along with the octile distance used both for step costs and for the heuristic.

use crate::{
    error::{InvalidConfig, MAX_GRID_SIZE, MIN_GRID_SIZE},
    types::{CellState, Position},
};

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: u32 = 10;

/// Cost of a diagonal step, roughly `10 * sqrt(2)`.
pub const DIAGONAL_COST: u32 = 14;

/// Offsets of the eight neighbours around a cell, in the order they are evaluated.
///
/// Diagonals come first, then the orthogonal neighbours. The order decides which predecessor
/// survives when equal-cost paths compete, so it must stay fixed.
pub(crate) const NEIGHBOUR_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
];

/// Octile distance between two cells.
///
/// Moving diagonally costs [`DIAGONAL_COST`] and moving orthogonally costs [`ORTHOGONAL_COST`],
/// so the distance is `14 * min(dx, dy) + 10 * (max(dx, dy) - min(dx, dy))`.
#[must_use]
pub fn octile_distance(from: Position, to: Position) -> u32 {
    let dx = u32::from(from.x.abs_diff(to.x));
    let dy = u32::from(from.y.abs_diff(to.y));
    let (short, long) = if dx < dy { (dx, dy) } else { (dy, dx) };

    DIAGONAL_COST * short + ORTHOGONAL_COST * (long - short)
}

/// Checks that a grid dimension and its two endpoints form a usable search setup.
///
/// # Errors
///
/// - [`InvalidConfig::GridSize`] if `size` is outside the supported range.
/// - [`InvalidConfig::StartOutOfBounds`] or [`InvalidConfig::TargetOutOfBounds`] if an endpoint
///   does not fit in the grid.
/// - [`InvalidConfig::StartIsTarget`] if both endpoints share a cell.
pub const fn validate_geometry(
    size: u16,
    start: Position,
    target: Position,
) -> Result<(), InvalidConfig> {
    if size < MIN_GRID_SIZE || size > MAX_GRID_SIZE {
        return Err(InvalidConfig::GridSize { size });
    }
    if start.x >= size || start.y >= size {
        return Err(InvalidConfig::StartOutOfBounds {
            position: start,
            size,
        });
    }
    if target.x >= size || target.y >= size {
        return Err(InvalidConfig::TargetOutOfBounds {
            position: target,
            size,
        });
    }
    if start.x == target.x && start.y == target.y {
        return Err(InvalidConfig::StartIsTarget { position: start });
    }

    Ok(())
}

/// Search bookkeeping and display state of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// State the display layer renders.
    pub state: CellState,
    /// Cost of the best known path from the start to this cell.
    pub g_cost: u32,
    /// Heuristic estimate of the remaining cost to the target.
    pub h_cost: u32,
    /// Sum of [`g_cost`](Cell::g_cost) and [`h_cost`](Cell::h_cost), used to order the frontier.
    pub f_cost: u32,
    /// Predecessor on the best known path; `None` for the start cell and for undiscovered cells.
    pub parent: Option<Position>,
}

/// Fixed-size square grid of cells.
///
/// Cells live in a flat vector indexed row by row. Start and target are set once at construction
/// and never move afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of cells along each side.
    size: u16,
    /// Row-major cell storage, `size * size` long.
    cells: Vec<Cell>,
    /// Coordinate of the start cell.
    start: Position,
    /// Coordinate of the target cell.
    target: Position,
}

impl Grid {
    /// Builds an empty grid with its start and target cells marked.
    ///
    /// # Errors
    ///
    /// Returns the [`InvalidConfig`] produced by [`validate_geometry`] if the dimension or either
    /// endpoint is unusable.
    pub fn new(size: u16, start: Position, target: Position) -> Result<Self, InvalidConfig> {
        validate_geometry(size, start, target)?;

        let side = usize::from(size);
        let mut grid = Self {
            size,
            cells: vec![Cell::default(); side * side],
            start,
            target,
        };

        if let Some(cell) = grid.cell_mut(start) {
            cell.state = CellState::Start;
        }
        if let Some(cell) = grid.cell_mut(target) {
            cell.state = CellState::Target;
        }

        Ok(grid)
    }

    /// Returns the number of cells along each side.
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether the grid holds no cells, which a validated grid never does.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the start coordinate.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the target coordinate.
    #[must_use]
    pub const fn target(&self) -> Position {
        self.target
    }

    /// Returns whether the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    /// Maps a coordinate to its slot in the flat cell storage.
    #[must_use]
    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position).then(|| {
            usize::from(position.y) * usize::from(self.size) + usize::from(position.x)
        })
    }

    /// Returns the cell at a coordinate.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|idx| self.cells.get(idx))
    }

    /// Returns the cell at a coordinate for mutation.
    pub(crate) fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index(position).and_then(|idx| self.cells.get_mut(idx))
    }

    /// Returns the display state of the cell at a coordinate.
    #[must_use]
    pub fn state(&self, position: Position) -> Option<CellState> {
        self.cell(position).map(|cell| cell.state)
    }

    /// Marks the given coordinates as barriers and returns how many were placed.
    ///
    /// Coordinates outside the grid, on the start cell or on the target cell are skipped.
    pub(crate) fn place_barriers(&mut self, barriers: &[Position]) -> usize {
        let mut placed = 0;
        for &position in barriers {
            if position == self.start || position == self.target {
                continue;
            }
            if let Some(cell) = self.cell_mut(position) {
                if cell.state != CellState::Barrier {
                    cell.state = CellState::Barrier;
                    placed += 1;
                }
            }
        }

        placed
    }

    /// Iterates over the in-bounds neighbours of a cell in evaluation order.
    pub fn neighbours(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| position.offset(dx, dy))
            .filter(|neighbour| self.contains(*neighbour))
    }

    /// Iterates over every coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octile_distance_straight_and_diagonal() {
        let origin = Position::new(0, 0);

        assert_eq!(octile_distance(origin, origin), 0);
        assert_eq!(octile_distance(origin, Position::new(3, 0)), 30);
        assert_eq!(octile_distance(origin, Position::new(0, 3)), 30);
        assert_eq!(octile_distance(origin, Position::new(4, 4)), 56);
        assert_eq!(octile_distance(origin, Position::new(2, 5)), 58);
    }

    #[test]
    fn test_octile_distance_is_symmetric() {
        let from = Position::new(3, 8);
        let to = Position::new(38, 38);

        assert_eq!(octile_distance(from, to), octile_distance(to, from));
        assert_eq!(octile_distance(from, to), 14 * 30 + 10 * 5);
    }

    #[test]
    fn test_validate_geometry_ok() {
        assert_eq!(
            validate_geometry(40, Position::new(3, 8), Position::new(38, 38)),
            Ok(())
        );
    }

    #[test]
    fn test_validate_geometry_rejects_bad_size() {
        assert_eq!(
            validate_geometry(1, Position::new(0, 0), Position::new(0, 0)),
            Err(InvalidConfig::GridSize { size: 1 })
        );
        assert_eq!(
            validate_geometry(513, Position::new(0, 0), Position::new(1, 1)),
            Err(InvalidConfig::GridSize { size: 513 })
        );
    }

    #[test]
    fn test_validate_geometry_rejects_out_of_bounds() {
        assert_eq!(
            validate_geometry(10, Position::new(10, 0), Position::new(1, 1)),
            Err(InvalidConfig::StartOutOfBounds {
                position: Position::new(10, 0),
                size: 10
            })
        );
        assert_eq!(
            validate_geometry(10, Position::new(0, 0), Position::new(1, 10)),
            Err(InvalidConfig::TargetOutOfBounds {
                position: Position::new(1, 10),
                size: 10
            })
        );
    }

    #[test]
    fn test_validate_geometry_rejects_shared_endpoint() {
        assert_eq!(
            validate_geometry(10, Position::new(4, 4), Position::new(4, 4)),
            Err(InvalidConfig::StartIsTarget {
                position: Position::new(4, 4)
            })
        );
    }

    #[test]
    fn test_grid_new_marks_endpoints() {
        let grid =
            Grid::new(5, Position::new(0, 0), Position::new(4, 4)).expect("valid geometry");

        assert_eq!(grid.len(), 25);
        assert!(!grid.is_empty());
        assert_eq!(grid.state(Position::new(0, 0)), Some(CellState::Start));
        assert_eq!(grid.state(Position::new(4, 4)), Some(CellState::Target));
        assert_eq!(grid.state(Position::new(2, 2)), Some(CellState::Empty));
        assert_eq!(grid.state(Position::new(5, 0)), None);
    }

    #[test]
    fn test_grid_index_is_row_major() {
        let grid =
            Grid::new(5, Position::new(0, 0), Position::new(4, 4)).expect("valid geometry");

        assert_eq!(grid.index(Position::new(0, 0)), Some(0));
        assert_eq!(grid.index(Position::new(4, 0)), Some(4));
        assert_eq!(grid.index(Position::new(0, 1)), Some(5));
        assert_eq!(grid.index(Position::new(4, 4)), Some(24));
        assert_eq!(grid.index(Position::new(0, 5)), None);
    }

    #[test]
    fn test_place_barriers_skips_endpoints_and_out_of_bounds() {
        let mut grid =
            Grid::new(5, Position::new(0, 0), Position::new(4, 4)).expect("valid geometry");

        let placed = grid.place_barriers(&[
            Position::new(0, 0),
            Position::new(4, 4),
            Position::new(9, 9),
            Position::new(2, 2),
            Position::new(2, 2),
            Position::new(1, 3),
        ]);

        assert_eq!(placed, 2);
        assert_eq!(grid.state(Position::new(0, 0)), Some(CellState::Start));
        assert_eq!(grid.state(Position::new(4, 4)), Some(CellState::Target));
        assert_eq!(grid.state(Position::new(2, 2)), Some(CellState::Barrier));
        assert_eq!(grid.state(Position::new(1, 3)), Some(CellState::Barrier));
    }

    #[test]
    fn test_neighbours_in_corner() {
        let grid =
            Grid::new(5, Position::new(0, 0), Position::new(4, 4)).expect("valid geometry");

        let neighbours: Vec<Position> = grid.neighbours(Position::new(0, 0)).collect();

        assert_eq!(
            neighbours,
            vec![
                Position::new(1, 1),
                Position::new(1, 0),
                Position::new(0, 1)
            ]
        );
    }

    #[test]
    fn test_neighbours_in_interior_follow_fixed_order() {
        let grid =
            Grid::new(5, Position::new(0, 0), Position::new(4, 4)).expect("valid geometry");

        let neighbours: Vec<Position> = grid.neighbours(Position::new(2, 2)).collect();

        assert_eq!(
            neighbours,
            vec![
                Position::new(1, 1),
                Position::new(3, 3),
                Position::new(3, 1),
                Position::new(1, 3),
                Position::new(3, 2),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_neighbours_on_far_edge() {
        let grid =
            Grid::new(5, Position::new(0, 0), Position::new(4, 4)).expect("valid geometry");

        assert_eq!(grid.neighbours(Position::new(4, 4)).count(), 3);
        assert_eq!(grid.neighbours(Position::new(4, 2)).count(), 5);
    }

    #[test]
    fn test_positions_cover_grid_in_row_major_order() {
        let grid =
            Grid::new(3, Position::new(0, 0), Position::new(2, 2)).expect("valid geometry");

        let positions: Vec<Position> = grid.positions().collect();

        assert_eq!(positions.len(), 9);
        assert_eq!(positions.first(), Some(&Position::new(0, 0)));
        assert_eq!(positions.get(1), Some(&Position::new(1, 0)));
        assert_eq!(positions.last(), Some(&Position::new(2, 2)));
    }
}
