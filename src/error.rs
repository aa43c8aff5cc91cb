//! Error types raised while setting up a search run.
//!
//! Only configuration problems are errors. A search that runs out of frontier is a normal
//! terminal state ([`SearchStatus::Exhausted`](crate::types::SearchStatus::Exhausted)), and a
//! corrupted parent chain during path reconstruction is logged and recorded on the engine instead
//! of being propagated.

use thiserror::Error;

use crate::types::Position;

/// Smallest grid dimension accepted by the engine.
pub const MIN_GRID_SIZE: u16 = 2;

/// Largest grid dimension accepted by the engine.
pub const MAX_GRID_SIZE: u16 = 512;

/// Invalid geometry or barrier configuration, fatal to startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConfig {
    /// The grid dimension lies outside the supported range.
    #[error("grid size {size} is outside the supported range 2..=512")]
    GridSize {
        /// Requested grid dimension.
        size: u16,
    },
    /// The start coordinate does not fit in the grid.
    #[error("start {position} lies outside the {size}x{size} grid")]
    StartOutOfBounds {
        /// Requested start coordinate.
        position: Position,
        /// Grid dimension.
        size: u16,
    },
    /// The target coordinate does not fit in the grid.
    #[error("target {position} lies outside the {size}x{size} grid")]
    TargetOutOfBounds {
        /// Requested target coordinate.
        position: Position,
        /// Grid dimension.
        size: u16,
    },
    /// Start and target share the same cell.
    #[error("start and target must differ, both are {position}")]
    StartIsTarget {
        /// The shared coordinate.
        position: Position,
    },
    /// More barriers were requested than there are free cells.
    #[error("cannot place {requested} barriers, only {available} cells are free")]
    TooManyBarriers {
        /// Requested barrier count.
        requested: usize,
        /// Cells available once start and target are excluded.
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_message() {
        let err = InvalidConfig::GridSize { size: 1 };

        assert_eq!(
            err.to_string(),
            "grid size 1 is outside the supported range 2..=512"
        );
    }

    #[test]
    fn test_out_of_bounds_messages() {
        let start = InvalidConfig::StartOutOfBounds {
            position: Position::new(40, 1),
            size: 40,
        };
        let target = InvalidConfig::TargetOutOfBounds {
            position: Position::new(2, 41),
            size: 40,
        };

        assert_eq!(start.to_string(), "start (40, 1) lies outside the 40x40 grid");
        assert_eq!(
            target.to_string(),
            "target (2, 41) lies outside the 40x40 grid"
        );
    }

    #[test]
    fn test_too_many_barriers_message() {
        let err = InvalidConfig::TooManyBarriers {
            requested: 30,
            available: 23,
        };

        assert_eq!(
            err.to_string(),
            "cannot place 30 barriers, only 23 cells are free"
        );
    }
}
