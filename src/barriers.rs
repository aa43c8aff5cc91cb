//! Random barrier placement.
//!
//! Barriers are sampled uniformly and without replacement from every cell except the start and
//! the target, so the requested count is always the number of distinct barriers on the grid.

use rand::{seq::SliceRandom as _, Rng};

use crate::{error::InvalidConfig, types::Position};

/// Returns the number of cells barriers may be placed on.
#[must_use]
pub fn available_cells(size: u16) -> usize {
    let side = usize::from(size);
    (side * side).saturating_sub(2)
}

/// Draws `count` distinct barrier positions for a grid of the given dimension.
///
/// The start and target cells are never drawn. The order of the returned positions follows the
/// random draw.
///
/// # Errors
///
/// Returns [`InvalidConfig::TooManyBarriers`] if `count` exceeds the number of cells left once the
/// start and target are excluded.
pub fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    size: u16,
    start: Position,
    target: Position,
    count: usize,
) -> Result<Vec<Position>, InvalidConfig> {
    let available = available_cells(size);
    if count > available {
        return Err(InvalidConfig::TooManyBarriers {
            requested: count,
            available,
        });
    }

    let candidates: Vec<Position> = (0..size)
        .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
        .filter(|&position| position != start && position != target)
        .collect();

    Ok(candidates.choose_multiple(rng, count).copied().collect())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    #[test]
    fn test_available_cells() {
        assert_eq!(available_cells(40), 1598);
        assert_eq!(available_cells(2), 2);
    }

    #[test]
    fn test_samples_are_distinct_and_exclude_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = Position::new(3, 8);
        let target = Position::new(38, 38);

        let barriers =
            sample(&mut rng, 40, start, target, 1000).expect("enough free cells");
        let distinct: BTreeSet<Position> = barriers.iter().copied().collect();

        assert_eq!(barriers.len(), 1000);
        assert_eq!(distinct.len(), 1000, "barriers must not repeat");
        assert!(!distinct.contains(&start));
        assert!(!distinct.contains(&target));
        assert!(barriers
            .iter()
            .all(|position| position.x < 40 && position.y < 40));
    }

    #[test]
    fn test_sample_fills_every_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Position::new(0, 0);
        let target = Position::new(2, 2);

        let barriers = sample(&mut rng, 3, start, target, 7).expect("exactly full");
        let distinct: BTreeSet<Position> = barriers.into_iter().collect();

        assert_eq!(distinct.len(), 7);
        assert!(!distinct.contains(&start));
        assert!(!distinct.contains(&target));
    }

    #[test]
    fn test_sample_rejects_overfull_grid() {
        let mut rng = StdRng::seed_from_u64(1);

        let result = sample(&mut rng, 3, Position::new(0, 0), Position::new(2, 2), 8);

        assert_eq!(
            result,
            Err(InvalidConfig::TooManyBarriers {
                requested: 8,
                available: 7
            })
        );
    }

    #[test]
    fn test_sample_is_reproducible_with_seed() {
        let start = Position::new(0, 0);
        let target = Position::new(9, 9);

        let first = sample(&mut StdRng::seed_from_u64(42), 10, start, target, 30)
            .expect("enough free cells");
        let second = sample(&mut StdRng::seed_from_u64(42), 10, start, target, 30)
            .expect("enough free cells");

        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_of_zero_barriers() {
        let mut rng = StdRng::seed_from_u64(3);

        let barriers = sample(&mut rng, 5, Position::new(0, 0), Position::new(4, 4), 0)
            .expect("zero barriers always fit");

        assert!(barriers.is_empty());
    }
}
