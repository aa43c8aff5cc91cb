//! Open set of the search.
//!
//! The frontier hands out the discovered cell with the lowest `f_cost` first. It is a
//! [`BinaryHeap`] with lazy invalidation: updating a member pushes a fresh entry and leaves the
//! old one in the heap, where it is recognised as stale and dropped once it surfaces.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap},
};

use crate::types::Position;

/// Heap entry pairing a cell with the key it was pushed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FrontierEntry {
    /// Ordering key at the time of the push.
    f_cost: u32,
    /// Push counter, used to break ties between equal keys.
    sequence: u64,
    /// Cell the entry refers to.
    position: Position,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on the key so the max-heap yields the lowest f_cost; among equal keys the most
        // recent push wins.
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority structure of discovered, not yet expanded cells.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    /// Every entry ever pushed and not yet popped, stale ones included.
    heap: BinaryHeap<FrontierEntry>,
    /// Current members and the key each one is ordered by.
    live: BTreeMap<Position, u32>,
    /// Number of pushes so far.
    sequence: u64,
}

impl Frontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a cell, or re-keys it if it is already a member.
    pub fn push(&mut self, position: Position, f_cost: u32) {
        let _ = self.live.insert(position, f_cost);
        self.sequence += 1;
        self.heap.push(FrontierEntry {
            f_cost,
            sequence: self.sequence,
            position,
        });
    }

    /// Removes and returns the member with the lowest key.
    pub fn pop(&mut self) -> Option<Position> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.position) == Some(&entry.f_cost) {
                let _ = self.live.remove(&entry.position);
                return Some(entry.position);
            }
        }

        None
    }

    /// Returns whether the cell is currently a member.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.live.contains_key(&position)
    }

    /// Returns the key a member is currently ordered by.
    #[must_use]
    pub fn key(&self, position: Position) -> Option<u32> {
        self.live.get(&position).copied()
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns whether the frontier has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
