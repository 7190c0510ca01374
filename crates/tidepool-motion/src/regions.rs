//! Destination regions and the policy for picking the next one.

use glam::Vec3;
use rand::Rng;

/// Fixed set of candidate destinations.
#[derive(Debug, Clone)]
pub struct RegionSet {
    positions: Vec<Vec3>,
    start: usize,
}

impl RegionSet {
    /// `start` is the region forced on the first selection.
    pub fn new(positions: Vec<Vec3>, start: usize) -> Self {
        Self { positions, start }
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).copied()
    }

    /// Pick the next region. The first pick (`current == None`) is always the
    /// start region; afterwards regions are drawn uniformly and redrawn until
    /// they differ from `current`.
    pub fn select_next<R: Rng + ?Sized>(&self, current: Option<usize>, rng: &mut R) -> usize {
        let Some(current) = current else {
            return self.start;
        };
        // A single region has nowhere else to go.
        if self.positions.len() < 2 {
            return current;
        }
        loop {
            let candidate = rng.gen_range(0..self.positions.len());
            if candidate != current {
                return candidate;
            }
        }
    }
}
