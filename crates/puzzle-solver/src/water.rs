//! The water bucket puzzle: empty, fill, and pour between buckets until one
//! of them holds the target amount.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::Serialize;

use crate::error::{PuzzleError, Result};
use crate::state::{Neighbors, SearchState};

/// Parameters of one bucket puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaterPuzzle {
    /// Amount some bucket must end up holding
    pub amount: u32,
    /// Capacity of each bucket
    pub capacities: Vec<u32>,
}

impl WaterPuzzle {
    pub fn new(amount: u32, capacities: Vec<u32>) -> Result<Self> {
        if capacities.is_empty() {
            return Err(PuzzleError::NoBuckets);
        }
        Ok(Self { amount, capacities })
    }

    /// Every bucket empty.
    pub fn start_state(self: &Arc<Self>) -> WaterState {
        WaterState {
            puzzle: Arc::clone(self),
            levels: vec![0; self.capacities.len()],
        }
    }
}

/// Current fill level of every bucket.
#[derive(Debug, Clone, Serialize)]
pub struct WaterState {
    #[serde(skip)]
    puzzle: Arc<WaterPuzzle>,
    levels: Vec<u32>,
}

impl WaterState {
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    fn with_levels(&self, levels: Vec<u32>) -> Self {
        Self {
            puzzle: Arc::clone(&self.puzzle),
            levels,
        }
    }

    /// Pour bucket `from` into bucket `to` until `from` is empty or `to` is full.
    fn pour(&self, from: usize, to: usize) -> Vec<u32> {
        let mut levels = self.levels.clone();
        let room = self.puzzle.capacities[to].saturating_sub(levels[to]);
        let moved = room.min(levels[from]);
        levels[from] -= moved;
        levels[to] += moved;
        levels
    }
}

impl PartialEq for WaterState {
    fn eq(&self, other: &Self) -> bool {
        self.levels == other.levels
    }
}

impl Eq for WaterState {}

impl Hash for WaterState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.levels.hash(state);
    }
}

impl SearchState for WaterState {
    fn is_goal(&self) -> bool {
        self.levels.contains(&self.puzzle.amount)
    }

    /// For each bucket in turn: empty it, fill it, then pour it into every
    /// other bucket. Moves that change nothing, or repeat an earlier
    /// candidate, are left out.
    fn neighbors(&self) -> Neighbors<Self> {
        let mut neighbors: Neighbors<Self> = Neighbors::new();
        let mut push = |levels: Vec<u32>| {
            if levels != self.levels && !neighbors.iter().any(|n: &WaterState| n.levels == levels) {
                neighbors.push(self.with_levels(levels));
            }
        };

        let count = self.levels.len();
        for i in 0..count {
            let mut emptied = self.levels.clone();
            emptied[i] = 0;
            push(emptied);

            let mut filled = self.levels.clone();
            filled[i] = self.puzzle.capacities[i];
            push(filled);

            for j in (0..count).filter(|&j| j != i) {
                push(self.pour(i, j));
            }
        }

        neighbors
    }
}

impl fmt::Display for WaterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.levels)
    }
}
