//! The clock puzzle: turn the hand one hour at a time, either way, from a
//! start hour to an end hour.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::Serialize;
use smallvec::smallvec;

use crate::error::{PuzzleError, Result};
use crate::state::{Neighbors, SearchState};

/// Parameters of one clock puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockPuzzle {
    pub hours: u32,
    pub start: u32,
    pub end: u32,
}

impl ClockPuzzle {
    pub fn new(hours: u32, start: u32, end: u32) -> Result<Self> {
        let valid = 1..=hours;
        if hours == 0 || !valid.contains(&start) || !valid.contains(&end) {
            return Err(PuzzleError::InvalidClock { hours, start, end });
        }
        Ok(Self { hours, start, end })
    }

    /// The state the clock starts in.
    pub fn start_state(self: &Arc<Self>) -> ClockState {
        ClockState {
            puzzle: Arc::clone(self),
            hour: self.start,
        }
    }
}

/// The hour the hand currently points at.
#[derive(Debug, Clone, Serialize)]
pub struct ClockState {
    #[serde(skip)]
    puzzle: Arc<ClockPuzzle>,
    hour: u32,
}

impl ClockState {
    pub fn hour(&self) -> u32 {
        self.hour
    }
}

impl PartialEq for ClockState {
    fn eq(&self, other: &Self) -> bool {
        self.hour == other.hour
    }
}

impl Eq for ClockState {}

impl Hash for ClockState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hour.hash(state);
    }
}

impl SearchState for ClockState {
    fn is_goal(&self) -> bool {
        self.hour == self.puzzle.end
    }

    /// Back one hour, then forward one hour, wrapping around the dial.
    fn neighbors(&self) -> Neighbors<Self> {
        let hours = self.puzzle.hours;
        let prev = if self.hour <= 1 { hours } else { self.hour - 1 };
        let next = if self.hour >= hours { 1 } else { self.hour + 1 };

        smallvec![
            ClockState {
                puzzle: Arc::clone(&self.puzzle),
                hour: prev,
            },
            ClockState {
                puzzle: Arc::clone(&self.puzzle),
                hour: next,
            },
        ]
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hour)
    }
}
