//! Breadth-first puzzle solver.
//!
//! One generic engine ([`solver::solve`]) finds shortest solutions for any
//! puzzle whose positions implement [`SearchState`]. Three puzzles come with
//! it: a clock, water buckets, and TipOver, plus a console game for TipOver
//! with solver-backed hints.

pub mod clock;
pub mod error;
pub mod game;
pub mod logging;
pub mod puzzle;
pub mod shell;
pub mod solver;
pub mod state;
pub mod tipover;
pub mod water;

// Re-export main types
pub use clock::{ClockPuzzle, ClockState};
pub use error::PuzzleError;
pub use game::{MoveOutcome, TipOverGame};
pub use puzzle::{Direction, Position};
pub use shell::Shell;
pub use solver::{shortest_path, solve, SearchStats, SolverResult};
pub use state::{Neighbors, SearchState};
pub use tipover::{TipOverPuzzle, TipOverState};
pub use water::{WaterPuzzle, WaterState};
