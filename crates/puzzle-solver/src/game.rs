//! A TipOver game in progress: the current board, player moves, and hints.
//!
//! Every call reports what happened through its return value; front ends
//! decide what to print.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::puzzle::Direction;
use crate::solver::shortest_path;
use crate::state::SearchState;
use crate::tipover::{TipOverPuzzle, TipOverState};

/// What a move or hint did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The tipper moved. `tipped` is set when a tower fell over.
    Moved { tipped: bool, solved: bool },
    /// No legal move that way
    Illegal,
    /// The goal was already reached; nothing to do
    AlreadySolved,
    /// No sequence of moves reaches the goal from here
    Unsolvable,
}

#[derive(Debug)]
pub struct TipOverGame {
    puzzle: Arc<TipOverPuzzle>,
    source: Option<PathBuf>,
    current: TipOverState,
}

impl TipOverGame {
    /// Start a game from a puzzle file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut game = Self::from_puzzle(TipOverPuzzle::load(path)?);
        game.source = Some(path.to_path_buf());
        Ok(game)
    }

    pub fn from_puzzle(puzzle: TipOverPuzzle) -> Self {
        let puzzle = Arc::new(puzzle);
        let current = puzzle.start_state();
        Self {
            puzzle,
            source: None,
            current,
        }
    }

    /// Back to the starting board, re-reading the puzzle file if there is one.
    pub fn reload(&mut self) -> Result<()> {
        if let Some(path) = &self.source {
            self.puzzle = Arc::new(TipOverPuzzle::load(path)?);
        }
        self.current = self.puzzle.start_state();
        info!("puzzle reset to its starting board");
        Ok(())
    }

    pub fn current(&self) -> &TipOverState {
        &self.current
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_solved(&self) -> bool {
        self.current.is_goal()
    }

    /// Move the tipper toward `direction`, stepping or tipping as the board allows.
    pub fn make_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_solved() {
            return MoveOutcome::AlreadySolved;
        }
        match self.current.move_toward(direction) {
            Some(next) => {
                debug!(%direction, "player move");
                self.advance(next)
            }
            None => MoveOutcome::Illegal,
        }
    }

    /// Make the first move of a shortest solution from the current board.
    pub fn hint(&mut self) -> MoveOutcome {
        if self.is_solved() {
            return MoveOutcome::AlreadySolved;
        }
        let next = shortest_path(self.current.clone()).and_then(|path| path.into_iter().nth(1));
        match next {
            Some(next) => {
                debug!(tipper = %next.tipper(), "hint move");
                self.advance(next)
            }
            None => MoveOutcome::Unsolvable,
        }
    }

    fn advance(&mut self, next: TipOverState) -> MoveOutcome {
        let previous = self.current.tipper();
        let tipped = next.height(previous) == 0;
        self.current = next;
        MoveOutcome::Moved {
            tipped,
            solved: self.is_solved(),
        }
    }
}
