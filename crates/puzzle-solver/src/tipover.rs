//! The TipOver puzzle.
//!
//! A board of crate towers, each cell holding a height (0 for empty). The
//! tipper stands on a tower and may step onto an adjacent occupied cell, or
//! tip the tower it stands on over in one direction if every cell the tower
//! would fall across is empty. A tipped tower of height `h` becomes `h`
//! crates of height 1 and the tipper ends up on the far one. The puzzle is
//! solved when the tipper reaches the goal crate.
//!
//! Puzzle files are plain text:
//!
//! ```text
//! rows cols start_row start_col goal_row goal_col
//! h h h ...   (one line per row, `cols` heights each)
//! ```

use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::puzzle::{Direction, Position};
use crate::state::{Neighbors, SearchState};

/// Tallest tower a board file may hold; heights render as one digit.
pub const MAX_HEIGHT: u8 = 9;

/// Parameters of one TipOver board: its size, the tipper's start, the goal
/// crate, and the starting heights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipOverPuzzle {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub goal: Position,
    /// Row-major tower heights
    pub start_board: Vec<u8>,
}

impl TipOverPuzzle {
    /// Read and parse a puzzle file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let puzzle: TipOverPuzzle = text.parse()?;
        debug!(path = %path.display(), rows = puzzle.rows, cols = puzzle.cols, "loaded tipover puzzle");
        Ok(puzzle)
    }

    pub fn start_state(self: &Arc<Self>) -> TipOverState {
        TipOverState {
            puzzle: Arc::clone(self),
            board: self.start_board.clone(),
            tipper: self.start,
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    fn check_on_board(&self, what: &'static str, pos: Position) -> Result<()> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return Err(PuzzleError::OffBoard {
                what,
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl FromStr for TipOverPuzzle {
    type Err = PuzzleError;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (line_no, header) = lines
            .next()
            .ok_or_else(|| PuzzleError::parse(1, "missing header line"))?;
        let header = parse_numbers::<usize>(line_no, header)?;
        let &[rows, cols, start_row, start_col, goal_row, goal_col] = header.as_slice() else {
            return Err(PuzzleError::parse(
                line_no,
                format!("header needs 6 numbers, found {}", header.len()),
            ));
        };
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::parse(line_no, "board needs at least one row and column"));
        }
        if rows.checked_mul(cols).is_none() {
            return Err(PuzzleError::parse(
                line_no,
                format!("board of {}x{} is too large", rows, cols),
            ));
        }

        let mut start_board = Vec::new();
        for row in 0..rows {
            let (line_no, line) = lines
                .next()
                .ok_or_else(|| PuzzleError::parse(row + 2, format!("missing board row {}", row)))?;
            let heights = parse_numbers::<u8>(line_no, line)?;
            if let Some(height) = heights.iter().find(|&&h| h > MAX_HEIGHT) {
                return Err(PuzzleError::parse(
                    line_no,
                    format!("tower height {} is above {}", height, MAX_HEIGHT),
                ));
            }
            if heights.len() != cols {
                return Err(PuzzleError::parse(
                    line_no,
                    format!("expected {} heights, found {}", cols, heights.len()),
                ));
            }
            start_board.extend(heights);
        }

        let puzzle = TipOverPuzzle {
            rows,
            cols,
            start: Position::new(start_row, start_col),
            goal: Position::new(goal_row, goal_col),
            start_board,
        };
        puzzle.check_on_board("start", puzzle.start)?;
        puzzle.check_on_board("goal", puzzle.goal)?;
        if puzzle.start_board[puzzle.index(puzzle.start)] == 0 {
            return Err(PuzzleError::TipperOnEmptyCell {
                row: start_row,
                col: start_col,
            });
        }
        Ok(puzzle)
    }
}

fn parse_numbers<T: FromStr>(line_no: usize, line: &str) -> Result<Vec<T>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| PuzzleError::parse(line_no, format!("'{}' is not a valid number", token)))
        })
        .collect()
}

/// Tower heights plus the tipper's cell.
#[derive(Debug, Clone, Serialize)]
pub struct TipOverState {
    #[serde(skip)]
    puzzle: Arc<TipOverPuzzle>,
    /// Row-major tower heights
    board: Vec<u8>,
    tipper: Position,
}

impl TipOverState {
    pub fn tipper(&self) -> Position {
        self.tipper
    }

    /// Height of the tower at `pos` (0 when empty).
    pub fn height(&self, pos: Position) -> u8 {
        self.board[self.puzzle.index(pos)]
    }

    /// The state after moving toward `direction`, if that move is legal.
    ///
    /// Stepping onto an occupied neighbor takes priority; only when the
    /// neighbor is missing or empty is the tower under the tipper tipped.
    pub fn move_toward(&self, direction: Direction) -> Option<TipOverState> {
        let (rows, cols) = (self.puzzle.rows, self.puzzle.cols);

        if let Some(next) = self.tipper.offset(direction, 1, rows, cols) {
            if self.height(next) > 0 {
                return Some(TipOverState {
                    puzzle: Arc::clone(&self.puzzle),
                    board: self.board.clone(),
                    tipper: next,
                });
            }
        }

        let height = usize::from(self.height(self.tipper));
        if height <= 1 {
            return None;
        }

        let mut board = self.board.clone();
        let mut far = self.tipper;
        for distance in 1..=height {
            far = self.tipper.offset(direction, distance, rows, cols)?;
            if self.height(far) != 0 {
                return None;
            }
            board[self.puzzle.index(far)] = 1;
        }
        board[self.puzzle.index(self.tipper)] = 0;

        Some(TipOverState {
            puzzle: Arc::clone(&self.puzzle),
            board,
            tipper: far,
        })
    }
}

impl PartialEq for TipOverState {
    fn eq(&self, other: &Self) -> bool {
        self.tipper == other.tipper && self.board == other.board
    }
}

impl Eq for TipOverState {}

impl Hash for TipOverState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tipper.hash(state);
        self.board.hash(state);
    }
}

impl SearchState for TipOverState {
    fn is_goal(&self) -> bool {
        self.tipper == self.puzzle.goal
    }

    /// At most one move per direction: north, south, east, west.
    fn neighbors(&self) -> Neighbors<Self> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.move_toward(direction))
            .collect()
    }
}

/// Column numbers across the top, row numbers down the side, `*` before the
/// tipper's cell, `!` before the goal and `_` for empty cells.
impl fmt::Display for TipOverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = (self.puzzle.rows, self.puzzle.cols);

        write!(f, "    ")?;
        for col in 0..cols {
            write!(f, "  {}", col)?;
        }
        write!(f, "\n    {}", "___".repeat(cols))?;

        for row in 0..rows {
            write!(f, "\n {} |", row)?;
            for col in 0..cols {
                let pos = Position::new(row, col);
                let marker = if pos == self.tipper {
                    " *"
                } else if pos == self.puzzle.goal {
                    " !"
                } else {
                    "  "
                };
                match self.height(pos) {
                    0 => write!(f, "{}_", marker)?,
                    height => write!(f, "{}{}", marker, height)?,
                }
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    fn state(text: &str) -> TipOverState {
        Arc::new(text.parse::<TipOverPuzzle>().unwrap()).start_state()
    }

    fn tippers(path: &[TipOverState]) -> Vec<(usize, usize)> {
        path.iter().map(|s| (s.tipper.row, s.tipper.col)).collect()
    }

    #[test]
    fn test_parse_board() {
        let puzzle: TipOverPuzzle = "2 3 0 0 1 2\n1 0 2\n0 3 1\n".parse().unwrap();
        assert_eq!(puzzle.rows, 2);
        assert_eq!(puzzle.cols, 3);
        assert_eq!(puzzle.start, Position::new(0, 0));
        assert_eq!(puzzle.goal, Position::new(1, 2));
        assert_eq!(puzzle.start_board, vec![1, 0, 2, 0, 3, 1]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<TipOverPuzzle>(),
            Err(PuzzleError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            "1 1 0 0\n1".parse::<TipOverPuzzle>(),
            Err(PuzzleError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            "2 2 0 0 1 1\n1 1".parse::<TipOverPuzzle>(),
            Err(PuzzleError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            "1 2 0 0 0 1\n1 x".parse::<TipOverPuzzle>(),
            Err(PuzzleError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            "1 2 0 0 0 1\n1 1 1".parse::<TipOverPuzzle>(),
            Err(PuzzleError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            "1 2 0 0 0 1\n1 10".parse::<TipOverPuzzle>(),
            Err(PuzzleError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            "99999999999 99999999999 0 0 0 0\n1\n".parse::<TipOverPuzzle>(),
            Err(PuzzleError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            "4294967296 4 0 0 0 0\n1 1 1 1\n".parse::<TipOverPuzzle>(),
            Err(PuzzleError::Parse { .. })
        ));
        assert!(matches!(
            "1 2 0 0 3 0\n1 1".parse::<TipOverPuzzle>(),
            Err(PuzzleError::OffBoard { what: "goal", .. })
        ));
        assert!(matches!(
            "1 2 0 1 0 0\n1 0".parse::<TipOverPuzzle>(),
            Err(PuzzleError::TipperOnEmptyCell { row: 0, col: 1 })
        ));
    }

    #[test]
    fn test_single_cell_on_goal() {
        let start = state("1 1 0 0 0 0\n1");
        let path = solve(start.clone()).path.unwrap();
        assert_eq!(path, vec![start]);
    }

    #[test]
    fn test_tip_lands_on_far_crate() {
        let start = state("1 4 0 0 0 3\n2 0 0 1");
        let neighbors = start.neighbors();

        assert_eq!(neighbors.len(), 1);
        let tipped = &neighbors[0];
        assert_eq!(tipped.tipper(), Position::new(0, 2));
        assert_eq!(tipped.board, vec![0, 1, 1, 1]);

        let path = solve(start).path.unwrap();
        assert_eq!(tippers(&path), vec![(0, 0), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_step_takes_priority_over_tip() {
        let start = state("1 3 0 0 0 2\n3 1 0");
        let neighbors = start.neighbors();

        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].tipper(), Position::new(0, 1));
        assert_eq!(neighbors[0].board, start.board);
    }

    #[test]
    fn test_tip_blocked_by_crate_or_edge() {
        // East is blocked by the goal crate, every other way runs off the board
        let start = state("1 3 0 0 0 2\n2 0 1");
        assert!(start.neighbors().is_empty());
        assert!(solve(start).path.is_none());
    }

    #[test]
    fn test_height_one_cannot_tip() {
        let start = state("1 2 0 0 0 1\n1 0");
        assert!(start.move_toward(Direction::East).is_none());
    }

    #[test]
    fn test_three_move_solution() {
        let start = state("3 3 0 0 2 2\n1 2 0\n0 0 0\n0 0 1");
        let result = solve(start);

        let path = result.path.unwrap();
        assert_eq!(tippers(&path), vec![(0, 0), (0, 1), (2, 1), (2, 2)]);
        assert!(path.last().unwrap().is_goal());
        for pair in path.windows(2) {
            assert!(pair[0].neighbors().contains(&pair[1]));
        }
    }

    #[test]
    fn test_display() {
        let start = state("2 2 0 0 1 1\n2 0\n0 1");
        let expected = "      0  1\n    ______\n 0 | *2  _\n 1 |  _ !1\n";
        assert_eq!(start.to_string(), expected);
    }
}
