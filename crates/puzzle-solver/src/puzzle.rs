//! Grid geometry shared by board puzzles: compass directions and cell positions.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PuzzleError;

/// Compass direction on a row-major board (row 0 is the top edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order moves are generated.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// (row, col) change for one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            _ => Err(PuzzleError::UnknownDirection(s.to_string())),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `distance` steps away in `direction`, if it lies on a
    /// `rows` x `cols` board.
    pub fn offset(
        self,
        direction: Direction,
        distance: usize,
        rows: usize,
        cols: usize,
    ) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let distance = isize::try_from(distance).ok()?;
        let row = (self.row as isize).checked_add(dr * distance)?;
        let col = (self.col as isize).checked_add(dc * distance)?;
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= rows || col >= cols {
            return None;
        }
        Some(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("EAST".parse::<Direction>().unwrap(), Direction::East);
        assert_eq!("w".parse::<Direction>().unwrap(), Direction::West);
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(PuzzleError::UnknownDirection(s)) if s == "up"
        ));
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(Direction::North, 1, 3, 3), None);
        assert_eq!(corner.offset(Direction::West, 1, 3, 3), None);
        assert_eq!(corner.offset(Direction::South, 2, 3, 3), Some(Position::new(2, 0)));
        assert_eq!(corner.offset(Direction::East, 3, 3, 3), None);

        let middle = Position::new(1, 1);
        assert_eq!(middle.offset(Direction::North, 1, 3, 3), Some(Position::new(0, 1)));
        assert_eq!(middle.offset(Direction::East, 1, 3, 3), Some(Position::new(1, 2)));
    }
}
