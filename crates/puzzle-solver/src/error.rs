//! Errors raised while building puzzles from user input.
//!
//! The solver itself cannot fail; "no solution" is an ordinary result. These
//! errors cover bad puzzle parameters and unreadable or malformed puzzle files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("console I/O failed: {0}")]
    Console(#[source] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("clock needs at least one hour, with start and end in 1..={hours} (got start {start}, end {end})")]
    InvalidClock { hours: u32, start: u32, end: u32 },

    #[error("water puzzle needs at least one bucket")]
    NoBuckets,

    #[error("{what} position ({row}, {col}) is outside the {rows}x{cols} board")]
    OffBoard {
        what: &'static str,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown direction '{0}' (expected north, south, east or west)")]
    UnknownDirection(String),

    #[error("tipper starts on an empty cell at ({row}, {col})")]
    TipperOnEmptyCell { row: usize, col: usize },
}

impl PuzzleError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        PuzzleError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
