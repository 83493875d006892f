use thiserror::Error;

use crate::search::Stats;

/// Reasons a grid is rejected before any search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must have 3 rows, found {rows}")]
    RowCount { rows: usize },

    #[error("row {row} has {len} cells, expected 3")]
    RowLength { row: usize, len: usize },

    #[error("tile {value} is out of range 0..=8")]
    OutOfRange { value: u8 },

    #[error("tile {value} appears more than once")]
    Duplicate { value: u8 },

    #[error("cannot read {0:?} as a tile")]
    BadCell(String),

    #[error("blank expected at ({row}, {col}) but the grid has it at ({found_row}, {found_col})")]
    BlankMismatch {
        row: usize,
        col: usize,
        found_row: usize,
        found_col: usize,
    },
}

/// The frontier ran dry without reaching the goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("there is no solution")]
pub struct NoSolution {
    pub stats: Stats,
}
