//! # Board Implementation
//!
//! This module implements the Connect Four playing field: a fixed 7x6 grid
//! of cells that pieces are dropped into column by column.
//!
//! ## Rules
//! - Pieces fall to the lowest available spot in the column due to gravity
//! - A drop into a full column is rejected and leaves the grid untouched
//! - A placement wins when it completes a line of four pieces
//!   (horizontally, vertically, or diagonally)
//! - The grid is full when all 42 cells are occupied
//!
//! The board is owned by a [`GameSession`](crate::session::GameSession) and
//! is only ever mutated through [`Board::place_piece`].

use std::fmt;
use thiserror::Error;

/// Number of columns on the board.
pub const COLS: usize = 7;
/// Number of rows in each column. Row 0 is the top, row 5 the bottom.
pub const ROWS: usize = 6;

/// The piece identity a player drops into the board.
///
/// Exactly two marks exist per game; the presentation layer attaches
/// names and chip glyphs to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Red,
    Yellow,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn other(self) -> Mark {
        match self {
            Mark::Red => Mark::Yellow,
            Mark::Yellow => Mark::Red,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Red => write!(f, "red"),
            Mark::Yellow => write!(f, "yellow"),
        }
    }
}

/// Rejection raised by [`Board::place_piece`].
///
/// A full column is an expected, recoverable condition; the session
/// translates it into an invalid-move outcome rather than a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// All six cells of the column are occupied.
    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// The 7x6 grid of cells
///
/// Cells are stored column-major: `cells[column][row]` with row 0 at the
/// top and row 5 at the bottom. Within a column the occupied cells are
/// always contiguous from the bottom up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; ROWS]; COLS],
}

impl Board {
    /// Creates a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; ROWS]; COLS],
        }
    }

    /// Drops a piece into a column
    ///
    /// The piece occupies the lowest empty cell of the column.
    ///
    /// # Arguments
    /// * `column` - Target column, 0-based
    /// * `mark` - The mark to place
    ///
    /// # Returns
    /// The row index where the piece landed, or [`PlaceError::ColumnFull`]
    /// if the column has no empty cell. A rejected drop leaves the grid
    /// unchanged.
    ///
    /// # Panics
    /// Panics if `column >= COLS`; callers validate the range first.
    pub fn place_piece(&mut self, column: usize, mark: Mark) -> Result<usize, PlaceError> {
        let row = self.cells[column]
            .iter()
            .rposition(|cell| cell.is_none())
            .ok_or(PlaceError::ColumnFull(column))?;
        self.cells[column][row] = Some(mark);
        Ok(row)
    }

    /// Checks whether the piece most recently placed by `mark` in `column`
    /// completed a line of four
    ///
    /// The check is anchored at the lowest cell of the column holding
    /// `mark`; if the column holds no such piece the answer is false.
    /// Any one of four directions suffices:
    /// - horizontal: longest run of `mark` across the anchor's row
    /// - vertical: four of `mark` anywhere in the column, contiguous or not
    /// - both diagonals: walk outward from the anchor, up to three steps
    ///   each way, stopping at a board edge or a non-matching cell
    ///
    /// # Panics
    /// Panics if `column >= COLS`; callers validate the range first.
    pub fn is_winning_move(&self, column: usize, mark: Mark) -> bool {
        let Some(row) = self.cells[column].iter().rposition(|&cell| cell == Some(mark)) else {
            return false;
        };

        self.check_horizontal(row, mark)
            || self.check_vertical(column, mark)
            || self.check_diagonal(row as i32, column as i32, mark)
    }

    /// True when every cell of every column is occupied
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|column| column.iter().all(|cell| cell.is_some()))
    }

    /// Read-only view of the grid for rendering
    ///
    /// Column-major: `grid()[column][row]`, row 0 at the top.
    pub fn grid(&self) -> &[[Option<Mark>; ROWS]; COLS] {
        &self.cells
    }

    /// Scans the entire row for a run of four, reset on mismatch
    fn check_horizontal(&self, row: usize, mark: Mark) -> bool {
        let mut run = 0;
        for column in &self.cells {
            if column[row] == Some(mark) {
                run += 1;
                if run >= 4 {
                    return true;
                }
            } else {
                run = 0;
            }
        }
        false
    }

    /// Counts occurrences of the mark anywhere in the column
    fn check_vertical(&self, column: usize, mark: Mark) -> bool {
        self.cells[column]
            .iter()
            .filter(|&&cell| cell == Some(mark))
            .count()
            >= 4
    }

    /// Walks both diagonal axes outward from the anchor cell
    fn check_diagonal(&self, row: i32, column: i32, mark: Mark) -> bool {
        // (row step, column step) for the two diagonal orientations
        [(1, 1), (1, -1)].iter().any(|&(row_step, col_step)| {
            let mut count = 1; // Start at 1 to include the anchor
            for side in [1, -1] {
                for i in 1..=3 {
                    let r = row + i * row_step * side;
                    let c = column + i * col_step * side;
                    if !Self::in_bounds(r, c) || self.cells[c as usize][r as usize] != Some(mark) {
                        break;
                    }
                    count += 1;
                }
            }
            count >= 4
        })
    }

    fn in_bounds(row: i32, column: i32) -> bool {
        (0..ROWS as i32).contains(&row) && (0..COLS as i32).contains(&column)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for column in 0..COLS {
                let symbol = match self.cells[column][row] {
                    Some(Mark::Red) => "R",
                    Some(Mark::Yellow) => "Y",
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
