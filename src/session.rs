//! # Game Session - Turn Sequencing and Outcome Resolution
//!
//! A [`GameSession`] is the single source of truth for one game: it owns
//! the [`Board`], the ordered pair of marks, and the whose-turn pointer.
//! All cell mutation and win detection is delegated to the board; the
//! session decides what a turn attempt means and when the active mark
//! advances.
//!
//! Expected gameplay rejections (out-of-range column, full column) are
//! returned as [`Outcome::Invalid`] rather than errors, so the caller's
//! prompt loop simply retries.

use crate::board::{Board, Mark, PlaceError, COLS};
use tracing::debug;

/// The four-valued result of a turn attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The move was rejected; the same player goes again
    Invalid,
    /// The move completed a line of four; the active mark is the winner
    Won,
    /// The move filled the last cell without a line of four
    Draw,
    /// The move stood and the turn passed to the other mark
    Continue,
}

/// One game of Connect Four between two marks
///
/// Created at session start with an empty board and discarded by the
/// caller once a terminal outcome ([`Outcome::Won`] or [`Outcome::Draw`])
/// is reached. The session keeps no terminal flag; callers stop invoking
/// [`GameSession::play_turn`] after a terminal outcome.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    marks: [Mark; 2],
    active: Mark,
}

impl GameSession {
    /// Creates a session for the given mark pair; the first mark opens
    ///
    /// The marks must be distinct. The player collaborator
    /// ([`crate::player::PlayerPair`]) enforces distinctness at setup, so
    /// the session takes it on trust.
    pub fn new(first: Mark, second: Mark) -> Self {
        GameSession {
            board: Board::new(),
            marks: [first, second],
            active: first,
        }
    }

    /// The mark whose turn it is
    ///
    /// After [`Outcome::Won`] this still names the winner, since the
    /// active mark does not advance on a terminal outcome.
    pub fn current_mark(&self) -> Mark {
        self.active
    }

    /// Read-only view of the board for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays one turn for the active mark
    ///
    /// # Arguments
    /// * `column` - Target column, 0-based
    ///
    /// # Returns
    /// - [`Outcome::Invalid`] for an out-of-range or full column; no state
    ///   changes and the same mark stays active
    /// - [`Outcome::Won`] when the placement completes a line of four; the
    ///   active mark does not advance
    /// - [`Outcome::Draw`] when the placement fills the board; the active
    ///   mark does not advance
    /// - [`Outcome::Continue`] otherwise; the other mark becomes active
    pub fn play_turn(&mut self, column: usize) -> Outcome {
        if column >= COLS {
            debug!(column, "rejected out-of-range column");
            return Outcome::Invalid;
        }

        let row = match self.board.place_piece(column, self.active) {
            Ok(row) => row,
            Err(PlaceError::ColumnFull(_)) => {
                debug!(column, "rejected drop into full column");
                return Outcome::Invalid;
            }
        };
        debug!(column, row, mark = %self.active, "piece placed");

        if self.board.is_winning_move(column, self.active) {
            debug!(mark = %self.active, "winning move");
            return Outcome::Won;
        }
        if self.board.is_full() {
            debug!("board full, game drawn");
            return Outcome::Draw;
        }

        self.switch_marks();
        Outcome::Continue
    }

    fn switch_marks(&mut self) {
        self.active = if self.active == self.marks[0] {
            self.marks[1]
        } else {
            self.marks[0]
        };
    }
}
