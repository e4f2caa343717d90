//! # Connect Four
//!
//! A two-player Connect Four rules engine with a thin terminal front-end
//! (the `play` binary).
//!
//! ## Components
//! - [`board`]: the 7x6 grid, gravity placement, and win/full detection
//! - [`session`]: turn sequencing and outcome resolution on top of the board
//! - [`player`]: name/mark identities consumed by the presentation layer
//!
//! ## Control Flow
//! The front-end calls [`GameSession::play_turn`] once per turn; the session
//! validates the column, delegates placement and win checks to the board,
//! and reports one of four outcomes: invalid, won, draw, or continue. The
//! active mark alternates only on continue, so after a win the session
//! still names the winner via [`GameSession::current_mark`].

pub mod board;
pub mod player;
pub mod session;

pub use board::{Board, Mark, PlaceError, COLS, ROWS};
pub use player::{ConfigError, Player, PlayerPair};
pub use session::{GameSession, Outcome};
