//! Tic-tac-toe with move history and time-travel.
//!
//! The core is a game-state engine: an immutable board snapshot per
//! move, win/draw evaluation over 8 fixed lines, and an append-only
//! history that supports replaying the game from any prior step. The
//! terminal UI is a thin collaborator that renders session views and
//! forwards key presses into the engine.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameSession, Position, Verdict};
//!
//! let mut session = GameSession::new();
//! session.apply_move(Position::Center)?;
//! session.apply_move(Position::TopLeft)?;
//! assert_eq!(session.step_number(), 2);
//!
//! // Travel back to the start; history is retained.
//! session.jump_to(0);
//! assert_eq!(session.history().len(), 3);
//! assert_eq!(session.verdict(), Verdict::InProgress);
//! # Ok::<(), tictactoe_rewind::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod tui;

pub use game::{
    check_winner, evaluate, Board, Coordinate, GameSession, HistoryEntry, MoveError,
    MoveListItem, Player, Position, Square, Verdict, Win, LINES,
};
pub use tui::run_tui;
