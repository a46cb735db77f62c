//! Game-state engine: board snapshots, rules, and the session history.

mod position;
mod rules;
mod session;
mod types;

pub use position::{Coordinate, Position};
pub use rules::{check_winner, evaluate, Verdict, Win, LINES};
pub use session::{GameSession, HistoryEntry, MoveError, MoveListItem};
pub use types::{Board, Player, Square};
