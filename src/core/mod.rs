//! Core value types: players, cells, boards and history.
//!
//! Everything in this module is an immutable value:
//! - Boards never change after construction
//! - Recording a move produces a new history
//! - Snapshots can be cloned, compared and serialized freely

mod board;
mod cell;
mod history;

pub use board::{Board, Location};
pub use cell::{Cell, Player};
pub use history::{GameHistory, HistoryEntry};
