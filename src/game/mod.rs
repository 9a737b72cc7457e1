//! The stateful side of the game.
//!
//! [`GameState`] owns the board history and the step being viewed. It
//! consults [`crate::rules`] to reject illegal moves and to evaluate the
//! current board, and is the only component that changes over a session.

mod builder;
mod moves;
mod state;
mod status;

pub use builder::{create_game, GameBuilder};
pub use moves::{DisplayMove, DisplayMoves};
pub use state::GameState;
pub use status::GameStatus;
