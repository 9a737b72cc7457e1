//! Tictactoe Timeline: a tic-tac-toe game core with navigable history
//!
//! The crate follows a "pure core, thin shell" split. Rule evaluation is a set
//! of stateless functions over board snapshots, and the game session is an
//! immutable value: every move or jump returns a new [`GameState`], so any
//! earlier snapshot can be revisited without being disturbed.
//!
//! # Core Concepts
//!
//! - **Board**: An immutable grid snapshot of [`Cell`](crate::core::Cell)s
//! - **History**: Every board the game has passed through, step 0 being empty
//! - **Rules**: Pure win/draw evaluation and move legality
//! - **Time travel**: Jump to any step; moving from an earlier step starts a new branch
//!
//! # Example
//!
//! ```rust
//! use tictactoe_timeline::core::Player;
//! use tictactoe_timeline::{GameState, GameStatus};
//!
//! let game = GameState::new()
//!     .apply_move(0)
//!     .apply_move(4)
//!     .apply_move(1);
//! assert_eq!(game.status(), GameStatus::NextPlayer(Player::O));
//!
//! // Go back to the start and play somewhere else.
//! let branch = game.jump_to(0).apply_move(8);
//! assert_eq!(branch.history().len(), 2);
//!
//! // Illegal moves leave the state unchanged.
//! assert_eq!(branch.apply_move(8), branch);
//! ```

pub mod core;
pub mod error;
pub mod game;
mod macros;
pub mod rules;

// Re-export commonly used types
pub use error::{BuildError, GameError};
pub use game::{create_game, DisplayMove, GameBuilder, GameState, GameStatus};
pub use rules::{evaluate, Outcome};
