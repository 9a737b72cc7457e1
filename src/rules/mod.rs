//! Stateless game rules.
//!
//! Pure functions over a single [`Board`](crate::core::Board) snapshot:
//! - Line enumeration for any board dimension
//! - Win and draw evaluation
//! - Move legality
//!
//! Nothing here holds state, so every function can be tested in isolation
//! from the game history.

mod legality;
mod lines;
mod outcome;

pub use legality::{check_move, IllegalMove};
pub use lines::{lines, Line};
pub use outcome::{evaluate, Outcome};
