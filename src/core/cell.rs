//! Players and the marks they leave on the board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players.
///
/// `X` always moves first, so `X` owns the even steps of a game's history
/// and `O` the odd ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player whose turn it is after `step` moves have been played.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tictactoe_timeline::core::Player;
    ///
    /// assert_eq!(Player::for_step(0), Player::X);
    /// assert_eq!(Player::for_step(1), Player::O);
    /// assert_eq!(Player::for_step(4), Player::X);
    /// ```
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// State of a single board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this cell, if any.
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(*player),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(player) => write!(f, "{player}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_parity_alternates() {
        for step in 0..10 {
            let expected = if step % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(Player::for_step(step), expected);
        }
    }

    #[test]
    fn cell_reports_owner() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::from(Player::O).player(), Some(Player::O));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn cells_display_as_marks() {
        assert_eq!(Cell::Empty.to_string(), ".");
        assert_eq!(Cell::Occupied(Player::X).to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
    }

    #[test]
    fn cell_serializes_correctly() {
        let cell = Cell::Occupied(Player::X);
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
