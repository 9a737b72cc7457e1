//! Move legality.

use super::outcome::evaluate;
use crate::core::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a move cannot be played.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalMove {
    #[error("Cell {index} is off a board of {cells} cells")]
    OutOfBounds { index: usize, cells: usize },

    #[error("The game is already decided")]
    GameDecided,

    #[error("Cell {index} is already occupied by {player}")]
    CellOccupied { index: usize, player: Player },
}

/// Check whether a mark may be placed at `index`.
///
/// A move is legal when the index is on the board, the game is neither won
/// nor drawn, and the cell is empty.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Board, Player};
/// use tictactoe_timeline::rules::{check_move, IllegalMove};
///
/// let board = Board::default().with_mark(4, Player::X).unwrap();
///
/// assert!(check_move(&board, 0).is_ok());
/// assert_eq!(
///     check_move(&board, 4),
///     Err(IllegalMove::CellOccupied { index: 4, player: Player::X })
/// );
/// ```
pub fn check_move(board: &Board, index: usize) -> Result<(), IllegalMove> {
    let cell = board.get(index).ok_or(IllegalMove::OutOfBounds {
        index,
        cells: board.len(),
    })?;

    if evaluate(board).is_decided() {
        return Err(IllegalMove::GameDecided);
    }

    match cell {
        Cell::Empty => Ok(()),
        Cell::Occupied(player) => Err(IllegalMove::CellOccupied { index, player }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;

    #[test]
    fn empty_cell_is_legal() {
        assert_eq!(check_move(&Board::default(), 8), Ok(()));
    }

    #[test]
    fn off_board_index_is_rejected() {
        assert_eq!(
            check_move(&Board::default(), 9),
            Err(IllegalMove::OutOfBounds { index: 9, cells: 9 })
        );
    }

    #[test]
    fn any_move_after_a_win_is_rejected() {
        let board = board![
            X, X, X,
            O, O, _,
            _, _, _,
        ]
        .unwrap();
        assert_eq!(check_move(&board, 5), Err(IllegalMove::GameDecided));
    }

    #[test]
    fn drawn_board_reports_decided() {
        let board = board![
            X, O, X,
            X, O, O,
            O, X, X,
        ]
        .unwrap();
        assert_eq!(check_move(&board, 0), Err(IllegalMove::GameDecided));
    }

    #[test]
    fn error_messages_name_the_cell() {
        let err = IllegalMove::CellOccupied {
            index: 3,
            player: Player::O,
        };
        assert_eq!(err.to_string(), "Cell 3 is already occupied by O");
    }
}
