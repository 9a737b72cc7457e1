//! Macros for concise board construction.

/// Build a [`Board`](crate::core::Board) from a row-major list of marks.
///
/// `X` and `O` place a mark, `_` leaves the cell empty. The dimension is
/// inferred from the number of cells, so the macro evaluates to
/// `Result<Board, BuildError>`.
///
/// # Example
///
/// ```
/// use tictactoe_timeline::board;
/// use tictactoe_timeline::core::{Cell, Player};
///
/// let board = board![
///     X, _, _,
///     _, O, _,
///     _, _, X,
/// ]
/// .unwrap();
///
/// assert_eq!(board.dimension(), 3);
/// assert_eq!(board.get(4), Some(Cell::Occupied(Player::O)));
/// assert_eq!(board.marks(), 3);
/// ```
#[macro_export]
macro_rules! board {
    (@cell X) => {
        $crate::core::Cell::Occupied($crate::core::Player::X)
    };
    (@cell O) => {
        $crate::core::Cell::Occupied($crate::core::Player::O)
    };
    (@cell _) => {
        $crate::core::Cell::Empty
    };
    ($($cell:tt),+ $(,)?) => {
        $crate::core::Board::from_cells(vec![$($crate::board!(@cell $cell)),+])
    };
}
