//! Win and draw detection.

use super::lines::{lines, Line};
use crate::core::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Win/draw determination for a single board.
///
/// Every board evaluates to the same shape: at most one of `winner` and
/// `is_draw` is set, and `winning_line` is present exactly when `winner` is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    winner: Option<Player>,
    winning_line: Option<Line>,
    is_draw: bool,
}

impl Outcome {
    /// No winner yet and moves remain.
    pub fn in_progress() -> Self {
        Self::default()
    }

    pub fn won(player: Player, line: Line) -> Self {
        Self {
            winner: Some(player),
            winning_line: Some(line),
            is_draw: false,
        }
    }

    pub fn draw() -> Self {
        Self {
            winner: None,
            winning_line: None,
            is_draw: true,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }

    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// True once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// True if `index` belongs to the winning line.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line
            .as_ref()
            .is_some_and(|line| line.contains(index))
    }
}

/// Evaluate a board.
///
/// Lines are checked in the order produced by [`lines`]: rows, then
/// columns, then diagonals. When several lines are complete at once, the
/// first one in that order is reported.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Board, Player};
/// use tictactoe_timeline::rules::evaluate;
///
/// let board = [0, 4, 8]
///     .into_iter()
///     .try_fold(Board::default(), |board, i| board.with_mark(i, Player::O))
///     .unwrap();
///
/// let outcome = evaluate(&board);
/// assert_eq!(outcome.winner(), Some(Player::O));
/// assert_eq!(outcome.winning_line().unwrap().indices(), &[0, 4, 8]);
/// assert!(!outcome.is_draw());
/// ```
#[instrument(level = "trace", skip(board), fields(dimension = board.dimension()))]
pub fn evaluate(board: &Board) -> Outcome {
    for line in lines(board.dimension()) {
        if let Some(player) = line_owner(board, &line) {
            return Outcome::won(player, line);
        }
    }

    if board.is_full() {
        Outcome::draw()
    } else {
        Outcome::in_progress()
    }
}

/// The player holding every cell of `line`, if any.
fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let mut cells = line.indices().iter().map(|&index| board.get(index));
    let player = match cells.next()?? {
        Cell::Occupied(player) => player,
        Cell::Empty => return None,
    };
    cells
        .all(|cell| cell == Some(Cell::Occupied(player)))
        .then_some(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;

    #[test]
    fn empty_board_is_in_progress() {
        let outcome = evaluate(&Board::default());
        assert_eq!(outcome, Outcome::in_progress());
        assert!(!outcome.is_decided());
    }

    #[test]
    fn detects_row_win() {
        let board = board![
            _, _, _,
            O, O, O,
            X, X, _,
        ]
        .unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::O));
        assert_eq!(outcome.winning_line().unwrap().indices(), &[3, 4, 5]);
    }

    #[test]
    fn detects_column_win() {
        let board = board![
            O, X, _,
            _, X, O,
            _, X, _,
        ]
        .unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(outcome.winning_line().unwrap().indices(), &[1, 4, 7]);
    }

    #[test]
    fn detects_anti_diagonal_win() {
        let board = board![
            X, X, O,
            _, O, _,
            O, X, _,
        ]
        .unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::O));
        assert_eq!(outcome.winning_line().unwrap().indices(), &[2, 4, 6]);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = board![
            X, O, X,
            X, O, O,
            O, X, X,
        ]
        .unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome, Outcome::draw());
        assert!(outcome.winner().is_none());
        assert!(outcome.winning_line().is_none());
        assert!(outcome.is_decided());
    }

    #[test]
    fn full_board_with_line_is_a_win_not_a_draw() {
        let board = board![
            X, X, X,
            O, O, X,
            X, O, O,
        ]
        .unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::X));
        assert!(!outcome.is_draw());
    }

    #[test]
    fn first_line_in_enumeration_order_wins_ties() {
        // Top row and left column both complete.
        let board = board![
            X, X, X,
            X, O, O,
            X, O, O,
        ]
        .unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome.winning_line().unwrap().indices(), &[0, 1, 2]);
    }

    #[test]
    fn larger_board_needs_full_line() {
        let almost = board![
            X, X, X, _,
            O, O, O, _,
            _, _, _, _,
            _, _, _, _,
        ]
        .unwrap();
        assert_eq!(evaluate(&almost), Outcome::in_progress());

        let done = almost.with_mark(3, Player::X).unwrap();
        assert_eq!(evaluate(&done).winner(), Some(Player::X));
    }

    #[test]
    fn single_cell_board() {
        let board = Board::empty(1).unwrap();
        assert_eq!(evaluate(&board), Outcome::in_progress());

        let marked = board.with_mark(0, Player::X).unwrap();
        let outcome = evaluate(&marked);
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(outcome.winning_line().unwrap().indices(), &[0]);
    }

    #[test]
    fn winning_cells_are_flagged() {
        let outcome = Outcome::won(Player::X, Line::from(vec![2, 4, 6]));
        assert!(outcome.is_winning_cell(4));
        assert!(!outcome.is_winning_cell(0));
        assert!(!Outcome::draw().is_winning_cell(4));
    }
}
