//! The game session value.

use super::moves::DisplayMoves;
use super::status::GameStatus;
use crate::core::{Board, GameHistory, HistoryEntry, Player};
use crate::error::{BuildError, GameError};
use crate::rules::{check_move, evaluate, IllegalMove, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A game session: board history, the step being viewed, and move-list order.
///
/// `GameState` is a value. Every transition borrows `self` and returns the
/// next state, so earlier states stay valid and comparable.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::Player;
/// use tictactoe_timeline::GameState;
///
/// let game = GameState::new()
///     .apply_move(0) // X
///     .apply_move(4) // O
///     .apply_move(1) // X
///     .apply_move(5) // O
///     .apply_move(2); // X completes the top row
///
/// let outcome = game.current_outcome();
/// assert_eq!(outcome.winner(), Some(Player::X));
/// assert_eq!(outcome.winning_line().unwrap().indices(), &[0, 1, 2]);
///
/// // Further moves are ignored.
/// assert_eq!(game.apply_move(8), game);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    history: GameHistory,
    current_step: usize,
    reversed_order: bool,
}

#[derive(Deserialize)]
struct GameStateRepr {
    history: GameHistory,
    current_step: usize,
    reversed_order: bool,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = GameError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let latest = repr.history.latest_step();
        if repr.current_step > latest {
            return Err(GameError::StepOutOfRange {
                step: repr.current_step,
                latest,
            });
        }
        Ok(Self {
            history: repr.history,
            current_step: repr.current_step,
            reversed_order: repr.reversed_order,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Start a 3×3 game with X to move.
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    /// Start a game on an empty board of side `dimension`.
    ///
    /// # Errors
    ///
    /// Fails for a zero dimension or one whose cell count overflows.
    pub fn with_dimension(dimension: usize) -> Result<Self, BuildError> {
        Board::empty(dimension).map(Self::from_board)
    }

    pub(crate) fn from_board(board: Board) -> Self {
        Self {
            history: GameHistory::new(board),
            current_step: 0,
            reversed_order: false,
        }
    }

    pub(crate) fn with_reversed_order(mut self, reversed_order: bool) -> Self {
        self.reversed_order = reversed_order;
        self
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The step being viewed; `0` is the empty starting board.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history.entries()[self.current_step]
    }

    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    pub fn dimension(&self) -> usize {
        self.current_board().dimension()
    }

    /// X on even steps, O on odd ones.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Whether the move list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed_order
    }

    /// Play the next player's mark at `index`.
    ///
    /// Illegal moves (off the board, occupied cell, game already decided)
    /// are ignored and return an identical state. Use
    /// [`try_apply_move`](Self::try_apply_move) to learn why a move was
    /// rejected.
    pub fn apply_move(&self, index: usize) -> GameState {
        match self.try_apply_move(index) {
            Ok(next) => next,
            Err(err) => {
                debug!(index, error = %err, "ignoring illegal move");
                self.clone()
            }
        }
    }

    /// Play the next player's mark at `index`, reporting illegal moves.
    ///
    /// On success, history entries after the current step are discarded and
    /// the new board becomes the latest step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tictactoe_timeline::rules::IllegalMove;
    /// use tictactoe_timeline::{GameError, GameState};
    ///
    /// let game = GameState::new().try_apply_move(4).unwrap();
    /// assert_eq!(game.current_step(), 1);
    ///
    /// let err = game.try_apply_move(4).unwrap_err();
    /// assert!(matches!(
    ///     err,
    ///     GameError::IllegalMove(IllegalMove::CellOccupied { index: 4, .. })
    /// ));
    /// ```
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn try_apply_move(&self, index: usize) -> Result<GameState, GameError> {
        let board = self.current_board();
        check_move(board, index)?;

        let next_board = board
            .with_mark(index, self.next_player())
            .ok_or(IllegalMove::OutOfBounds {
                index,
                cells: board.len(),
            })?;
        let location = next_board.location(index);
        let history = self
            .history
            .record(self.current_step, HistoryEntry::new(next_board, location));
        let current_step = history.latest_step();

        debug!(current_step, "move applied");
        Ok(Self {
            history,
            current_step,
            reversed_order: self.reversed_order,
        })
    }

    /// View the board at `step` without discarding any history.
    ///
    /// Steps past the latest one are clamped to the latest step. Use
    /// [`try_jump_to`](Self::try_jump_to) to reject them instead.
    pub fn jump_to(&self, step: usize) -> GameState {
        match self.try_jump_to(step) {
            Ok(next) => next,
            Err(err) => {
                warn!(step, error = %err, "clamping jump to latest step");
                self.with_step(self.history.latest_step())
            }
        }
    }

    /// View the board at `step`, failing if it is not in the history.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn try_jump_to(&self, step: usize) -> Result<GameState, GameError> {
        let latest = self.history.latest_step();
        if step > latest {
            return Err(GameError::StepOutOfRange { step, latest });
        }
        Ok(self.with_step(step))
    }

    fn with_step(&self, step: usize) -> GameState {
        Self {
            history: self.history.clone(),
            current_step: step,
            reversed_order: self.reversed_order,
        }
    }

    /// Flip the move-list display order. History is untouched.
    pub fn toggle_move_order(&self) -> GameState {
        Self {
            history: self.history.clone(),
            current_step: self.current_step,
            reversed_order: !self.reversed_order,
        }
    }

    /// The move list, oldest first or newest first depending on
    /// [`is_reversed`](Self::is_reversed).
    ///
    /// The iterator borrows the state and can be requested again at any
    /// time with the same result.
    pub fn display_moves(&self) -> DisplayMoves<'_> {
        DisplayMoves::new(
            self.history.entries(),
            self.current_step,
            self.reversed_order,
        )
    }

    /// Win/draw evaluation of the board at the current step.
    pub fn current_outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Winner, draw, or whose turn it is, at the current step.
    pub fn status(&self) -> GameStatus {
        GameStatus::from_outcome(&self.current_outcome(), self.next_player())
    }
}
