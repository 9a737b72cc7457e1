//! Builder for configuring a new game.

use super::state::GameState;
use crate::core::Board;
use crate::error::BuildError;

/// Builder for constructing games with a fluent API.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::GameBuilder;
///
/// let game = GameBuilder::new()
///     .dimension(4)
///     .reversed_order(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.dimension(), 4);
/// assert!(game.is_reversed());
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    dimension: usize,
    reversed_order: bool,
}

impl GameBuilder {
    /// Create a builder for a 3×3 game listed oldest move first.
    pub fn new() -> Self {
        Self {
            dimension: Board::DEFAULT_DIMENSION,
            reversed_order: false,
        }
    }

    /// Set the board's side length.
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// List moves newest first.
    pub fn reversed_order(mut self, reversed_order: bool) -> Self {
        self.reversed_order = reversed_order;
        self
    }

    /// Build the game.
    /// Returns an error if the dimension cannot form a board.
    pub fn build(self) -> Result<GameState, BuildError> {
        let board = Board::empty(self.dimension)?;
        Ok(GameState::from_board(board).with_reversed_order(self.reversed_order))
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a game on an empty `dimension`×`dimension` board.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::{create_game, BuildError};
///
/// let game = create_game(3).unwrap();
/// assert_eq!(game.history().len(), 1);
///
/// assert_eq!(create_game(0).unwrap_err(), BuildError::ZeroDimension);
/// ```
pub fn create_game(dimension: usize) -> Result<GameState, BuildError> {
    GameBuilder::new().dimension(dimension).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_new_game() {
        let built = GameBuilder::new().build().unwrap();
        let fresh = GameState::new();
        assert_eq!(built.dimension(), fresh.dimension());
        assert_eq!(built.current_step(), 0);
        assert!(!built.is_reversed());
    }

    #[test]
    fn builder_requires_positive_dimension() {
        let result = GameBuilder::new().dimension(0).build();
        assert!(matches!(result, Err(BuildError::ZeroDimension)));
    }

    #[test]
    fn builder_rejects_overflowing_dimension() {
        let result = GameBuilder::new().dimension(usize::MAX).build();
        assert!(matches!(result, Err(BuildError::DimensionOverflow { .. })));
    }

    #[test]
    fn create_game_uses_dimension() {
        let game = create_game(5).unwrap();
        assert_eq!(game.current_board().len(), 25);
    }
}
