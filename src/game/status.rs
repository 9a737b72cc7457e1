//! Status line for the viewed step.

use crate::core::Player;
use crate::rules::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a view should announce for the current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Won(Player),
    Draw,
    NextPlayer(Player),
}

impl GameStatus {
    pub fn from_outcome(outcome: &Outcome, next_player: Player) -> Self {
        match outcome.winner() {
            Some(player) => GameStatus::Won(player),
            None if outcome.is_draw() => GameStatus::Draw,
            None => GameStatus::NextPlayer(next_player),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Won(player) => write!(f, "Winner: {player}"),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Line;

    #[test]
    fn status_reflects_outcome() {
        let won = Outcome::won(Player::O, Line::from(vec![0, 1, 2]));
        assert_eq!(
            GameStatus::from_outcome(&won, Player::X),
            GameStatus::Won(Player::O)
        );
        assert_eq!(
            GameStatus::from_outcome(&Outcome::draw(), Player::O),
            GameStatus::Draw
        );
        assert_eq!(
            GameStatus::from_outcome(&Outcome::in_progress(), Player::O),
            GameStatus::NextPlayer(Player::O)
        );
    }

    #[test]
    fn status_lines() {
        assert_eq!(GameStatus::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
        assert_eq!(
            GameStatus::NextPlayer(Player::O).to_string(),
            "Next player: O"
        );
    }
}
