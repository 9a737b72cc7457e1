//! Move-list entries for time-travel navigation.

use crate::core::{HistoryEntry, Location};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// One selectable step in the move list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMove {
    /// History step to pass to [`GameState::jump_to`](crate::GameState::jump_to).
    pub step: usize,
    /// Cell marked by this move; `None` for the starting board.
    pub location: Option<Location>,
    /// Whether this step is the one currently viewed.
    pub is_current: bool,
}

impl DisplayMove {
    /// Human-readable label, e.g. `Go to move #3, at row: 1, col: 2`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DisplayMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.step, self.location) {
            (0, _) => write!(f, "Go to game start"),
            (step, Some(location)) => write!(f, "Go to move #{step}, at {location}"),
            (step, None) => write!(f, "Go to move #{step}"),
        }
    }
}

/// Lazy iterator over a game's move list.
///
/// Yields one [`DisplayMove`] per history entry, in step order or reversed.
/// Call [`GameState::display_moves`](crate::GameState::display_moves) again
/// to start over.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::GameState;
///
/// let game = GameState::new().apply_move(4).apply_move(0);
///
/// let labels: Vec<String> = game.display_moves().map(|m| m.label()).collect();
/// assert_eq!(
///     labels,
///     vec![
///         "Go to game start",
///         "Go to move #1, at row: 2, col: 2",
///         "Go to move #2, at row: 1, col: 1",
///     ]
/// );
///
/// let steps: Vec<usize> = game
///     .toggle_move_order()
///     .display_moves()
///     .map(|m| m.step)
///     .collect();
/// assert_eq!(steps, vec![2, 1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct DisplayMoves<'a> {
    entries: Enumerate<slice::Iter<'a, HistoryEntry>>,
    current_step: usize,
    reversed: bool,
}

impl<'a> DisplayMoves<'a> {
    pub(crate) fn new(entries: &'a [HistoryEntry], current_step: usize, reversed: bool) -> Self {
        Self {
            entries: entries.iter().enumerate(),
            current_step,
            reversed,
        }
    }

    fn display(&self, (step, entry): (usize, &HistoryEntry)) -> DisplayMove {
        DisplayMove {
            step,
            location: entry.location(),
            is_current: step == self.current_step,
        }
    }
}

impl Iterator for DisplayMoves<'_> {
    type Item = DisplayMove;

    fn next(&mut self) -> Option<Self::Item> {
        let item = if self.reversed {
            self.entries.next_back()
        } else {
            self.entries.next()
        }?;
        Some(self.display(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl DoubleEndedIterator for DisplayMoves<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = if self.reversed {
            self.entries.next()
        } else {
            self.entries.next_back()
        }?;
        Some(self.display(item))
    }
}

impl ExactSizeIterator for DisplayMoves<'_> {}

impl FusedIterator for DisplayMoves<'_> {}

#[cfg(test)]
mod tests {
    use crate::GameState;

    fn steps(game: &GameState) -> Vec<usize> {
        game.display_moves().map(|m| m.step).collect()
    }

    #[test]
    fn moves_follow_history_order() {
        let game = GameState::new().apply_move(0).apply_move(1);
        assert_eq!(steps(&game), vec![0, 1, 2]);
        assert_eq!(game.display_moves().len(), 3);
    }

    #[test]
    fn reversed_order_yields_newest_first() {
        let game = GameState::new()
            .apply_move(0)
            .apply_move(1)
            .toggle_move_order();
        assert_eq!(steps(&game), vec![2, 1, 0]);
        assert_eq!(
            game.display_moves().rev().map(|m| m.step).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn listing_is_restartable() {
        let game = GameState::new().apply_move(3);
        let first: Vec<_> = game.display_moves().collect();
        let second: Vec<_> = game.display_moves().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn current_step_is_flagged() {
        let game = GameState::new()
            .apply_move(0)
            .apply_move(1)
            .jump_to(1);
        let current: Vec<usize> = game
            .display_moves()
            .filter(|m| m.is_current)
            .map(|m| m.step)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn start_entry_has_no_location() {
        let game = GameState::new().apply_move(8);
        let first = game.display_moves().next().unwrap();
        assert_eq!(first.location, None);
        assert_eq!(first.label(), "Go to game start");

        let last = game.display_moves().last().unwrap();
        assert_eq!(last.label(), "Go to move #1, at row: 3, col: 3");
    }
}
