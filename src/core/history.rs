//! Board snapshot history.
//!
//! Provides immutable tracking of the boards a game has passed through,
//! following functional programming principles: recording a move returns
//! a new history and leaves the old one intact.

use super::board::{Board, Location};
use super::cell::{Cell, Player};
use crate::error::BuildError;
use crate::rules::check_move;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A board snapshot plus the move that produced it.
///
/// The entry at step 0 is the starting board and has no location.
///
/// `played_at` is informational: entries compare equal when their boards
/// and locations match, whenever they were played.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Board, HistoryEntry, Player};
///
/// let board = Board::default().with_mark(4, Player::X).unwrap();
/// let location = board.location(4);
/// let entry = HistoryEntry::new(board, location);
///
/// assert_eq!(entry.location_label().as_deref(), Some("row: 2, col: 2"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    location: Option<Location>,
    played_at: DateTime<Utc>,
}

impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.location == other.location
    }
}

impl Eq for HistoryEntry {}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(board: Board, location: Option<Location>) -> Self {
        Self {
            board,
            location,
            played_at: Utc::now(),
        }
    }

    /// The starting entry of a game.
    pub fn initial(board: Board) -> Self {
        Self::new(board, None)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the mark that produced this board was placed.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Display string for the move location, e.g. `row: 1, col: 3`.
    pub fn location_label(&self) -> Option<String> {
        self.location.map(|location| location.to_string())
    }

    pub fn played_at(&self) -> DateTime<Utc> {
        self.played_at
    }
}

/// Ordered, never-empty history of board snapshots.
///
/// History is immutable - the `record` method returns a new history
/// with the entry added.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Board, GameHistory, HistoryEntry, Player};
///
/// let history = GameHistory::new(Board::default());
///
/// let board = history.latest().board().with_mark(0, Player::X).unwrap();
/// let history = history.record(0, HistoryEntry::new(board, None));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest_step(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<Vec<HistoryEntry>> for GameHistory {
    type Error = BuildError;

    fn try_from(entries: Vec<HistoryEntry>) -> Result<Self, Self::Error> {
        let first = entries.first().ok_or(BuildError::EmptyHistory)?;
        let dimension = first.board.dimension();
        if let Some(entry) = entries
            .iter()
            .find(|entry| entry.board.dimension() != dimension)
        {
            return Err(BuildError::MixedDimensions {
                expected: dimension,
                found: entry.board.dimension(),
            });
        }
        if first.location.is_some() || first.board.marks() > 0 {
            return Err(BuildError::InvalidStart);
        }
        for (step, pair) in entries.windows(2).enumerate() {
            check_played_step(&pair[0], &pair[1], Player::for_step(step))
                .ok_or(BuildError::InconsistentStep { step: step + 1 })?;
        }
        Ok(Self { entries })
    }
}

/// Confirm `entry` is `previous` plus one legal mark by `player` at the
/// recorded location.
fn check_played_step(
    previous: &HistoryEntry,
    entry: &HistoryEntry,
    player: Player,
) -> Option<()> {
    let mut changed = previous
        .board
        .cells()
        .iter()
        .zip(entry.board.cells())
        .enumerate()
        .filter(|(_, (before, after))| before != after)
        .map(|(index, _)| index);
    let index = changed.next()?;
    if changed.next().is_some() {
        return None;
    }

    check_move(&previous.board, index).ok()?;
    let placed = entry.board.get(index) == Some(Cell::Occupied(player));
    let located = entry.location.is_some() && entry.location == previous.board.location(index);
    (placed && located).then_some(())
}

impl From<GameHistory> for Vec<HistoryEntry> {
    fn from(history: GameHistory) -> Self {
        history.entries
    }
}

impl GameHistory {
    /// Create a history holding only the starting board.
    pub fn new(initial: Board) -> Self {
        Self {
            entries: vec![HistoryEntry::initial(initial)],
        }
    }

    /// Record an entry played from `step`, returning a new history.
    ///
    /// Entries after `step` are discarded before the new entry is appended,
    /// so recording from an earlier step starts a new branch. A `step` past
    /// the end keeps every entry.
    ///
    /// This is a pure function - it does not mutate the existing history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tictactoe_timeline::core::{Board, GameHistory, HistoryEntry, Player};
    ///
    /// let start = Board::default();
    /// let mut history = GameHistory::new(start.clone());
    /// for (step, index) in [0, 4, 8].into_iter().enumerate() {
    ///     let player = Player::for_step(step);
    ///     let board = history.latest().board().with_mark(index, player).unwrap();
    ///     let location = board.location(index);
    ///     history = history.record(step, HistoryEntry::new(board, location));
    /// }
    /// assert_eq!(history.len(), 4);
    ///
    /// let branch = start.with_mark(2, Player::X).unwrap();
    /// let rewound = history.record(0, HistoryEntry::new(branch, None));
    /// assert_eq!(rewound.len(), 2);
    /// assert_eq!(history.len(), 4); // Original unchanged
    /// ```
    pub fn record(&self, step: usize, entry: HistoryEntry) -> Self {
        let keep = step.saturating_add(1).min(self.entries.len());
        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);
        entries.push(entry);
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// The starting entry.
    pub fn first(&self) -> &HistoryEntry {
        &self.entries[0]
    }

    /// The most recently recorded entry.
    pub fn latest(&self) -> &HistoryEntry {
        &self.entries[self.latest_step()]
    }

    /// Index of the most recently recorded entry.
    pub fn latest_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Number of entries, including the starting board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the boards in step order.
    pub fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        self.entries.iter().map(HistoryEntry::board)
    }

    /// Time elapsed between the first and the latest entry.
    ///
    /// Returns `None` if the clock went backwards between the two.
    pub fn duration(&self) -> Option<Duration> {
        self.latest()
            .played_at
            .signed_duration_since(self.first().played_at)
            .to_std()
            .ok()
    }
}
