//! Immutable board snapshots.
//!
//! A [`Board`] is never mutated after construction. Placing a mark
//! produces a fresh board, so every snapshot kept in the game history
//! stays independently inspectable.

use super::cell::{Cell, Player};
use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Square grid of cells stored in row-major order.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::{Board, Cell, Player};
///
/// let board = Board::default();
/// let next = board.with_mark(4, Player::X).unwrap();
///
/// assert_eq!(board.get(4), Some(Cell::Empty));
/// assert_eq!(next.get(4), Some(Cell::Occupied(Player::X)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct BoardRepr {
    dimension: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BuildError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let expected = cell_count(repr.dimension)?;
        if repr.cells.len() != expected {
            return Err(BuildError::CellCountMismatch {
                count: repr.cells.len(),
            });
        }
        Ok(Self {
            dimension: repr.dimension,
            cells: repr.cells,
        })
    }
}

fn cell_count(dimension: usize) -> Result<usize, BuildError> {
    if dimension == 0 {
        return Err(BuildError::ZeroDimension);
    }
    dimension
        .checked_mul(dimension)
        .ok_or(BuildError::DimensionOverflow { dimension })
}

/// Side length of a square holding `count` cells, if `count` is a perfect square.
fn side_length(count: usize) -> Option<usize> {
    let mut side = 0usize;
    while (side + 1)
        .checked_mul(side + 1)
        .is_some_and(|square| square <= count)
    {
        side += 1;
    }
    (side > 0 && side * side == count).then_some(side)
}

impl Board {
    /// Side length of the default board.
    pub const DEFAULT_DIMENSION: usize = 3;

    /// Create an all-empty board of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ZeroDimension`] for a zero dimension and
    /// [`BuildError::DimensionOverflow`] when `dimension²` does not fit in `usize`.
    pub fn empty(dimension: usize) -> Result<Self, BuildError> {
        let count = cell_count(dimension)?;
        Ok(Self {
            dimension,
            cells: vec![Cell::Empty; count],
        })
    }

    /// Build a board from cells in row-major order.
    ///
    /// The dimension is inferred from the number of cells, which must be a
    /// non-zero perfect square.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tictactoe_timeline::core::{Board, Cell};
    ///
    /// let board = Board::from_cells(vec![Cell::Empty; 16]).unwrap();
    /// assert_eq!(board.dimension(), 4);
    ///
    /// assert!(Board::from_cells(vec![Cell::Empty; 8]).is_err());
    /// ```
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, BuildError> {
        if cells.is_empty() {
            return Err(BuildError::ZeroDimension);
        }
        let dimension = side_length(cells.len()).ok_or(BuildError::CellCountMismatch {
            count: cells.len(),
        })?;
        Ok(Self { dimension, cells })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells (`dimension²`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: boards have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// True if `index` is on the board and unmarked.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of marks on the board.
    pub fn marks(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Return a copy of this board with `player`'s mark at `index`.
    ///
    /// Returns `None` if `index` is off the board. Occupancy is not checked
    /// here; that is a rule, see [`crate::rules::check_move`].
    pub fn with_mark(&self, index: usize, player: Player) -> Option<Board> {
        if index >= self.cells.len() {
            return None;
        }
        let mut cells = self.cells.clone();
        cells[index] = Cell::Occupied(player);
        Some(Self {
            dimension: self.dimension,
            cells,
        })
    }

    /// Row and column of `index`, 1-indexed.
    pub fn location(&self, index: usize) -> Option<Location> {
        if index >= self.cells.len() {
            return None;
        }
        Location::from_index(index, self.dimension)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            dimension: Self::DEFAULT_DIMENSION,
            cells: vec![Cell::Empty; Self::DEFAULT_DIMENSION * Self::DEFAULT_DIMENSION],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(self.dimension).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col_index, cell) in row.iter().enumerate() {
                if col_index > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Position of a cell, 1-indexed for display.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::core::Location;
///
/// let location = Location::from_index(5, 3).unwrap();
/// assert_eq!((location.row, location.col), (2, 3));
/// assert_eq!(location.to_string(), "row: 2, col: 3");
///
/// assert_eq!(Location::from_index(5, 0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    /// Location of a row-major `index` on a board of side `dimension`.
    ///
    /// Returns `None` for a zero dimension.
    pub fn from_index(index: usize, dimension: usize) -> Option<Self> {
        Some(Self {
            row: index.checked_div(dimension)? + 1,
            col: index.checked_rem(dimension)? + 1,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row: {}, col: {}", self.row, self.col)
    }
}
