//! Error types for game construction and fallible transitions.

use crate::rules::IllegalMove;
use thiserror::Error;

/// Errors that can occur when building boards, histories and games.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Board dimension must be at least 1")]
    ZeroDimension,

    #[error("Board dimension {dimension} is too large")]
    DimensionOverflow { dimension: usize },

    #[error("{count} cells cannot form a square board")]
    CellCountMismatch { count: usize },

    #[error("History must contain at least the starting board")]
    EmptyHistory,

    #[error("History mixes board dimensions (expected {expected}, found {found})")]
    MixedDimensions { expected: usize, found: usize },

    #[error("History must start from an empty board with no move location")]
    InvalidStart,

    #[error("History step {step} is not a single legal move from the previous board")]
    InconsistentStep { step: usize },
}

/// Errors reported by the fallible game transitions.
///
/// [`crate::GameState::apply_move`] and [`crate::GameState::jump_to`] never
/// return these; their `try_` counterparts do.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),

    #[error("Step {step} is out of range (latest step: {latest})")]
    StepOutOfRange { step: usize, latest: usize },
}
