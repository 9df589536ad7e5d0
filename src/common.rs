//! Shared vocabulary: shot outcomes and board-level errors.

use core::fmt;

use crate::bitgrid::BitGridError;
use crate::ship::ShipClass;

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed on water (or on an already-struck cell).
    Miss,
    /// Shot struck a live ship segment.
    Hit,
    /// Shot struck the last live segment of the named ship.
    Sunk(ShipClass),
}

impl ShotOutcome {
    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bit grid error.
    BitGrid(BitGridError),
    /// Target cell is outside the grid on either axis.
    OutOfBounds { row: usize, col: usize },
    /// No free in-bounds position found for a random placement.
    UnableToPlace(ShipClass),
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        BoardError::BitGrid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitGrid(e) => write!(f, "bit grid error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) exceeds board limits", row, col)
            }
            BoardError::UnableToPlace(class) => {
                write!(f, "unable to find a free position for the {} ship", class)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
