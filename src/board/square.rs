//! Board coordinates and moves.
//!
//! A move is a placement at `(x, y)` with both coordinates in `0..8`. The
//! cell index is `x + 8 * y`, so `x` varies fastest when iterating indices.
//! A pass is represented as `Option::<Move>::None` throughout the crate.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Coordinates that do not name a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cell ({x}, {y}) is off the board")]
pub struct OffBoard {
    pub x: usize,
    pub y: usize,
}

/// A stone placement.
///
/// Deserialization goes through [`Move::checked`], so off-board
/// coordinates are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    x: u8,
    y: u8,
}

/// Unvalidated wire form of a [`Move`].
#[derive(Deserialize)]
struct RawMove {
    x: usize,
    y: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = OffBoard;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::checked(raw.x, raw.y).ok_or(OffBoard { x: raw.x, y: raw.y })
    }
}

impl Move {
    /// Creates a move at `(x, y)`.
    ///
    /// Coordinates must be on the board; use [`Move::checked`] for
    /// untrusted input.
    pub const fn new(x: usize, y: usize) -> Self {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        Move {
            x: x as u8,
            y: y as u8,
        }
    }

    /// Creates a move at `(x, y)`, or None if the coordinates are off the board.
    pub fn checked(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Move::new(x, y))
        } else {
            None
        }
    }

    /// Creates a move from a cell index `x + 8 * y`.
    pub const fn from_index(index: usize) -> Self {
        Move::new(index % BOARD_SIZE, index / BOARD_SIZE)
    }

    /// Column, 0 to 7.
    #[inline]
    pub const fn x(self) -> usize {
        self.x as usize
    }

    /// Row, 0 to 7.
    #[inline]
    pub const fn y(self) -> usize {
        self.y as usize
    }

    /// Returns the cell index `x + 8 * y`.
    #[inline]
    pub const fn index(self) -> usize {
        self.x as usize + BOARD_SIZE * self.y as usize
    }

    /// Returns the single-bit mask for this cell.
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.index()
    }
}

/// Returns true if `(x, y)` lies on the board.
#[inline]
pub(crate) fn on_board(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}
