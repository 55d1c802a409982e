//! The two competing colors.

use serde::{Deserialize, Serialize};

/// A player color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

/// Both sides in move order (Black moves first).
pub const ALL_SIDES: [Side; 2] = [Side::Black, Side::White];

impl Side {
    /// Returns the opposing side.
    pub const fn other(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Returns the single-character layout symbol.
    pub const fn layout_char(self) -> char {
        match self {
            Side::Black => 'b',
            Side::White => 'w',
        }
    }

    /// Parses a side from its single-character layout symbol.
    pub fn from_layout_char(c: char) -> Option<Side> {
        match c {
            'b' => Some(Side::Black),
            'w' => Some(Side::White),
            _ => None,
        }
    }
}
