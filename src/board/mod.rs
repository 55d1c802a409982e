//! Board representation and game-state types.
//!
//! Contains the sides, move coordinates, and the 64-cell position with its
//! legality and capture rules.

pub mod side;
pub mod square;
pub mod state;

pub use side::{Side, ALL_SIDES};
pub use square::{Move, OffBoard, BOARD_SIZE, CELL_COUNT};
pub use state::{Board, MoveError};
