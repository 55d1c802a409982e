//! Board layout text format.
//!
//! A layout lists all 64 cells in index order (`x + 8 * y`, so each run of
//! eight symbols is one row): `b` for black, `w` for white, `-` or `.` for
//! an empty cell. Whitespace is ignored so fixtures can be written as an
//! 8x8 grid.

use crate::board::{Board, Side, BOARD_SIZE, CELL_COUNT};

/// Errors that can occur while reading a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("expected 64 cells, got {0}")]
    WrongLength(usize),

    #[error("invalid cell symbol '{symbol}' at index {index}")]
    InvalidSymbol { symbol: char, index: usize },
}

/// Parses a layout string into a board.
pub fn parse_layout(s: &str) -> Result<Board, LayoutError> {
    let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut board = Board::empty();
    board.set_board(&cells)?;
    Ok(board)
}

/// Encodes a board as a 64-symbol layout, using `-` for empty cells.
pub fn encode_layout(board: &Board) -> String {
    let mut result = String::with_capacity(CELL_COUNT);
    for index in 0..CELL_COUNT {
        let (x, y) = (index % BOARD_SIZE, index / BOARD_SIZE);
        result.push(board.side_at(x, y).map_or('-', Side::layout_char));
    }
    result
}
