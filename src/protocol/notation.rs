//! Algebraic move notation.
//!
//! A placement is written as a column letter `a`..`h` (the x coordinate)
//! followed by a row digit `1`..`8` (y + 1), so `(3, 2)` is `d3`. A pass is
//! written `pass`.

use std::fmt;

use crate::board::Move;

/// Errors that can occur while parsing move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("move notation must be two characters or 'pass': '{0}'")]
    WrongLength(String),

    #[error("invalid column '{0}', expected a-h")]
    InvalidColumn(char),

    #[error("invalid row '{0}', expected 1-8")]
    InvalidRow(char),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = (b'a' + self.x() as u8) as char;
        write!(f, "{}{}", column, self.y() + 1)
    }
}

/// Formats a move or pass.
pub fn format_move(mv: Option<Move>) -> String {
    match mv {
        Some(m) => m.to_string(),
        None => "pass".to_string(),
    }
}

/// Parses a move like `d3` (case-insensitive) or `pass`.
///
/// Returns `Ok(None)` for a pass.
pub fn parse_move(s: &str) -> Result<Option<Move>, NotationError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Ok(None);
    }

    let mut chars = s.chars();
    let (Some(column), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::WrongLength(s.to_string()));
    };

    let x = match column.to_ascii_lowercase() {
        c @ 'a'..='h' => c as usize - 'a' as usize,
        _ => return Err(NotationError::InvalidColumn(column)),
    };
    let y = match row {
        c @ '1'..='8' => c as usize - '1' as usize,
        _ => return Err(NotationError::InvalidRow(row)),
    };

    Ok(Some(Move::new(x, y)))
}
