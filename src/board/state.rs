//! Board state.
//!
//! Two 64-bit sets describe a position: `taken` marks occupied cells and
//! `black` marks which of those hold a black stone. Bits of `black` outside
//! `taken` carry no meaning and are never read as white.
//!
//! The board is `Copy`: cloning one for a hypothetical move produces a fully
//! independent value, so search branches cannot observe each other.

use std::fmt;

use super::side::Side;
use super::square::{on_board, Move, BOARD_SIZE, CELL_COUNT};
use crate::movegen::{self, iter_bits, DIRECTIONS};
use crate::protocol::layout::LayoutError;

/// Errors reported when applying a move that the rules do not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move {mv} for {side:?}")]
    Illegal { mv: Move, side: Side },
}

/// An 8x8 Othello position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    taken: u64,
    black: u64,
}

impl Board {
    /// Creates a board with the standard starting cross:
    /// (3,3) and (4,4) white, (4,3) and (3,4) black.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.set(Side::White, 3, 3);
        board.set(Side::White, 4, 4);
        board.set(Side::Black, 4, 3);
        board.set(Side::Black, 3, 4);
        board
    }

    /// Creates a board with no stones.
    pub const fn empty() -> Self {
        Board { taken: 0, black: 0 }
    }

    /// Returns an independent copy of this board.
    pub fn copy(&self) -> Board {
        *self
    }

    #[inline]
    fn bit(x: usize, y: usize) -> u64 {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        1u64 << (x + BOARD_SIZE * y)
    }

    /// Returns the stones belonging to `side`.
    #[inline]
    pub fn stones(&self, side: Side) -> u64 {
        match side {
            Side::Black => self.taken & self.black,
            Side::White => self.taken & !self.black,
        }
    }

    /// Returns the occupancy set.
    #[inline]
    pub fn occupancy(&self) -> u64 {
        self.taken
    }

    /// Returns true if any stone sits at `(x, y)`.
    pub fn occupied(&self, x: usize, y: usize) -> bool {
        self.taken & Board::bit(x, y) != 0
    }

    /// Returns true if `(x, y)` holds a stone of `side`.
    pub fn get(&self, side: Side, x: usize, y: usize) -> bool {
        self.stones(side) & Board::bit(x, y) != 0
    }

    /// Marks `(x, y)` as holding a stone of `side`, overwriting any color
    /// already there. Never clears occupancy.
    pub fn set(&mut self, side: Side, x: usize, y: usize) {
        let bit = Board::bit(x, y);
        self.taken |= bit;
        match side {
            Side::Black => self.black |= bit,
            Side::White => self.black &= !bit,
        }
    }

    /// Returns the color at `(x, y)`, if any.
    pub fn side_at(&self, x: usize, y: usize) -> Option<Side> {
        if !self.occupied(x, y) {
            None
        } else if self.get(Side::Black, x, y) {
            Some(Side::Black)
        } else {
            Some(Side::White)
        }
    }

    /// Returns true if `mv` is legal for `side`.
    ///
    /// A pass (`None`) is legal only when `side` has no placement. A
    /// placement needs an empty cell and at least one ray holding one or more
    /// opponent stones closed off by a stone of `side`.
    pub fn is_legal_move(&self, mv: Option<Move>, side: Side) -> bool {
        let Some(mv) = mv else {
            return !self.has_legal_moves(side);
        };

        let (x, y) = (mv.x(), mv.y());
        if self.occupied(x, y) {
            return false;
        }

        let other = side.other();
        for (dx, dy) in DIRECTIONS {
            let mut cx = x as i32 + dx;
            let mut cy = y as i32 + dy;
            if !(on_board(cx, cy) && self.get(other, cx as usize, cy as usize)) {
                continue;
            }
            while on_board(cx, cy) && self.get(other, cx as usize, cy as usize) {
                cx += dx;
                cy += dy;
            }
            if on_board(cx, cy) && self.get(side, cx as usize, cy as usize) {
                return true;
            }
        }

        false
    }

    /// Returns the legal placements for `side` as a bit per cell. The option
    /// to pass is not encoded.
    pub fn legal_move_set(&self, side: Side) -> u64 {
        movegen::legal_moves(self.stones(side), self.stones(side.other()))
    }

    /// Iterates the legal placements for `side` in increasing cell index.
    pub fn legal_moves(&self, side: Side) -> impl Iterator<Item = Move> {
        iter_bits(self.legal_move_set(side)).map(Move::from_index)
    }

    /// Returns true if `side` has at least one legal placement.
    pub fn has_legal_moves(&self, side: Side) -> bool {
        self.legal_move_set(side) != 0
    }

    /// Returns true when neither side can place a stone.
    pub fn is_game_over(&self) -> bool {
        !(self.has_legal_moves(Side::Black) || self.has_legal_moves(Side::White))
    }

    /// Plays `mv` for `side`.
    ///
    /// Passes and illegal moves leave the board unchanged without any signal;
    /// use [`Board::try_apply_move`] to tell the two apart.
    pub fn apply_move(&mut self, mv: Option<Move>, side: Side) {
        let _ = self.try_apply_move(mv, side);
    }

    /// Plays `mv` for `side` and returns the number of stones flipped.
    ///
    /// A pass always succeeds and changes nothing. An illegal placement is
    /// rejected and the board is left untouched.
    pub fn try_apply_move(&mut self, mv: Option<Move>, side: Side) -> Result<u32, MoveError> {
        let Some(mv) = mv else {
            return Ok(0);
        };
        if !self.is_legal_move(Some(mv), side) {
            return Err(MoveError::Illegal { mv, side });
        }

        let (x, y) = (mv.x(), mv.y());
        let flips = movegen::captures(self.stones(side), self.stones(side.other()), x, y);
        for index in iter_bits(flips) {
            self.set(side, index % BOARD_SIZE, index / BOARD_SIZE);
        }
        self.set(side, x, y);

        Ok(flips.count_ones())
    }

    /// Returns the number of stones of `side` on the board.
    pub fn count(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.count_black(),
            Side::White => self.count_white(),
        }
    }

    /// Returns the number of black stones.
    pub fn count_black(&self) -> u32 {
        (self.taken & self.black).count_ones()
    }

    /// Returns the number of white stones.
    pub fn count_white(&self) -> u32 {
        self.taken.count_ones() - self.count_black()
    }

    /// Returns the number of occupied cells.
    pub fn occupied_count(&self) -> u32 {
        self.taken.count_ones()
    }

    /// Scores this position for `side` against `side.other()`; see
    /// [`crate::eval::evaluate`].
    pub fn evaluate(&self, side: Side, last_move: Option<Move>) -> i32 {
        crate::eval::evaluate(self, side, last_move)
    }

    /// Returns the side with more stones once the game is over. None while
    /// play continues or on a draw.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_game_over() {
            return None;
        }
        let black = self.count_black();
        let white = self.count_white();
        if black > white {
            Some(Side::Black)
        } else if white > black {
            Some(Side::White)
        } else {
            None
        }
    }

    /// Replaces the whole position from 64 symbols in index order: `'b'`,
    /// `'w'`, and `'-'` or `'.'` for an empty cell. Intended for fixtures.
    ///
    /// On error the board is left unchanged.
    pub fn set_board(&mut self, data: &[char]) -> Result<(), LayoutError> {
        if data.len() != CELL_COUNT {
            return Err(LayoutError::WrongLength(data.len()));
        }

        let mut board = Board::empty();
        for (index, &c) in data.iter().enumerate() {
            match c {
                '-' | '.' => {}
                _ => {
                    let side = Side::from_layout_char(c)
                        .ok_or(LayoutError::InvalidSymbol { symbol: c, index })?;
                    board.set(side, index % BOARD_SIZE, index / BOARD_SIZE);
                }
            }
        }

        *self = board;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let c = self.side_at(x, y).map_or('-', Side::layout_char);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
