//! Legal move generation.
//!
//! Works on raw bitboards: `me` holds the mover's stones, `opp` the
//! opponent's. Bit `x + 8 * y` is cell `(x, y)`.
//!
//! Design: the full legal-move set is computed with shift-and-mask fills
//! (eight directions in parallel over all cells), which is what search and
//! evaluation call on every node. Single-cell questions (is this placement
//! legal, which stones does it flip) walk the rays directly.

use crate::board::square::{on_board, BOARD_SIZE};

/// The eight compass directions as `(dx, dy)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Cells with `x == 0`.
const FILE_A: u64 = 0x0101_0101_0101_0101;
/// Cells with `x == 7`.
const FILE_H: u64 = 0x8080_8080_8080_8080;

/// Shifts every stone one step in direction `(dx, dy)`, dropping stones
/// that would wrap around a board edge.
#[inline]
fn shift(bits: u64, dx: i32, dy: i32) -> u64 {
    let amount = dx + BOARD_SIZE as i32 * dy;
    let moved = if amount >= 0 {
        bits << amount
    } else {
        bits >> -amount
    };
    match dx {
        1 => moved & !FILE_A,
        -1 => moved & !FILE_H,
        _ => moved,
    }
}

/// Returns the set of empty cells where the mover captures at least one stone.
pub fn legal_moves(me: u64, opp: u64) -> u64 {
    let empty = !(me | opp);
    let mut moves = 0u64;

    for (dx, dy) in DIRECTIONS {
        // A capturing line holds at most six opponent stones.
        let mut run = shift(me, dx, dy) & opp;
        for _ in 0..5 {
            run |= shift(run, dx, dy) & opp;
        }
        moves |= shift(run, dx, dy) & empty;
    }

    moves
}

/// Returns the stones captured along one ray from `(x, y)`, or 0 if the
/// ray is not bounded by one of the mover's stones.
pub fn ray_captures(me: u64, opp: u64, x: usize, y: usize, dx: i32, dy: i32) -> u64 {
    let mut cx = x as i32 + dx;
    let mut cy = y as i32 + dy;
    let mut line = 0u64;

    while on_board(cx, cy) {
        let bit = 1u64 << (cx + BOARD_SIZE as i32 * cy);
        if opp & bit != 0 {
            line |= bit;
        } else if me & bit != 0 {
            return line;
        } else {
            return 0;
        }
        cx += dx;
        cy += dy;
    }

    0
}

/// Returns every stone a placement at `(x, y)` would flip. Occupancy of the
/// target cell is not checked.
pub fn captures(me: u64, opp: u64, x: usize, y: usize) -> u64 {
    DIRECTIONS
        .iter()
        .fold(0, |acc, &(dx, dy)| acc | ray_captures(me, opp, x, y, dx, dy))
}

/// Iterates the set bits of `bits` in increasing index order.
pub fn iter_bits(mut bits: u64) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if bits == 0 {
            return None;
        }
        let index = bits.trailing_zeros() as usize;
        bits &= bits - 1;
        Some(index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bit(x: usize, y: usize) -> u64 {
        1u64 << (x + 8 * y)
    }

    /// Standard start from Black's point of view.
    fn start() -> (u64, u64) {
        let black = bit(4, 3) | bit(3, 4);
        let white = bit(3, 3) | bit(4, 4);
        (black, white)
    }

    #[test]
    fn opening_moves_for_black() {
        let (black, white) = start();
        let moves = legal_moves(black, white);
        let expected = bit(3, 2) | bit(2, 3) | bit(5, 4) | bit(4, 5);
        assert_eq!(moves, expected);
    }

    #[test]
    fn opening_moves_for_white() {
        let (black, white) = start();
        let moves = legal_moves(white, black);
        let expected = bit(4, 2) | bit(5, 3) | bit(2, 4) | bit(3, 5);
        assert_eq!(moves, expected);
    }

    #[test]
    fn shift_does_not_wrap_across_files() {
        assert_eq!(shift(bit(7, 2), 1, 0), 0);
        assert_eq!(shift(bit(0, 2), -1, 0), 0);
        assert_eq!(shift(bit(7, 2), 1, 1), 0);
        assert_eq!(shift(bit(0, 2), -1, -1), 0);
        assert_eq!(shift(bit(3, 7), 0, 1), 0);
        assert_eq!(shift(bit(3, 0), 0, -1), 0);
        assert_eq!(shift(bit(3, 3), 1, 1), bit(4, 4));
        assert_eq!(shift(bit(3, 3), -1, 1), bit(2, 4));
    }

    #[test]
    fn no_capture_across_the_edge() {
        // White at (7,0), black at (0,1): index-adjacent but not on one line.
        let me = bit(0, 1);
        let opp = bit(7, 0);
        assert_eq!(legal_moves(me, opp), 0);
        assert_eq!(captures(me, opp, 6, 0), 0);
    }

    #[test]
    fn long_line_capture() {
        // Black at (0,0), six white stones, empty (7,0).
        let me = bit(0, 0);
        let opp = (1..7).fold(0, |acc, x| acc | bit(x, 0));
        assert_eq!(legal_moves(me, opp), bit(7, 0));
        assert_eq!(captures(me, opp, 7, 0), opp);
    }

    #[test]
    fn ray_needs_terminating_stone() {
        let me = 0;
        let opp = bit(1, 0) | bit(2, 0);
        assert_eq!(ray_captures(me, opp, 0, 0, 1, 0), 0);
        assert_eq!(captures(me, opp, 0, 0), 0);
    }

    #[test]
    fn captures_accumulate_over_directions() {
        // Placing at (4,0) captures both westward and south-westward.
        let me = bit(0, 0) | bit(0, 4);
        let opp = bit(1, 0) | bit(2, 0) | bit(3, 0) | bit(3, 1) | bit(2, 2) | bit(1, 3);
        assert_eq!(captures(me, opp, 4, 0), opp);
    }

    #[test]
    fn iter_bits_is_ascending() {
        let bits = bit(5, 4) | bit(3, 2) | bit(0, 0);
        let found: Vec<usize> = iter_bits(bits).collect();
        assert_eq!(found, vec![0, 19, 37]);
    }
}
