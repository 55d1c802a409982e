//! Heuristic position evaluation.
//!
//! Scores a board from one side's perspective using three mid-game terms:
//! mobility balance, a positional weight for the cell just played, and the
//! number of moves left open. Stone count only matters once the board is
//! nearly full.
//!
//! Design: the positional weights are rebuilt per call from a small table of
//! corners. X-squares (diagonal to a corner) and C-squares (orthogonal to a
//! corner) are penalised only while their corner is empty; once a corner is
//! taken they are revalued.

use crate::board::{Board, Move, Side, CELL_COUNT};

/// Score for a position where one side has no stones left.
pub const WIPEOUT_SCORE: i32 = 999_999;

/// Above this many occupied cells the evaluation is the stone difference.
pub const ENDGAME_OCCUPANCY: u32 = 60;

/// Below this many occupied cells corners use the early-game bonus.
pub const EARLY_GAME_OCCUPANCY: u32 = 30;

pub const CORNER_EARLY: i32 = 800;
pub const CORNER_LATE: i32 = 100;
pub const X_SQUARE: i32 = -50;
pub const C_SQUARE: i32 = -30;
pub const X_SQUARE_CORNER_TAKEN: i32 = -10;
pub const C_SQUARE_CORNER_TAKEN: i32 = 20;

pub const MOBILITY_WEIGHT: i32 = 150;
pub const MOVE_COUNT_WEIGHT: i32 = 30;

/// A corner with its X-square and two C-squares, as cell indices.
struct CornerRegion {
    corner: usize,
    x_square: usize,
    c_squares: [usize; 2],
}

const CORNERS: [CornerRegion; 4] = [
    CornerRegion { corner: 0, x_square: 9, c_squares: [1, 8] },
    CornerRegion { corner: 7, x_square: 14, c_squares: [6, 15] },
    CornerRegion { corner: 56, x_square: 49, c_squares: [48, 57] },
    CornerRegion { corner: 63, x_square: 54, c_squares: [55, 62] },
];

/// Builds the positional weight table for the current corner state.
pub fn weight_table(board: &Board) -> [i32; CELL_COUNT] {
    let mut weights = [0i32; CELL_COUNT];
    let corner_value = if board.occupied_count() < EARLY_GAME_OCCUPANCY {
        CORNER_EARLY
    } else {
        CORNER_LATE
    };

    for region in CORNERS.iter() {
        weights[region.corner] = corner_value;
        let taken = board.occupancy() & (1u64 << region.corner) != 0;
        let (x_weight, c_weight) = if taken {
            (X_SQUARE_CORNER_TAKEN, C_SQUARE_CORNER_TAKEN)
        } else {
            (X_SQUARE, C_SQUARE)
        };
        weights[region.x_square] = x_weight;
        for &c in region.c_squares.iter() {
            weights[c] = c_weight;
        }
    }

    weights
}

/// Returns the mobility balance `150 * (my - op) / (my + op)`.
///
/// Uses truncating integer division, so the result rounds toward zero.
/// Returns 0 when neither side can move.
#[inline]
pub fn mobility_term(my_moves: i32, op_moves: i32) -> i32 {
    if my_moves + op_moves == 0 {
        return 0;
    }
    MOBILITY_WEIGHT * (my_moves - op_moves) / (my_moves + op_moves)
}

/// Returns the positional weight of `last_move`, positive if the stone on
/// that cell belongs to `side` and negative otherwise.
fn positional_term(board: &Board, side: Side, last_move: Option<Move>) -> i32 {
    let Some(mv) = last_move else {
        return 0;
    };
    let weight = weight_table(board)[mv.index()];
    match board.side_at(mv.x(), mv.y()) {
        Some(owner) if owner == side => weight,
        Some(_) => -weight,
        None => 0,
    }
}

/// Evaluates the board from `side`'s perspective.
///
/// `last_move` is the placement that produced this position, if any. The
/// board is never modified.
pub fn evaluate(board: &Board, side: Side, last_move: Option<Move>) -> i32 {
    let opponent = side.other();
    let own = board.count(side) as i32;
    let theirs = board.count(opponent) as i32;

    if own == 0 {
        return -WIPEOUT_SCORE;
    }
    if theirs == 0 {
        return WIPEOUT_SCORE;
    }
    if board.occupied_count() > ENDGAME_OCCUPANCY {
        return own - theirs;
    }

    let my_moves = board.legal_move_set(side).count_ones() as i32;
    let op_moves = board.legal_move_set(opponent).count_ones() as i32;

    mobility_term(my_moves, op_moves)
        + positional_term(board, side, last_move)
        + MOVE_COUNT_WEIGHT * my_moves
}
