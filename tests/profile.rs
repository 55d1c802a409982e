//! Move-generation counts and a search performance profile.
//!
//! Run the profile with: cargo test --release profile_search -- --nocapture --ignored

use std::time::Instant;

use flipside::board::{Board, Side};
use flipside::search::search;

/// Counts leaf positions `depth` plies below `board`; a pass counts as a move.
fn perft(board: &Board, depth: u32, side: Side) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_game_over() {
        return 1;
    }
    if !board.has_legal_moves(side) {
        return perft(board, depth - 1, side.other());
    }
    board
        .legal_moves(side)
        .map(|mv| {
            let mut child = board.copy();
            child.apply_move(Some(mv), side);
            perft(&child, depth - 1, side.other())
        })
        .sum()
}

#[test]
fn perft_matches_known_counts() {
    let board = Board::new();
    let expected = [4u64, 12, 56, 244, 1396, 8200];
    for (i, &count) in expected.iter().enumerate() {
        let depth = i as u32 + 1;
        assert_eq!(perft(&board, depth, Side::Black), count, "depth {}", depth);
    }
}

#[test]
#[ignore]
fn profile_search() {
    println!("\n========================================");
    println!("  Minimax Performance Profile");
    println!("========================================\n");

    let mut board = Board::new();
    let mut side = Side::Black;
    for ply in 0..8 {
        let start = Instant::now();
        let result = search(&board, 6, side);
        println!(
            "  ply {:2} {:?}: {} ({:?})",
            ply,
            side,
            result.info,
            start.elapsed()
        );
        board.apply_move(result.node.best_move, side);
        side = side.other();
    }
}
