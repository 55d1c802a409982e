//! Fixed-depth minimax search.
//!
//! Explores every legal move for both sides down to a fixed depth without
//! pruning. Leaves are scored from the maximizer's point of view, where the
//! maximizer is the side to move at the root.
//!
//! Every branch plays its move on its own copy of the parent board; the
//! board passed in by the caller is never modified.

use std::fmt;
use std::time::Instant;

use crate::board::{Board, Move, Side};
use crate::movegen::iter_bits;

/// Best move found below a node and the score it leads to.
///
/// `best_move` is None at leaves, at forced passes, and when the side to
/// move has no placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode {
    pub best_move: Option<Move>,
    pub score: i32,
}

/// Search statistics, displayed as an engine `info` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub nodes: u64,
    pub score: i32,
    pub elapsed_ms: u64,
}

impl fmt::Display for SearchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "info depth {} nodes {} score {} time {}",
            self.depth, self.nodes, self.score, self.elapsed_ms
        )
    }
}

/// Result of a search: the root node and associated info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub node: TreeNode,
    pub info: SearchInfo,
}

/// Recursion state shared by one top-level search.
struct Minimax {
    maximizer: Side,
    nodes: u64,
}

impl Minimax {
    fn new(maximizer: Side) -> Self {
        Minimax { maximizer, nodes: 0 }
    }

    fn search(
        &mut self,
        board: &Board,
        depth: u32,
        to_move: Side,
        last_move: Option<Move>,
    ) -> TreeNode {
        self.nodes += 1;

        if depth == 0 {
            return TreeNode {
                best_move: None,
                score: board.evaluate(self.maximizer, last_move),
            };
        }

        let moves = board.legal_move_set(to_move);
        if moves == 0 {
            // Forced pass: same board, other side, one ply consumed.
            let child = self.search(board, depth - 1, to_move.other(), None);
            return TreeNode {
                best_move: None,
                score: child.score,
            };
        }

        let maximizing = to_move == self.maximizer;
        let mut best = TreeNode {
            best_move: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for index in iter_bits(moves) {
            let mv = Move::from_index(index);
            let mut child_board = board.copy();
            child_board.apply_move(Some(mv), to_move);

            let child = self.search(&child_board, depth - 1, to_move.other(), Some(mv));

            // Strict comparison: the first move seen keeps ties.
            let improves = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if improves || best.best_move.is_none() {
                best = TreeNode {
                    best_move: Some(mv),
                    score: child.score,
                };
            }
        }

        best
    }
}

/// Runs minimax to `depth` plies with `side_to_move` as the maximizer.
pub fn minimax(board: &Board, depth: u32, side_to_move: Side) -> TreeNode {
    Minimax::new(side_to_move).search(board, depth, side_to_move, None)
}

/// Runs minimax and reports node count and elapsed time alongside the result.
pub fn search(board: &Board, depth: u32, side_to_move: Side) -> SearchResult {
    let start = Instant::now();
    let mut searcher = Minimax::new(side_to_move);
    let node = searcher.search(board, depth, side_to_move, None);

    SearchResult {
        node,
        info: SearchInfo {
            depth,
            nodes: searcher.nodes,
            score: node.score,
            elapsed_ms: start.elapsed().as_millis() as u64,
        },
    }
}
