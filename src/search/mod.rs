//! Search and move selection.
//!
//! Explores the game tree to a fixed depth with plain minimax, scoring
//! leaves with the heuristic evaluator.

pub mod minimax;

pub use minimax::{minimax, search, SearchInfo, SearchResult, TreeNode};
