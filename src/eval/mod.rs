//! Position evaluation.
//!
//! Scores a board from a given side's perspective, considering mobility,
//! corner structure, and (near the end of the game) the stone count.

pub(crate) mod heuristic;

pub use heuristic::{
    evaluate, mobility_term, weight_table, ENDGAME_OCCUPANCY, WIPEOUT_SCORE,
};
