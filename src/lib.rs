//! Flipside Othello engine library.
//!
//! Exposes the board representation, move generation, evaluation, search,
//! and the player that ties them together for one side of a game.

pub mod board;
pub mod config;
pub mod eval;
pub mod movegen;
pub mod player;
pub mod protocol;
pub mod search;

pub use board::{Board, Move, MoveError, Side};
pub use config::{ConfigError, EngineConfig};
pub use player::Player;
pub use search::{minimax, TreeNode};
