//! Text formats for boards and moves.
//!
//! Implements the layout notation used to set up fixture positions and the
//! algebraic notation for single moves.

pub mod layout;
pub mod notation;

pub use layout::{encode_layout, parse_layout, LayoutError};
pub use notation::{format_move, parse_move, NotationError};
