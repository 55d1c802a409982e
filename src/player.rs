//! Player state management.
//!
//! Holds the long-lived board for one side, applies the opponent's moves,
//! and runs search to choose its own. Every board the search touches is a
//! private copy; only the player mutates the board it owns.

use crate::board::{Board, Move, MoveError, Side};
use crate::config::{ConfigError, EngineConfig};
use crate::protocol::layout::{parse_layout, LayoutError};
use crate::protocol::notation::format_move;
use crate::search::search;

/// An engine playing one side of a game.
#[derive(Debug, Clone)]
pub struct Player {
    side: Side,
    opponent_side: Side,
    board: Board,
    config: EngineConfig,
}

impl Player {
    /// Creates a player for `side` on the starting board with default settings.
    pub fn new(side: Side) -> Self {
        Player {
            side,
            opponent_side: side.other(),
            board: Board::new(),
            config: EngineConfig::default(),
        }
    }

    /// Creates a player with explicit settings.
    pub fn with_config(side: Side, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Player {
            config,
            ..Player::new(side)
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn opponent_side(&self) -> Side {
        self.opponent_side
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Sets an engine option; see [`EngineConfig::set_option`].
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        self.config.set_option(name, value)
    }

    /// Resets the board to the starting position, keeping the settings.
    pub fn new_game(&mut self) {
        self.board = Board::new();
    }

    /// Replaces the board from a layout string. Intended for test fixtures.
    pub fn set_board(&mut self, layout: &str) -> Result<(), LayoutError> {
        self.board = parse_layout(layout)?;
        Ok(())
    }

    /// Applies the opponent's move. A pass (or the first-move marker) is a
    /// no-op; an illegal move is rejected and the board is left as it was.
    pub fn receive_opponent_move(&mut self, mv: Option<Move>) -> Result<(), MoveError> {
        if let Err(e) = self.board.try_apply_move(mv, self.opponent_side) {
            log::warn!("rejected opponent move: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Chooses a move for this side, plays it on the held board, and
    /// returns it. Returns None (a pass) without searching when no placement
    /// exists.
    pub fn choose_move(&mut self) -> Option<Move> {
        if !self.board.has_legal_moves(self.side) {
            log::debug!("{:?} has no legal move, passing", self.side);
            return None;
        }

        let result = search(&self.board, self.config.depth, self.side);
        let mv = result.node.best_move;
        log::debug!("{} bestmove {}", result.info, format_move(mv));

        self.board.apply_move(mv, self.side);
        mv
    }

    /// Handles one turn: applies the opponent's last move (None if they
    /// passed or this is the first move of the game) and returns this
    /// side's reply, or None for a pass.
    pub fn do_move(&mut self, opponents_move: Option<Move>) -> Result<Option<Move>, MoveError> {
        self.receive_opponent_move(opponents_move)?;
        Ok(self.choose_move())
    }
}
