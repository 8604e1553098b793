//! Engine configuration
//!
//! Board geometry and the number of starting pieces. Deserializable so the
//! host application can read it from its settings file.

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, MAX_PAWNS_PER_PLAYER};
use crate::error::{CheckersError, CheckersResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of the square board
    pub board_size: i32,
    /// Pieces each player starts with
    pub max_pawns_per_player: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            max_pawns_per_player: MAX_PAWNS_PER_PLAYER,
        }
    }
}

impl EngineConfig {
    /// Dark squares in every row
    pub fn pawns_per_row(&self) -> u32 {
        (self.board_size / 2).max(0) as u32
    }

    /// Rows filled by each player's setup
    pub fn rows_needed(&self) -> u32 {
        match self.pawns_per_row() {
            0 => 0,
            per_row => self.max_pawns_per_player / per_row,
        }
    }

    /// Check the configuration describes a playable starting position
    pub fn validate(&self) -> CheckersResult<()> {
        if self.board_size < 2 || self.board_size % 2 != 0 {
            return Err(CheckersError::InvalidConfig {
                message: format!("board size must be even and at least 2, got {}", self.board_size),
            });
        }

        if self.max_pawns_per_player == 0 {
            return Err(CheckersError::InvalidConfig {
                message: "each player needs at least one piece".to_string(),
            });
        }

        if self.max_pawns_per_player % self.pawns_per_row() != 0 {
            return Err(CheckersError::InvalidConfig {
                message: format!(
                    "{} pieces do not fill whole rows of {}",
                    self.max_pawns_per_player,
                    self.pawns_per_row()
                ),
            });
        }

        // Widened so huge piece counts cannot overflow the comparison
        if u64::from(self.rows_needed()) * 2 > self.board_size as u64 {
            return Err(CheckersError::InvalidConfig {
                message: format!(
                    "{} setup rows per player do not fit on a board of {}",
                    self.rows_needed(),
                    self.board_size
                ),
            });
        }

        Ok(())
    }
}
