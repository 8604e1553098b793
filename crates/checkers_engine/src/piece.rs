//! Pieces and their movement roles

use serde::{Deserialize, Serialize};

use crate::constants::REGULAR_MAX_STEP;
use crate::player::PlayerId;

/// Movement role of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// Starting piece: one step, forward only
    #[default]
    Regular,
    /// Promoted piece: any distance, either direction
    Queen,
}

impl Role {
    /// Step limit granted by this role on a board of `board_size`
    pub fn max_step(self, board_size: i32) -> u32 {
        match self {
            Role::Regular => REGULAR_MAX_STEP,
            Role::Queen => board_size.max(0) as u32,
        }
    }
}

/// A piece on the board
///
/// Holds its owner's [`PlayerId`] rather than the player itself; the engine
/// owns the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    owner: PlayerId,
    role: Role,
    max_step: u32,
}

impl Piece {
    /// New regular piece for `owner`
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            role: Role::Regular,
            max_step: REGULAR_MAX_STEP,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.owner
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn max_step(&self) -> u32 {
        self.max_step
    }

    pub fn is_queen(&self) -> bool {
        self.role == Role::Queen
    }

    /// Upgrade to a queen. Promoting a queen again changes nothing.
    pub(crate) fn promote(&mut self, board_size: i32) {
        self.role = Role::Queen;
        self.max_step = Role::Queen.max_step(board_size);
    }
}
