//! Game state queries

use crate::board::Board;
use crate::config::EngineConfig;
use crate::player::{Player, PlayerId};
use crate::types::{Checkers, GameStatus, Orientation};

impl Checkers {
    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board_size(&self) -> i32 {
        self.config.board_size
    }

    pub fn max_pawns_per_player(&self) -> u32 {
        self.config.max_pawns_per_player
    }

    pub fn player_one(&self) -> &Player {
        &self.player_one
    }

    pub fn player_two(&self) -> &Player {
        &self.player_two
    }

    /// Registered player with the given identity
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.seat_of(id).map(|seat| self.seat(seat))
    }

    /// Player whose move it is
    pub fn current_player(&self) -> &Player {
        if self.current_player_turn == self.player_one.id() {
            &self.player_one
        } else {
            &self.player_two
        }
    }

    /// Player who moved first in this game
    pub fn first_turn_player(&self) -> &Player {
        if self.first_turn_player == self.player_one.id() {
            &self.player_one
        } else {
            &self.player_two
        }
    }

    /// Travel direction and promotion row of a registered player
    pub fn orientation(&self, id: PlayerId) -> Option<Orientation> {
        self.seat_of(id).map(|seat| self.seat_orientation(seat))
    }

    /// Check if either player has run out of pieces
    ///
    /// The engine keeps accepting moves afterwards; callers stop the game.
    pub fn is_game_won(&self) -> bool {
        self.player_one.pawn_count() == 0 || self.player_two.pawn_count() == 0
    }

    /// The player still holding pieces once the other has none
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status() {
            GameStatus::Won { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        match (self.player_one.pawn_count(), self.player_two.pawn_count()) {
            (0, 0) => GameStatus::NoPieces,
            (0, _) => GameStatus::Won {
                winner: self.player_two.id(),
            },
            (_, 0) => GameStatus::Won {
                winner: self.player_one.id(),
            },
            _ => GameStatus::InProgress,
        }
    }

    /// The opponent of a registered player
    pub fn opponent_of(&self, id: PlayerId) -> Option<&Player> {
        self.seat_of(id).map(|seat| self.seat(seat.other()))
    }
}
