//! Core engine types
//!
//! [`Checkers`] is the complete state of one game: both players, whose turn it
//! is, who moved first and the board. Each instance is independent; there is
//! no global state.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::player::{Player, PlayerId};

/// Direction of travel and promotion row for one player
///
/// Fixed at `init` from the first-turn player: that player advances toward
/// higher rows and promotes on the last row, the other advances toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orientation {
    /// `+1` when regular pieces advance toward higher rows, `-1` otherwise
    pub forward: i32,
    /// Row on which a regular piece becomes a queen
    pub promotion_row: i32,
}

impl Orientation {
    pub(crate) fn leading(board_size: i32) -> Self {
        Self {
            forward: 1,
            promotion_row: board_size - 1,
        }
    }

    pub(crate) fn trailing() -> Self {
        Self {
            forward: -1,
            promotion_row: 0,
        }
    }

    /// Check a regular piece may travel from `from` to `to`
    #[inline]
    pub fn allows(&self, from: Coordinate, to: Coordinate) -> bool {
        if self.forward > 0 {
            to.x >= from.x
        } else {
            to.x <= from.x
        }
    }
}

/// Which of the two registered players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Seat {
    One,
    Two,
}

impl Seat {
    pub(crate) fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// Outcome of an applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub from: Coordinate,
    pub to: Coordinate,
    /// Square and piece removed by the move
    pub captured: Option<(Coordinate, Piece)>,
    /// A regular piece became a queen on this move
    pub promoted: bool,
}

/// Game progress as seen from piece counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: PlayerId },
    /// Neither side has pieces, e.g. before `init`
    NoPieces,
}

/// Central game state for one checkers match
#[derive(Debug, Clone)]
pub struct Checkers {
    pub(crate) player_one: Player,
    pub(crate) player_two: Player,
    pub(crate) current_player_turn: PlayerId,
    pub(crate) first_turn_player: PlayerId,
    pub(crate) config: EngineConfig,
    pub(crate) orientation_one: Orientation,
    pub(crate) orientation_two: Orientation,
    pub(crate) board: Board,
}

impl Checkers {
    pub(crate) fn seat_of(&self, id: PlayerId) -> Option<Seat> {
        if id == self.player_one.id() {
            Some(Seat::One)
        } else if id == self.player_two.id() {
            Some(Seat::Two)
        } else {
            None
        }
    }

    pub(crate) fn seat(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player_one,
            Seat::Two => &self.player_two,
        }
    }

    pub(crate) fn seat_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::One => &mut self.player_one,
            Seat::Two => &mut self.player_two,
        }
    }

    pub(crate) fn seat_orientation(&self, seat: Seat) -> Orientation {
        match seat {
            Seat::One => self.orientation_one,
            Seat::Two => self.orientation_two,
        }
    }
}
