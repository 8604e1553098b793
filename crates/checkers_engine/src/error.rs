//! Error types for the checkers engine
//!
//! Two tiers are kept apart:
//! - [`CheckersError`] covers configuration and programmer errors. These are
//!   returned as `Err` and callers are expected to bail.
//! - [`IllegalMove`] describes why a requested move breaks the rules. The engine
//!   never mutates state when it produces one, and callers are expected to ask
//!   for another move.

use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::player::PlayerId;

/// Errors that can occur when configuring or driving the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// A player that is not registered with this game was supplied
    #[error("Player {id} is not registered with this game")]
    UnknownPlayer { id: PlayerId },

    /// Both seats were given the same player identity
    #[error("Both players share the identity {id}")]
    DuplicatePlayer { id: PlayerId },

    /// Engine configuration is inconsistent
    #[error("Invalid engine configuration: {message}")]
    InvalidConfig { message: String },

    /// Piece placement on an occupied or light square
    #[error("Coordinate ({x}, {y}) is not habitable")]
    NotHabitable { x: i32, y: i32 },

    /// No piece at the given coordinate
    #[error("No piece at coordinate ({x}, {y})")]
    NoPieceAt { x: i32, y: i32 },
}

impl CheckersError {
    pub(crate) fn not_habitable(coord: Coordinate) -> Self {
        Self::NotHabitable {
            x: coord.x,
            y: coord.y,
        }
    }

    pub(crate) fn no_piece_at(coord: Coordinate) -> Self {
        Self::NoPieceAt {
            x: coord.x,
            y: coord.y,
        }
    }
}

/// Reasons a move is rejected, in the order the rules are checked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// Origin and destination share a row or column
    #[error("Move from {from} to {to} stays on the same row or column")]
    NotDiagonalStep { from: Coordinate, to: Coordinate },

    /// Nothing stands on the origin square
    #[error("No piece at {from}")]
    NoPiece { from: Coordinate },

    /// The piece belongs to the player who is not on turn
    #[error("Piece at {from} does not belong to the current player")]
    NotYourPiece { from: Coordinate },

    /// Destination lies off the board
    #[error("Destination {to} is off the board")]
    OutOfBounds { to: Coordinate },

    /// Destination is occupied or a light square
    #[error("Destination {to} is not habitable")]
    DestinationBlocked { to: Coordinate },

    /// Regular piece moving back toward its own side
    #[error("Regular piece cannot move backwards from {from} to {to}")]
    WrongDirection { from: Coordinate, to: Coordinate },

    /// More than one piece lies between origin and destination
    #[error("Path from {from} to {to} crosses {occupied} occupied squares")]
    TooManyPieces {
        from: Coordinate,
        to: Coordinate,
        occupied: usize,
    },

    /// The piece in the path belongs to the mover
    #[error("Cannot capture own piece at {at}")]
    SelfCapture { at: Coordinate },

    /// Axis deltas differ
    #[error("Move from {from} to {to} is not a diagonal")]
    NotDiagonal { from: Coordinate, to: Coordinate },

    /// Move exceeds the piece's reach
    #[error("Move of {distance} steps exceeds max step {max_step}")]
    TooFar { distance: u32, max_step: u32 },
}

/// Errors produced when parsing a [`Coordinate`] from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordinateError {
    #[error("Expected `x,y` but got `{0}`")]
    MissingSeparator(String),

    #[error("Invalid coordinate axis `{0}`")]
    InvalidAxis(String),
}

/// Result type alias for engine operations
pub type CheckersResult<T> = Result<T, CheckersError>;

/// Result type alias for move checks
pub type MoveResult<T> = Result<T, IllegalMove>;
