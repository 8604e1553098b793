//! Board geometry and setup constants
//!
//! The standard game is played on an 8x8 board with twelve pieces per side,
//! which fills three rows of four dark squares for each player.

/// Side length of the standard board
pub const BOARD_SIZE: i32 = 8;

/// Pieces each player starts with on the standard board
pub const MAX_PAWNS_PER_PLAYER: u32 = 12;

/// Step limit of a regular piece
pub const REGULAR_MAX_STEP: u32 = 1;

/// Most pieces a single move path may contain: the mover plus one captured piece
pub const MAX_PATH_OCCUPANTS: usize = 2;
