//! Public API for the checkers engine
//!
//! All operations are methods on [`Checkers`](crate::types::Checkers), split by concern.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new, init) and counted board mutations
//! - `moves` - Move validation and execution (check_move, move_piece)
//! - `state` - Game state queries (board, current_player, is_game_won)

mod game;
mod moves;
mod state;
