//! Rules engine for two-player checkers
//!
//! Board representation, turn management, move validation, capture
//! resolution and promotion. Rendering, networking and AI live elsewhere and
//! drive the engine through [`Checkers`].
//!
//! ```
//! use checkers_engine::{Checkers, Coordinate, Player};
//!
//! let one = Player::new("first");
//! let first = one.id();
//! let mut game = Checkers::new(one, Player::new("second")).unwrap();
//! game.init(Some(first)).unwrap();
//!
//! assert!(game.move_piece(Coordinate::new(2, 2), Coordinate::new(3, 3)));
//! assert_eq!(game.current_player().name(), "second");
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod constants;
pub mod coordinate;
pub mod error;
pub mod piece;
pub mod player;
pub mod shared;
pub mod types;

pub use board::Board;
pub use config::EngineConfig;
pub use coordinate::Coordinate;
pub use error::{CheckersError, CheckersResult, IllegalMove, MoveResult, ParseCoordinateError};
pub use piece::{Piece, Role};
pub use player::{Player, PlayerId};
pub use shared::SharedCheckers;
pub use types::{Checkers, GameStatus, MoveReport, Orientation};
