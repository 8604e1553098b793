//! Thread-safe handle around one game
//!
//! The engine assumes one call at a time. [`SharedCheckers`] takes a single
//! lock around each call so a game can be driven from several threads.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::coordinate::Coordinate;
use crate::error::{CheckersResult, MoveResult};
use crate::player::PlayerId;
use crate::types::{Checkers, MoveReport};

#[derive(Debug, Clone)]
pub struct SharedCheckers {
    inner: Arc<Mutex<Checkers>>,
}

impl SharedCheckers {
    pub fn new(game: Checkers) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    pub fn init(&self, first_turn: Option<PlayerId>) -> CheckersResult<()> {
        self.inner.lock().init(first_turn)
    }

    pub fn move_piece(&self, from: Coordinate, to: Coordinate) -> bool {
        self.inner.lock().move_piece(from, to)
    }

    pub fn try_move(&self, from: Coordinate, to: Coordinate) -> MoveResult<MoveReport> {
        self.inner.lock().try_move(from, to)
    }

    /// Run a read-only query under the lock
    pub fn with<T>(&self, f: impl FnOnce(&Checkers) -> T) -> T {
        f(&*self.inner.lock())
    }
}
