//! Players and their identities
//!
//! Players are compared by [`PlayerId`], a random token minted in
//! [`Player::new`]. Two players with the same name are still distinct.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable identity of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant and the number of their pieces still on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    pawn_count: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::generate(),
            name: name.into(),
            pawn_count: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Live pieces owned by this player
    pub fn pawn_count(&self) -> u32 {
        self.pawn_count
    }

    pub(crate) fn increase_pawn_count(&mut self) {
        self.pawn_count += 1;
    }

    pub(crate) fn decrease_pawn_count(&mut self) {
        self.pawn_count = self.pawn_count.saturating_sub(1);
    }

    pub(crate) fn reset_pawn_count(&mut self) {
        self.pawn_count = 0;
    }
}
