//! User-facing settings

use checkers_engine::{Checkers, CheckersResult, EngineConfig, Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Who makes the first move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstTurn {
    #[default]
    Random,
    PlayerOne,
    PlayerTwo,
}

/// Settings that shape a new game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Display name of the first seat
    pub player_one: String,

    /// Display name of the second seat
    pub player_two: String,

    /// Who moves first
    pub first_turn: FirstTurn,

    /// List legal destinations after a rejected move
    pub show_hints: bool,

    /// Board geometry
    pub engine: EngineConfig,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_one: "first".to_string(),
            player_two: "second".to_string(),
            first_turn: FirstTurn::Random,
            show_hints: true,
            engine: EngineConfig::default(),
        }
    }
}

impl GameSettings {
    /// Build and initialize a game from these settings
    pub fn new_game(&self) -> CheckersResult<Checkers> {
        let one = Player::new(self.player_one.clone());
        let two = Player::new(self.player_two.clone());
        let first = self.first_turn_id(&one, &two);

        let mut game = Checkers::with_config(one, two, self.engine)?;
        game.init(first)?;
        Ok(game)
    }

    fn first_turn_id(&self, one: &Player, two: &Player) -> Option<PlayerId> {
        match self.first_turn {
            FirstTurn::Random => None,
            FirstTurn::PlayerOne => Some(one.id()),
            FirstTurn::PlayerTwo => Some(two.id()),
        }
    }
}
