//! Core module - configuration and error plumbing for the XFCheckers binary
//!
//! - [`GameSettings`] - user preferences: player names, who starts, board geometry
//! - [`settings_persistence`] - load/save of `settings.json`
//! - [`CoreError`] - errors surfaced by this layer

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::{FirstTurn, GameSettings};
pub use settings_persistence::{load_settings, read_settings, save_settings, settings_path};
