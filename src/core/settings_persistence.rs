//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory, or a path given on
//! the command line.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: unreadable or invalid files fall back to the
//! defaults with a warning. [`read_settings`] and [`save_settings`] report
//! errors to the caller.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::error::CoreResult;
use super::resources::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
///
/// Falls back to a local `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "XFCheckers") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse a settings file
pub fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load settings, falling back to defaults
pub fn load_settings(path: Option<&Path>) -> GameSettings {
    let default_path = settings_path();
    let settings_path = path.unwrap_or(default_path.as_path());

    if !settings_path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", settings_path);
        return GameSettings::default();
    }

    match read_settings(settings_path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", settings_path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                settings_path, e
            );
            GameSettings::default()
        }
    }
}

/// Write settings as pretty JSON, creating parent directories as needed
pub fn save_settings(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
