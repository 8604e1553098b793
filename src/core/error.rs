//! Error types for core module
//!
//! Provides custom error types for core functionality including settings
//! persistence, engine setup and the text session.

use checkers_engine::CheckersError;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file or terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Engine rejected the configuration
    #[error("Engine setup failed: {0}")]
    Engine(#[from] CheckersError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
