//! Error types for the game engine.

use thiserror::Error;

/// Everything that can go wrong before a session is running.
///
/// Once a session has started its data is validated and in memory, so
/// selections and timer callbacks never fail; they are ignored instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Card data could not be retrieved or parsed.
    #[error("Card data source error: {0}")]
    DataSource(String),

    /// Card data was readable but empty or malformed.
    #[error("Invalid card definitions: {0}")]
    InvalidInput(String),

    /// Game configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Restart requested before any definitions were loaded.
    #[error("No card definitions loaded; call start first")]
    NotStarted,

    /// Session state could not be serialized for the host.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::DataSource(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
