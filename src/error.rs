//! Unified error types for the health service.

use thiserror::Error;

/// Unified error type for the health service.
#[derive(Error, Debug)]
pub enum HealthError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// WebSocket send/receive error.
    #[error("channel error: {0}")]
    Channel(#[from] axum::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, HealthError>;
