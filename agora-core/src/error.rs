//! Error types for agora.

use thiserror::Error;

/// Errors that can occur while loading configuration or event snapshots.
///
/// Problems with individual events (bad times, inverted ranges) are not
/// errors; the detector reports them as [`crate::conflict::DetectionWarning`]s.
#[derive(Error, Debug)]
pub enum AgoraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid conflict thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Event snapshot error: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for agora operations.
pub type AgoraResult<T> = Result<T, AgoraError>;
