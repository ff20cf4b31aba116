use std::io;

/// Errors that can occur while loading build-step parameters
///
/// Requirement resolution and description never fail; these only surface
/// at the boundary where a parameter mapping is read from outside.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid parameter assignment '{0}': expected KEY=VALUE")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for unity-runner operations
pub type Result<T> = std::result::Result<T, Error>;
