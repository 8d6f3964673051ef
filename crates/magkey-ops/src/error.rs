//! Error types for magkey operations.

use thiserror::Error;

/// Error type for magkey operations.
///
/// The per-pixel kernel itself never fails; these cover full-image passes
/// and parameter configuration.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Buffers have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Parameter configuration could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image buffer error.
    #[error(transparent)]
    Core(#[from] magkey_core::Error),
}

/// Result type for magkey operations.
pub type OpsResult<T> = Result<T, OpsError>;
