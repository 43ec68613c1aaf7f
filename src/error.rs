//! # Error Types
//!
//! Custom error types for PTZ Teleop using `thiserror`.

use thiserror::Error;

/// Main error type for PTZ Teleop
#[derive(Debug, Error)]
pub enum PtzTeleopError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Malformed input frame from the upstream device
    #[error("Malformed input frame: {0}")]
    Frame(String),

    /// Wire format errors on the outbound stream
    #[error("Wire format error: {0}")]
    Wire(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for PTZ Teleop
pub type Result<T> = std::result::Result<T, PtzTeleopError>;
