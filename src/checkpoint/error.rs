//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding, or resuming a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or bincode failed
    #[error("checkpoint serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or bincode failed
    #[error("checkpoint deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint does not fit the definition it is resumed against
    #[error("checkpoint rejected: {0}")]
    ValidationFailed(String),
}
