//! Error types for the chat client.

use thiserror::Error;
use yoriai_server::domain::ValueObjectError;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Display name rejected locally, before connecting
    #[error("Invalid display name: {0}")]
    InvalidName(#[from] ValueObjectError),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
}
