//! Domain errors.

use thiserror::Error;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("display name must not be empty")]
    EmptyDisplayName,

    #[error("display name is too long ({actual} characters, max {max})")]
    DisplayNameTooLong { max: usize, actual: usize },

    #[error("message text must not be empty")]
    EmptyMessageText,

    #[error("message text is too long ({actual} characters, max {max})")]
    MessageTextTooLong { max: usize, actual: usize },
}

/// Participant registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("invalid display name: {0}")]
    InvalidName(#[from] ValueObjectError),

    #[error("display name '{0}' is already in use")]
    DuplicateName(String),

    #[error("connection is already registered as '{0}'")]
    AlreadyRegistered(String),
}

/// Message store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("message '{0}' not found")]
    NotFound(String),

    #[error("'{requester}' is not the author of message '{message_id}'")]
    NotAuthor {
        message_id: String,
        requester: String,
    },
}

/// Message push errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("connection '{0}' not found")]
    ConnectionNotFound(String),

    #[error("outbound queue of connection '{0}' is full")]
    QueueFull(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
