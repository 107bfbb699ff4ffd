//! UseCase layer errors.

use thiserror::Error;

use crate::domain::{RegistryError, StoreError, ValueObjectError};

/// Reasons the broadcast engine rejects an envelope
///
/// Every rejection is scoped to the requesting connection: nothing is
/// broadcast and the connection stays open.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// post/edit/delete from a connection that has not joined
    #[error("connection has not joined the chat")]
    NotIdentified,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
