//! JSON codec for the chat wire protocol.
//!
//! Stateless: `decode` turns one inbound frame into a domain [`Envelope`],
//! `encode` turns one domain [`ChatEvent`] into an outbound frame.

use thiserror::Error;

use crate::domain::{ChatEvent, Envelope};

use super::dto::websocket::{ClientEnvelope, ServerEvent};

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// Not a JSON object, no/unknown `type`, or a required field is missing
    #[error("malformed envelope: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to encode event: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Decode one inbound frame.
pub fn decode(bytes: &[u8]) -> Result<Envelope, CodecError> {
    serde_json::from_slice::<ClientEnvelope>(bytes)
        .map(Envelope::from)
        .map_err(CodecError::Malformed)
}

/// Encode one outbound event.
pub fn encode(event: &ChatEvent) -> Result<String, CodecError> {
    serde_json::to_string(&ServerEvent::from(event)).map_err(CodecError::Encode)
}
