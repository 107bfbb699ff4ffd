//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::ServerEvent;

/// Live participant in the chat snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub username: String,
    pub joined_at: String,
}

/// Snapshot of the chat returned by `GET /api/chat`
///
/// `messages` holds `message` events in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSnapshotDto {
    pub participants: Vec<ParticipantDto>,
    pub messages: Vec<ServerEvent>,
}
