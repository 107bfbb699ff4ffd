//! Inbound requests and outbound events, independent of the wire format.

use super::{
    entity::ChatMessage,
    value_object::{DisplayName, MessageId, MessageText, Timestamp},
};

/// A single inbound client request
///
/// Field values are raw client input; the broadcast engine validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Join { username: String },
    Post { text: String },
    Edit { message_id: String, new_text: String },
    Delete { message_id: String },
}

impl Envelope {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Post { .. } => "post",
            Self::Edit { .. } => "edit",
            Self::Delete { .. } => "delete",
        }
    }
}

/// A single outbound notification produced by an applied mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Joined {
        name: DisplayName,
        at: Timestamp,
    },
    Left {
        name: DisplayName,
        at: Timestamp,
    },
    Posted(ChatMessage),
    Edited {
        message_id: MessageId,
        author: DisplayName,
        new_text: MessageText,
        edited_at: Timestamp,
    },
    Deleted {
        message_id: MessageId,
        author: DisplayName,
    },
}

impl ChatEvent {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Joined { .. } => "joined",
            Self::Left { .. } => "left",
            Self::Posted(_) => "posted",
            Self::Edited { .. } => "edited",
            Self::Deleted { .. } => "deleted",
        }
    }
}
