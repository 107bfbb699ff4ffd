//! Conversion logic between DTOs and domain types.

use yoriai_shared::time::timestamp_to_rfc3339;

use crate::domain::{ChatEvent, ChatMessage, Envelope, Participant};
use crate::infrastructure::dto::{http::ParticipantDto, websocket as dto};

// ========================================
// DTO → Domain
// ========================================

impl From<dto::ClientEnvelope> for Envelope {
    fn from(dto: dto::ClientEnvelope) -> Self {
        match dto {
            dto::ClientEnvelope::Join { username } => Self::Join { username },
            dto::ClientEnvelope::Message { text } => Self::Post { text },
            dto::ClientEnvelope::Edit {
                message_id,
                new_text,
            } => Self::Edit {
                message_id,
                new_text,
            },
            dto::ClientEnvelope::Delete { message_id } => Self::Delete { message_id },
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&ChatMessage> for dto::ServerEvent {
    fn from(message: &ChatMessage) -> Self {
        Self::Message {
            id: message.id().as_str().to_string(),
            username: message.author().as_str().to_string(),
            text: message.text().as_str().to_string(),
            timestamp: timestamp_to_rfc3339(message.created_at().value()),
            edited: message.is_edited(),
            edit_timestamp: message
                .edited_at()
                .map(|edited_at| timestamp_to_rfc3339(edited_at.value())),
        }
    }
}

impl From<&ChatEvent> for dto::ServerEvent {
    fn from(event: &ChatEvent) -> Self {
        match event {
            ChatEvent::Joined { name, at } => Self::System {
                text: format!("{} has joined the chat", name),
                timestamp: timestamp_to_rfc3339(at.value()),
            },
            ChatEvent::Left { name, at } => Self::System {
                text: format!("{} has left the chat", name),
                timestamp: timestamp_to_rfc3339(at.value()),
            },
            ChatEvent::Posted(message) => message.into(),
            ChatEvent::Edited {
                message_id,
                author,
                new_text,
                edited_at,
            } => Self::Edit {
                message_id: message_id.as_str().to_string(),
                new_text: new_text.as_str().to_string(),
                username: author.as_str().to_string(),
                edit_timestamp: timestamp_to_rfc3339(edited_at.value()),
            },
            ChatEvent::Deleted { message_id, author } => Self::Delete {
                message_id: message_id.as_str().to_string(),
                username: author.as_str().to_string(),
            },
        }
    }
}

impl From<&Participant> for ParticipantDto {
    fn from(participant: &Participant) -> Self {
        Self {
            username: participant.name.as_str().to_string(),
            joined_at: timestamp_to_rfc3339(participant.joined_at.value()),
        }
    }
}
