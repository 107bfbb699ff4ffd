//! Entities
//!
//! Domain objects whose identity is defined by an identifier.

use super::value_object::{ConnectionId, DisplayName, MessageId, MessageText, Timestamp};

/// A connection that has successfully claimed a display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: DisplayName,
    pub connection_id: ConnectionId,
    pub joined_at: Timestamp,
}

impl Participant {
    pub fn new(name: DisplayName, connection_id: ConnectionId, joined_at: Timestamp) -> Self {
        Self {
            name,
            connection_id,
            joined_at,
        }
    }
}

/// A posted chat message
///
/// `id`, `author` and `created_at` never change after creation. `text` and
/// `edited_at` change only through [`ChatMessage::apply_edit`], which the
/// message store calls after the authorship check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    id: MessageId,
    author: DisplayName,
    text: MessageText,
    created_at: Timestamp,
    edited_at: Option<Timestamp>,
}

impl ChatMessage {
    pub fn new(
        id: MessageId,
        author: DisplayName,
        text: MessageText,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            author,
            text,
            created_at,
            edited_at: None,
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn author(&self) -> &DisplayName {
        &self.author
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Timestamp of the most recent edit, if any
    pub fn edited_at(&self) -> Option<Timestamp> {
        self.edited_at
    }

    pub fn is_edited(&self) -> bool {
        self.edited_at.is_some()
    }

    pub fn is_authored_by(&self, name: &DisplayName) -> bool {
        &self.author == name
    }

    pub(crate) fn apply_edit(&mut self, new_text: MessageText, edited_at: Timestamp) {
        self.text = new_text;
        self.edited_at = Some(edited_at);
    }
}
