//! Message store
//!
//! Keeps posted messages in insertion order.
//! Only the author (matched by display name) may edit or delete a message.

use std::collections::{BTreeMap, HashMap};

use super::{
    entity::ChatMessage,
    error::StoreError,
    value_object::{DisplayName, MessageId, MessageText, Timestamp},
};

/// Ordered, in-memory collection of chat messages
#[derive(Debug, Default)]
pub struct MessageStore {
    /// Messages keyed by creation sequence (insertion order)
    messages: BTreeMap<u64, ChatMessage>,
    /// Lookup from message id to creation sequence
    index: HashMap<MessageId, u64>,
    /// Next sequence number; never reused, even after deletion
    next_sequence: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new message authored by `author` and return the stored message.
    pub fn create(
        &mut self,
        author: DisplayName,
        text: MessageText,
        now: Timestamp,
    ) -> &ChatMessage {
        self.next_sequence += 1;
        let sequence = self.next_sequence;
        let id = MessageId::generate(now, sequence);

        self.index.insert(id.clone(), sequence);
        self.messages
            .entry(sequence)
            .or_insert(ChatMessage::new(id, author, text, now))
    }

    /// Replace the text of message `id` on behalf of `requester`.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no message with `id` exists
    /// * `StoreError::NotAuthor` - `requester` did not author the message
    pub fn edit(
        &mut self,
        id: &MessageId,
        requester: &DisplayName,
        new_text: MessageText,
        now: Timestamp,
    ) -> Result<&ChatMessage, StoreError> {
        let sequence = self.authorize(id, requester)?;
        let message = self
            .messages
            .get_mut(&sequence)
            .ok_or_else(|| StoreError::NotFound(id.as_str().to_string()))?;

        message.apply_edit(new_text, now);
        Ok(message)
    }

    /// Remove message `id` on behalf of `requester` and return it.
    ///
    /// # Errors
    ///
    /// Same as [`MessageStore::edit`].
    pub fn remove(
        &mut self,
        id: &MessageId,
        requester: &DisplayName,
    ) -> Result<ChatMessage, StoreError> {
        let sequence = self.authorize(id, requester)?;
        self.index.remove(id);
        self.messages
            .remove(&sequence)
            .ok_or_else(|| StoreError::NotFound(id.as_str().to_string()))
    }

    pub fn get(&self, id: &MessageId) -> Option<&ChatMessage> {
        self.index
            .get(id)
            .and_then(|sequence| self.messages.get(sequence))
    }

    /// All messages in insertion order
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.values()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn authorize(&self, id: &MessageId, requester: &DisplayName) -> Result<u64, StoreError> {
        let sequence = *self
            .index
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.as_str().to_string()))?;
        let message = self
            .messages
            .get(&sequence)
            .ok_or_else(|| StoreError::NotFound(id.as_str().to_string()))?;

        if !message.is_authored_by(requester) {
            return Err(StoreError::NotAuthor {
                message_id: id.as_str().to_string(),
                requester: requester.as_str().to_string(),
            });
        }

        Ok(sequence)
    }
}
