//! Domain layer for the chat server.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod message_store;
pub mod registry;
pub mod value_object;

pub use entity::{ChatMessage, Participant};
pub use error::{MessagePushError, RegistryError, StoreError, ValueObjectError};
pub use event::{ChatEvent, Envelope};
pub use message_pusher::{
    MessagePusher, OUTBOUND_QUEUE_CAPACITY, PusherChannel, PusherReceiver, outbound_channel,
};
pub use message_store::MessageStore;
pub use registry::ParticipantRegistry;
pub use value_object::{ConnectionId, DisplayName, MessageId, MessageText, Timestamp};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
