//! Message formatting utilities for client display.

use yoriai_server::infrastructure::dto::websocket::ServerEvent;
use yoriai_shared::time::{rfc3339_to_timestamp, timestamp_to_clock_label};

/// Message formatter for client display
pub struct MessageFormatter;

/// `HH:MM:SS` for a wire timestamp, or the raw string if it cannot be parsed
fn clock_label(timestamp: &str) -> String {
    rfc3339_to_timestamp(timestamp)
        .map(timestamp_to_clock_label)
        .unwrap_or_else(|| timestamp.to_string())
}

impl MessageFormatter {
    /// Format any event received from the server
    pub fn format_event(event: &ServerEvent) -> String {
        match event {
            ServerEvent::System { text, timestamp } => Self::format_system(text, timestamp),
            ServerEvent::Message {
                id,
                username,
                text,
                timestamp,
                edited,
                ..
            } => Self::format_message(id, username, text, timestamp, *edited),
            ServerEvent::Edit {
                message_id,
                new_text,
                username,
                edit_timestamp,
            } => Self::format_edit(message_id, username, new_text, edit_timestamp),
            ServerEvent::Delete {
                message_id,
                username,
            } => Self::format_delete(message_id, username),
        }
    }

    /// Format a join/leave notice
    pub fn format_system(text: &str, timestamp: &str) -> String {
        format!("\n* [{}] {}\n", clock_label(timestamp), text)
    }

    /// Format a chat message
    ///
    /// The id is shown so that the author can `/edit` or `/delete` it.
    pub fn format_message(
        id: &str,
        username: &str,
        text: &str,
        timestamp: &str,
        edited: bool,
    ) -> String {
        let edited_suffix = if edited { " (edited)" } else { "" };
        format!(
            "\n[{}] @{}: {}{}\n    id: {}\n",
            clock_label(timestamp),
            username,
            text,
            edited_suffix,
            id
        )
    }

    /// Format an edit notification
    pub fn format_edit(message_id: &str, username: &str, new_text: &str, timestamp: &str) -> String {
        format!(
            "\n~ [{}] @{} edited {}: {}\n",
            clock_label(timestamp),
            username,
            message_id,
            new_text
        )
    }

    /// Format a delete notification
    pub fn format_delete(message_id: &str, username: &str) -> String {
        format!("\n- @{} deleted {}\n", username, message_id)
    }

    /// Format a raw text frame (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}
