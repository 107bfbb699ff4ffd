//! WebSocket message DTOs.
//!
//! Every frame is a JSON object whose `type` field selects the variant.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Inbound frame sent by a client
///
/// Unknown fields are ignored. In particular a `username` sent along with
/// `message`, `edit` or `delete` is never read: the author is always the
/// name bound to the connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ClientEnvelope {
    Join { username: String },
    Message { text: String },
    Edit { message_id: String, new_text: String },
    Delete { message_id: String },
}

/// Outbound frame sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// Join/leave notice
    System { text: String, timestamp: String },
    /// A posted message (live or replayed history)
    Message {
        id: String,
        username: String,
        text: String,
        timestamp: String,
        #[serde(default, skip_serializing_if = "is_false")]
        edited: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        edit_timestamp: Option<String>,
    },
    Edit {
        message_id: String,
        new_text: String,
        username: String,
        edit_timestamp: String,
    },
    Delete {
        message_id: String,
        username: String,
    },
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_edit_uses_camel_case_fields() {
        // テスト項目: edit フレームは messageId / newText のキーで読み取られる
        // given (前提条件):
        let raw = r#"{"type":"edit","messageId":"1-1","newText":"fixed"}"#;

        // when (操作):
        let envelope: ClientEnvelope = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        assert_eq!(
            envelope,
            ClientEnvelope::Edit {
                message_id: "1-1".to_string(),
                new_text: "fixed".to_string(),
            }
        );
    }

    #[test]
    fn test_client_message_ignores_asserted_username() {
        // テスト項目: message フレームに付いた username は無視される
        // given (前提条件):
        let raw = r#"{"type":"message","text":"hi","username":"someone-else"}"#;

        // when (操作):
        let envelope: ClientEnvelope = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        assert_eq!(
            envelope,
            ClientEnvelope::Message {
                text: "hi".to_string()
            }
        );
    }

    #[test]
    fn test_unedited_message_omits_edit_fields() {
        // テスト項目: 未編集メッセージは edited / editTimestamp を出力しない
        // given (前提条件):
        let event = ServerEvent::Message {
            id: "1-1".to_string(),
            username: "alice".to_string(),
            text: "hi".to_string(),
            timestamp: "2023-01-01T00:00:00.000Z".to_string(),
            edited: false,
            edit_timestamp: None,
        };

        // when (操作):
        let value = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({
                "type": "message",
                "id": "1-1",
                "username": "alice",
                "text": "hi",
                "timestamp": "2023-01-01T00:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_edited_message_includes_edit_fields() {
        // テスト項目: 編集済みメッセージは edited と editTimestamp を出力する
        // given (前提条件):
        let event = ServerEvent::Message {
            id: "1-1".to_string(),
            username: "alice".to_string(),
            text: "hi!".to_string(),
            timestamp: "2023-01-01T00:00:00.000Z".to_string(),
            edited: true,
            edit_timestamp: Some("2023-01-01T00:00:05.000Z".to_string()),
        };

        // when (操作):
        let value = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(value["edited"], json!(true));
        assert_eq!(value["editTimestamp"], json!("2023-01-01T00:00:05.000Z"));
    }

    #[test]
    fn test_server_delete_shape() {
        // テスト項目: delete イベントが type / messageId / username を持つ
        // given (前提条件):
        let event = ServerEvent::Delete {
            message_id: "1-1".to_string(),
            username: "alice".to_string(),
        };

        // when (操作):
        let value = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({"type": "delete", "messageId": "1-1", "username": "alice"})
        );
    }
}
