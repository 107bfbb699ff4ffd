//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの送信キュー（`PusherChannel`）を管理
//! - イベントを JSON フレームにエンコードして送信（push_to, broadcast）
//! - キューが溢れた接続・閉じた接続を配送対象から外す
//!
//! WebSocket の受付と writer タスクの起動は UI 層（`ui/handler/websocket.rs`）で行う。
//! 外された接続の sender はここで drop されるので、writer タスクは残りを送り切ったあと終了する。

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc::error::TrySendError;

use crate::{
    domain::{ChatEvent, ConnectionId, MessagePushError, MessagePusher, PusherChannel},
    infrastructure::codec,
};

/// WebSocket を使った MessagePusher 実装
///
/// 送信は `try_send` による enqueue のみで、await を挟まない。
/// 実際のソケット書き込みは接続ごとの writer タスクが行う。
#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// Key: ConnectionId, Value: 書き込みタスクへのチャネル
    connections: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self::default()
    }
}

fn encode(event: &ChatEvent) -> Result<String, MessagePushError> {
    codec::encode(event).map_err(|e| MessagePushError::PushFailed(e.to_string()))
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register(&self, connection_id: ConnectionId, sender: PusherChannel) {
        self.connections.lock().insert(connection_id, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    async fn unregister(&self, connection_id: ConnectionId) {
        self.connections.lock().remove(&connection_id);
        tracing::debug!(
            "Connection '{}' unregistered from MessagePusher",
            connection_id
        );
    }

    async fn push_to(
        &self,
        connection_id: ConnectionId,
        event: &ChatEvent,
    ) -> Result<(), MessagePushError> {
        let frame = encode(event)?;
        let mut connections = self.connections.lock();

        let sender = connections
            .get(&connection_id)
            .ok_or_else(|| MessagePushError::ConnectionNotFound(connection_id.to_string()))?;

        match sender.try_send(frame) {
            Ok(()) => {
                tracing::debug!("Pushed '{}' to connection '{}'", event.kind(), connection_id);
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                connections.remove(&connection_id);
                tracing::warn!(
                    "Outbound queue of connection '{}' is full, evicted",
                    connection_id
                );
                Err(MessagePushError::QueueFull(connection_id.to_string()))
            }
            Err(TrySendError::Closed(_)) => {
                connections.remove(&connection_id);
                Err(MessagePushError::PushFailed(format!(
                    "connection '{}' is closed",
                    connection_id
                )))
            }
        }
    }

    async fn broadcast(&self, event: &ChatEvent) -> Result<usize, MessagePushError> {
        // 一度だけエンコードして全接続で共有
        let frame = encode(event)?;
        let mut connections = self.connections.lock();
        let total = connections.len();

        // ブロードキャストでは一部の送信失敗を許容し、失敗した接続は外す
        let mut delivered = 0;
        connections.retain(|connection_id, sender| match sender.try_send(frame.clone()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(TrySendError::Full(_)) => {
                tracing::warn!(
                    "Outbound queue of connection '{}' is full, evicted before '{}'",
                    connection_id,
                    event.kind()
                );
                false
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!(
                    "Connection '{}' is closed, dropped '{}'",
                    connection_id,
                    event.kind()
                );
                false
            }
        });

        tracing::debug!(
            "Broadcasted '{}' to {}/{} connections",
            event.kind(),
            delivered,
            total
        );
        Ok(delivered)
    }
}
