//! UseCase: ブロードキャストエンジン
//!
//! 各接続から届いた Envelope を参加者レジストリとメッセージストアに照らして検証し、
//! 適用できた変更をイベントとして全接続に配送する。
//!
//! ## 順序保証
//!
//! 状態の変更とイベントの enqueue は同じ `Mutex` の内側で行う。
//! そのため全接続が同じ順序でイベントを受け取り、変更が適用されていない
//! イベントが配送されることもない。enqueue はブロックしないので、
//! ロックを保持したままでも遅い接続が全体を止めることはない。
//! 送信キューが溢れた接続は配送対象から外され、通常の切断と同じ経路で後始末される。

use std::sync::Arc;

use tokio::sync::Mutex;
use yoriai_shared::time::Clock;

use crate::domain::{
    ChatEvent, ChatMessage, ConnectionId, Envelope, MessageId, MessagePusher, MessageStore,
    MessageText, Participant, ParticipantRegistry, PusherReceiver, Timestamp, outbound_channel,
};

use super::error::EngineError;

/// Registry と Store をまとめたエンジンの内部状態
#[derive(Debug, Default)]
struct ChatState {
    registry: ParticipantRegistry,
    store: MessageStore,
}

/// ある時点のチャット状態（読み取り専用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSnapshot {
    /// 参加中の参加者（表示名順）
    pub participants: Vec<Participant>,
    /// メッセージ（投稿順）
    pub messages: Vec<ChatMessage>,
}

/// セッションレジストリとメッセージ配送のエンジン
///
/// 状態はインスタンスごとに独立しており、1 プロセス内に複数のエンジンを共存させられる。
pub struct BroadcastEngine {
    state: Mutex<ChatState>,
    /// MessagePusher（メッセージ通知の抽象化）
    pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl BroadcastEngine {
    pub fn new(pusher: Arc<dyn MessagePusher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(ChatState::default()),
            pusher,
            clock,
        }
    }

    fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }

    /// 新しい接続の送信キューを作って配送対象に登録し、既存のメッセージ履歴をその接続だけに送る
    ///
    /// キューは履歴を積み切れる大きさで作るので、再送は溢れない。
    /// 返した受信側は接続の writer タスクが読み出す。
    pub async fn connect(&self, connection_id: ConnectionId) -> PusherReceiver {
        let state = self.state.lock().await;
        let (sender, receiver) = outbound_channel(state.store.len());
        self.pusher.register(connection_id, sender).await;

        let mut replayed = 0;
        for message in state.store.messages() {
            let event = ChatEvent::Posted(message.clone());
            if let Err(e) = self.pusher.push_to(connection_id, &event).await {
                tracing::warn!(
                    "Failed to replay history to connection '{}': {}",
                    connection_id,
                    e
                );
                break;
            }
            replayed += 1;
        }

        tracing::info!(
            "Connection '{}' opened ({} messages replayed)",
            connection_id,
            replayed
        );
        receiver
    }

    /// Envelope を対応する操作に振り分ける
    pub async fn handle_envelope(
        &self,
        connection_id: ConnectionId,
        envelope: Envelope,
    ) -> Result<ChatEvent, EngineError> {
        match envelope {
            Envelope::Join { username } => self.join(connection_id, &username).await,
            Envelope::Post { text } => self.post(connection_id, &text).await,
            Envelope::Edit {
                message_id,
                new_text,
            } => self.edit(connection_id, &message_id, &new_text).await,
            Envelope::Delete { message_id } => self.delete(connection_id, &message_id).await,
        }
    }

    /// 接続に表示名を割り当て、参加通知を全接続に配送する
    ///
    /// # Errors
    ///
    /// * `EngineError::Registry` - 不正な表示名、使用中の表示名、または参加済みの接続
    pub async fn join(
        &self,
        connection_id: ConnectionId,
        username: &str,
    ) -> Result<ChatEvent, EngineError> {
        let mut state = self.state.lock().await;
        let now = self.now();

        let participant = state.registry.register(username, connection_id, now)?;
        tracing::info!(
            "Connection '{}' joined as '{}' ({} participants)",
            connection_id,
            participant.name,
            state.registry.len()
        );

        let event = ChatEvent::Joined {
            name: participant.name,
            at: now,
        };
        self.broadcast(&event).await;
        Ok(event)
    }

    /// 新しいメッセージを保存し、全接続に配送する
    ///
    /// # Errors
    ///
    /// * `EngineError::NotIdentified` - 未参加の接続
    /// * `EngineError::Validation` - trim 後に空、または 1024 文字を超える本文
    pub async fn post(
        &self,
        connection_id: ConnectionId,
        text: &str,
    ) -> Result<ChatEvent, EngineError> {
        let mut state = self.state.lock().await;
        let author = state
            .registry
            .name_of(connection_id)
            .cloned()
            .ok_or(EngineError::NotIdentified)?;
        let text = MessageText::new(text)?;
        let now = self.now();

        let message = state.store.create(author, text, now).clone();
        tracing::debug!("'{}' posted message '{}'", message.author(), message.id());

        let event = ChatEvent::Posted(message);
        self.broadcast(&event).await;
        Ok(event)
    }

    /// 自分のメッセージを編集し、全接続に配送する
    ///
    /// # Errors
    ///
    /// * `EngineError::NotIdentified` - 未参加の接続
    /// * `EngineError::Validation` - 不正な本文
    /// * `EngineError::Store` - 存在しない ID、または投稿者本人ではない
    pub async fn edit(
        &self,
        connection_id: ConnectionId,
        message_id: &str,
        new_text: &str,
    ) -> Result<ChatEvent, EngineError> {
        let mut state = self.state.lock().await;
        let requester = state
            .registry
            .name_of(connection_id)
            .cloned()
            .ok_or(EngineError::NotIdentified)?;
        let new_text = MessageText::new(new_text)?;
        let now = self.now();

        let message = state
            .store
            .edit(&MessageId::new(message_id), &requester, new_text, now)?;
        tracing::debug!("'{}' edited message '{}'", requester, message.id());

        let event = ChatEvent::Edited {
            message_id: message.id().clone(),
            author: message.author().clone(),
            new_text: message.text().clone(),
            edited_at: now,
        };
        self.broadcast(&event).await;
        Ok(event)
    }

    /// 自分のメッセージを削除し、全接続に配送する
    ///
    /// # Errors
    ///
    /// * `EngineError::NotIdentified` - 未参加の接続
    /// * `EngineError::Store` - 存在しない（削除済みを含む）ID、または投稿者本人ではない
    pub async fn delete(
        &self,
        connection_id: ConnectionId,
        message_id: &str,
    ) -> Result<ChatEvent, EngineError> {
        let mut state = self.state.lock().await;
        let requester = state
            .registry
            .name_of(connection_id)
            .cloned()
            .ok_or(EngineError::NotIdentified)?;

        let message = state
            .store
            .remove(&MessageId::new(message_id), &requester)?;
        tracing::debug!("'{}' deleted message '{}'", requester, message.id());

        let event = ChatEvent::Deleted {
            message_id: message.id().clone(),
            author: message.author().clone(),
        };
        self.broadcast(&event).await;
        Ok(event)
    }

    /// 接続を配送対象から外し、参加済みだった場合は退出通知を残りの接続に配送する
    ///
    /// 退出イベントを返す。未参加のまま閉じた接続なら `None`
    pub async fn disconnect(&self, connection_id: ConnectionId) -> Option<ChatEvent> {
        let mut state = self.state.lock().await;
        self.pusher.unregister(connection_id).await;

        let Some(participant) = state.registry.unregister(connection_id) else {
            tracing::info!("Anonymous connection '{}' closed", connection_id);
            return None;
        };
        tracing::info!(
            "'{}' left ({} participants remaining)",
            participant.name,
            state.registry.len()
        );

        let event = ChatEvent::Left {
            name: participant.name,
            at: self.now(),
        };
        self.broadcast(&event).await;
        Some(event)
    }

    /// 現在の参加者とメッセージのスナップショット
    pub async fn snapshot(&self) -> ChatSnapshot {
        let state = self.state.lock().await;
        ChatSnapshot {
            participants: state.registry.participants(),
            messages: state.store.messages().cloned().collect(),
        }
    }

    pub async fn get_message(&self, message_id: &MessageId) -> Option<ChatMessage> {
        let state = self.state.lock().await;
        state.store.get(message_id).cloned()
    }

    /// ロックを保持した呼び出し元から使う。配送の部分失敗は許容する
    async fn broadcast(&self, event: &ChatEvent) {
        if let Err(e) = self.pusher.broadcast(event).await {
            tracing::warn!("Failed to broadcast '{}': {}", event.kind(), e);
        }
    }
}
