//! MessagePusher trait 定義
//!
//! クライアントへのイベント送信（通知）のインターフェース。
//! 具体的な実装（WebSocket など）は Infrastructure 層が提供する（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::MessagePushError, event::ChatEvent, value_object::ConnectionId};

/// 履歴の再送分を除いて、1 接続が溜め込めるフレーム数の上限
///
/// これを超えて読み出さない接続は配送対象から外される。
pub const OUTBOUND_QUEUE_CAPACITY: usize = 256;

/// 1 接続分の送信キュー（エンコード済みフレーム）
pub type PusherChannel = mpsc::Sender<String>;

/// 送信キューの受信側。接続ごとの writer タスクが読み出す
pub type PusherReceiver = mpsc::Receiver<String>;

/// `backlog` 件の履歴を積んだうえで `OUTBOUND_QUEUE_CAPACITY` 件の余裕を持つ送信キューを作る
pub fn outbound_channel(backlog: usize) -> (PusherChannel, PusherReceiver) {
    mpsc::channel(backlog + OUTBOUND_QUEUE_CAPACITY)
}

/// ブロードキャストエンジンが使う配送ポート
///
/// 実装はブロックしてはならない（await の中で待たない）。
/// キューが溢れた接続は配送対象から外し、他の接続への配送を続ける。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を送信対象に登録
    async fn register(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続を送信対象から削除
    async fn unregister(&self, connection_id: ConnectionId);

    /// 特定の接続にイベントを送信
    ///
    /// キューが溢れていた場合、その接続は配送対象から外される。
    async fn push_to(
        &self,
        connection_id: ConnectionId,
        event: &ChatEvent,
    ) -> Result<(), MessagePushError>;

    /// 登録済みの全接続にイベントを送信し、送信できた接続数を返す
    ///
    /// 一部の接続への送信失敗は許容する。キューが溢れた接続と閉じた接続は配送対象から外す。
    async fn broadcast(&self, event: &ChatEvent) -> Result<usize, MessagePushError>;
}
