//! UseCase 層
//!
//! ドメインの状態（参加者レジストリとメッセージストア）を操作し、
//! 結果のイベントを MessagePusher 経由で全接続に配送する。

pub mod broadcast_engine;
pub mod error;

pub use broadcast_engine::{BroadcastEngine, ChatSnapshot};
pub use error::EngineError;
