//! サーバーの共有状態

use std::sync::Arc;

use crate::usecase::BroadcastEngine;

/// 全ハンドラで共有するアプリケーション状態
pub struct AppState {
    /// BroadcastEngine（参加者とメッセージの状態、イベント配送）
    pub engine: Arc<BroadcastEngine>,
}
