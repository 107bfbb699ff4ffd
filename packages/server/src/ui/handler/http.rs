//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::{
        http::{ChatSnapshotDto, ParticipantDto},
        websocket::ServerEvent,
    },
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current participants and message history
pub async fn get_chat_snapshot(State(state): State<Arc<AppState>>) -> Json<ChatSnapshotDto> {
    let snapshot = state.engine.snapshot().await;

    // Domain Model から DTO への変換
    Json(ChatSnapshotDto {
        participants: snapshot
            .participants
            .iter()
            .map(ParticipantDto::from)
            .collect(),
        messages: snapshot.messages.iter().map(ServerEvent::from).collect(),
    })
}
