//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{HealthDto, RoomSnapshotDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Debug endpoint listing the clients currently in the room
pub async fn room_state(State(state): State<Arc<AppState>>) -> Json<RoomSnapshotDto> {
    let members = state.repository.members();
    Json(RoomSnapshotDto::from_members(&members))
}
