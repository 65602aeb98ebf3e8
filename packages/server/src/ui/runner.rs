//! Router assembly and server startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    domain::RoomRepository,
    error::ServerError,
    infrastructure::repository::InMemoryRoomRepository,
    ui::{
        handler::{health_check, html_dsl, index, room_state, styles_css, websocket_handler},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Build the application router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/html-dsl", get(html_dsl))
        .route("/styles.css", get(styles_css))
        .route("/api/health", get(health_check))
        .route("/api/room", get(room_state))
        .route("/chat", get(websocket_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the chat server until a shutdown signal arrives.
///
/// Creates the process-wide room, so client ids start at 0 for each call.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let repository: Arc<dyn RoomRepository> = Arc::new(InMemoryRoomRepository::new());
    let state = Arc::new(AppState::new(repository, config.outbound_buffer));
    let app = build_router(state);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!("Listening on http://{}", local_addr);
    tracing::info!("Chat endpoint: ws://{}/chat", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dto::http::RoomSnapshotDto;

    async fn spawn_app() -> (String, Arc<AppState>) {
        let repository: Arc<dyn RoomRepository> = Arc::new(InMemoryRoomRepository::new());
        let state = Arc::new(AppState::new(repository, 8));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), state)
    }

    #[tokio::test]
    async fn test_index_route() {
        // テスト項目: / がプレーンテキストの HELLO WORLD! を返す
        // given (前提条件):
        let (base_url, _state) = spawn_app().await;

        // when (操作):
        let response = reqwest::get(format!("{base_url}/")).await.unwrap();

        // then (期待する結果):
        assert_eq!(response.status(), 200);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(response.text().await.unwrap(), "HELLO WORLD!");
    }

    #[tokio::test]
    async fn test_room_state_reflects_repository() {
        // テスト項目: /api/room がリポジトリのメンバーを反映する
        // given (前提条件):
        let (base_url, state) = spawn_app().await;
        let (tx, _rx) = tokio::sync::mpsc::channel(1);
        let client = state
            .repository
            .join(Arc::new(crate::infrastructure::sink::ChannelSink::new(tx)));

        // when (操作):
        let snapshot: RoomSnapshotDto = reqwest::get(format!("{base_url}/api/room"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.participants[0].id, client.id.value());
        assert_eq!(snapshot.participants[0].name, "user0");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        // テスト項目: 未定義のパスは 404 になる
        // given (前提条件):
        let (base_url, _state) = spawn_app().await;

        // when (操作):
        let response = reqwest::get(format!("{base_url}/nope")).await.unwrap();

        // then (期待する結果):
        assert_eq!(response.status(), 404);
    }
}
