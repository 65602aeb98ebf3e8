//! UseCase: joining the room
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() と、その戻り値 Membership の破棄処理
//!
//! ### なぜこのテストが必要か
//! - 接続がどのような経路で終了しても、クライアントが Room から必ず取り除かれることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：join してメンバーになる
//! - 正常系：Membership の破棄で leave される
//! - エッジケース：明示的に leave 済みでも破棄時にエラーにならない
//! - エッジケース：タスクがキャンセルされた場合も leave される

use std::{fmt, sync::Arc};

use crate::domain::{Client, MessageSink, RoomRepository};

use super::LeaveRoomUseCase;

/// Joins a new client to the room.
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Register a client whose outbound messages go to `sink`.
    ///
    /// The client stays a member for as long as the returned `Membership` is
    /// alive.
    pub fn execute(&self, sink: Arc<dyn MessageSink>) -> Membership {
        let client = self.repository.join(sink);
        tracing::info!("{} joined the room", client.name);
        Membership {
            client,
            repository: self.repository.clone(),
        }
    }
}

/// Room membership of one connection.
///
/// Dropping it removes the client from the room, whichever way the
/// connection ended.
pub struct Membership {
    client: Client,
    repository: Arc<dyn RoomRepository>,
}

impl Membership {
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl fmt::Debug for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Membership")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl Drop for Membership {
    fn drop(&mut self) {
        let leave = LeaveRoomUseCase::new(self.repository.clone());
        if leave.execute(self.client.id) {
            tracing::info!("{} left the room", self.client.name);
        }
    }
}
