//! UseCase: leaving the room

use std::sync::Arc;

use crate::domain::{ClientId, RoomRepository};

/// Removes a client from the room.
pub struct LeaveRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl LeaveRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Remove `client_id` from the room.
    ///
    /// Idempotent: returns `false` when the client was not a member.
    pub fn execute(&self, client_id: ClientId) -> bool {
        let removed = self.repository.leave(client_id);
        if !removed {
            tracing::debug!("Client {} was not in the room", client_id);
        }
        removed
    }
}
