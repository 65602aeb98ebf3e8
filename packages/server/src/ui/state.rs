//! Shared application state.

use std::sync::Arc;

use crate::domain::RoomRepository;

/// State shared by every handler
pub struct AppState {
    /// Room registry (abstracted behind the domain port)
    pub repository: Arc<dyn RoomRepository>,
    /// Capacity of each client's outbound channel
    pub outbound_buffer: usize,
}

impl AppState {
    pub fn new(repository: Arc<dyn RoomRepository>, outbound_buffer: usize) -> Self {
        Self {
            repository,
            outbound_buffer: outbound_buffer.max(1),
        }
    }
}
