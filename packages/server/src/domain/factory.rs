//! Domain factories for creating value objects.

use std::sync::atomic::{AtomicU64, Ordering};

use super::ClientId;

/// Factory for allocating ClientId instances.
///
/// Each factory owns its own counter, starting at 0. The server creates
/// exactly one, inside the room repository, when it starts; the counter is
/// never reset afterwards.
#[derive(Debug, Default)]
pub struct ClientIdFactory {
    next: AtomicU64,
}

impl ClientIdFactory {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Allocate the next identifier.
    pub fn next_id(&self) -> ClientId {
        ClientId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
