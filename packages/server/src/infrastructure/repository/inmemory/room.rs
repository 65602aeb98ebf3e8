//! In-memory Room repository.
//!
//! Implements the domain's `RoomRepository` trait on top of a `Room` guarded
//! by a `std::sync::Mutex`. Every critical section is a single map operation
//! with no `.await` inside, so a blocking mutex is enough and lets `leave`
//! run from a `Drop` impl.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{
    Client, ClientId, ClientIdFactory, MessageSink, Room, RoomRepository, Timestamp,
};

/// In-memory room registry.
///
/// Owns the identifier counter, so one instance per process gives one
/// process-wide sequence of client ids.
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    room: Mutex<Room>,
    id_factory: ClientIdFactory,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self {
            room: Mutex::new(Room::new()),
            id_factory: ClientIdFactory::new(),
        }
    }

    // A panic while holding the lock cannot leave the map half-updated, so a
    // poisoned lock is still safe to use.
    fn room(&self) -> MutexGuard<'_, Room> {
        self.room.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RoomRepository for InMemoryRoomRepository {
    fn join(&self, sink: Arc<dyn MessageSink>) -> Client {
        let client = Client::new(self.id_factory.next_id(), Timestamp::now(), sink);
        self.room().add(client.clone());
        tracing::debug!("Registered {} (id {})", client.name, client.id);
        client
    }

    fn leave(&self, client_id: ClientId) -> bool {
        let removed = self.room().remove(client_id);
        match removed {
            Some(client) => {
                tracing::debug!("Unregistered {} (id {})", client.name, client.id);
                true
            }
            None => false,
        }
    }

    fn recipients_except(&self, sender: ClientId) -> Vec<Client> {
        self.room().others(sender)
    }

    fn members(&self) -> Vec<Client> {
        self.room().clients()
    }

    fn contains(&self, client_id: ClientId) -> bool {
        self.room().contains(client_id)
    }

    fn count(&self) -> usize {
        self.room().len()
    }
}
