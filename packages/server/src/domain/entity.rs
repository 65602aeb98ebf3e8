//! Core domain models for the chat room.

use std::{collections::BTreeMap, fmt, sync::Arc};

use super::{
    error::DeliveryError,
    repository::MessageSink,
    value_object::{ChatLine, ClientId, ClientName, Timestamp},
};

/// One connected chat participant.
///
/// Cloning is cheap; clones share the same outbound sink.
#[derive(Clone)]
pub struct Client {
    /// Identifier assigned at join time
    pub id: ClientId,
    /// Display name derived from `id`
    pub name: ClientName,
    /// Timestamp when the client joined
    pub connected_at: Timestamp,
    sink: Arc<dyn MessageSink>,
}

impl Client {
    pub fn new(id: ClientId, connected_at: Timestamp, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            id,
            name: ClientName::for_id(id),
            connected_at,
            sink,
        }
    }

    /// Hand a chat line to this client's outbound channel.
    pub async fn deliver(&self, line: &ChatLine) -> Result<(), DeliveryError> {
        self.sink.deliver(line).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("connected_at", &self.connected_at)
            .finish_non_exhaustive()
    }
}

/// The set of currently connected clients.
///
/// Keyed by id; since ids are allocated monotonically, key order is join
/// order. This type is not synchronised itself, see the repository.
#[derive(Debug, Default)]
pub struct Room {
    clients: BTreeMap<ClientId, Client>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a client. Returns `false` if the id was already present, in which
    /// case the existing entry is kept.
    pub fn add(&mut self, client: Client) -> bool {
        match self.clients.entry(client.id) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(client);
                true
            }
        }
    }

    /// Remove a client by id.
    pub fn remove(&mut self, client_id: ClientId) -> Option<Client> {
        self.clients.remove(&client_id)
    }

    pub fn contains(&self, client_id: ClientId) -> bool {
        self.clients.contains_key(&client_id)
    }

    /// Every client except `sender`.
    pub fn others(&self, sender: ClientId) -> Vec<Client> {
        self.clients
            .values()
            .filter(|client| client.id != sender)
            .cloned()
            .collect()
    }

    pub fn clients(&self) -> Vec<Client> {
        self.clients.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }
}
