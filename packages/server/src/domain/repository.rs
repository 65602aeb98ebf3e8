//! Ports implemented by the infrastructure layer.

use std::sync::Arc;

use async_trait::async_trait;

use super::{ChatLine, Client, ClientId, DeliveryError};

/// Outbound channel of one connected client.
///
/// Delivery must not wait on a recipient that has stopped reading.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn deliver(&self, line: &ChatLine) -> Result<(), DeliveryError>;
}

/// Registry of the clients currently connected to the room.
///
/// Implementations must tolerate concurrent calls from many connection
/// tasks. Methods never block on I/O so they can run from `Drop`.
pub trait RoomRepository: Send + Sync {
    /// Allocate the next identifier and register a new client.
    fn join(&self, sink: Arc<dyn MessageSink>) -> Client;

    /// Remove a client. Returns `false` if it was not a member.
    fn leave(&self, client_id: ClientId) -> bool;

    /// Snapshot of every member except `sender`.
    fn recipients_except(&self, sender: ClientId) -> Vec<Client>;

    /// Snapshot of every member in join order.
    fn members(&self) -> Vec<Client>;

    fn contains(&self, client_id: ClientId) -> bool;

    fn count(&self) -> usize;
}
