//! Domain layer for the chat room.
//!
//! This module contains the broadcast room model and the ports the outer
//! layers implement. It knows nothing about axum or websocket frames.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{Client, Room};
pub use error::DeliveryError;
pub use factory::ClientIdFactory;
pub use repository::{MessageSink, RoomRepository};
pub use value_object::{ChatLine, ClientId, ClientName, Timestamp};

#[cfg(test)]
pub use repository::MockMessageSink;
