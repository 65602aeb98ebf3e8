//! Broadcast chat server library.
//!
//! Keeps the set of connected WebSocket clients and relays each text message
//! to every other client as `user<id> said: <text>`.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::{ServerArgs, ServerConfig};
pub use error::ServerError;
pub use ui::run as run_server;
