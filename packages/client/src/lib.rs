//! Terminal client for the Hiroba chat server.
//!
//! Reads lines from the terminal, sends each one as a text frame to `/chat`,
//! and prints whatever the server broadcasts back.

pub mod config;
pub mod error;
pub mod input;
mod runner;

// Re-export entry points
pub use config::{ClientArgs, ClientConfig};
pub use error::ClientError;
pub use runner::run_client;
