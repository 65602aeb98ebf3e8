//! Client error definitions.

use rustyline::error::ReadlineError;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Errors that end a client session
#[derive(Debug, Error)]
pub enum ClientError {
    /// The URL is not a ws:// or wss:// URL
    #[error("invalid chat URL (expected ws:// or wss://): {0}")]
    InvalidUrl(String),

    /// The WebSocket handshake failed
    #[error("failed to connect: {0}")]
    Connect(#[source] tungstenite::Error),

    /// The connection failed after the handshake
    #[error("connection error: {0}")]
    WebSocket(#[source] tungstenite::Error),

    /// The terminal could not be read
    #[error("failed to read input: {0}")]
    Readline(#[from] ReadlineError),
}
