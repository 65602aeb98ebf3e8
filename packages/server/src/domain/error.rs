//! Domain layer error definitions.

use thiserror::Error;

/// Errors raised while handing a chat line to one recipient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The recipient's outbound channel has been dropped
    #[error("outbound channel is closed")]
    Closed,

    /// The recipient is not draining its outbound channel
    #[error("outbound channel is full")]
    Full,
}
