//! Channel-backed implementation of the `MessageSink` port.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::{ChatLine, DeliveryError, MessageSink};

/// Forwards chat lines into a bounded channel drained by the connection's
/// outbound pump.
///
/// A full channel drops the line instead of waiting for the recipient.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<ChatLine>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<ChatLine>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl MessageSink for ChannelSink {
    async fn deliver(&self, line: &ChatLine) -> Result<(), DeliveryError> {
        match self.tx.try_send(line.clone()) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(DeliveryError::Closed),
            Err(mpsc::error::TrySendError::Full(_)) => Err(DeliveryError::Full),
        }
    }
}
