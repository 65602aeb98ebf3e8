//! UseCase: broadcasting a chat message
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BroadcastMessageUseCase::execute() メソッド
//! - 送信者以外の全メンバーへの配送と、配送失敗時の継続
//!
//! ### なぜこのテストが必要か
//! - 送信者自身には自分のメッセージが届かないことを保証する
//! - 一人への配送失敗が他のメンバーへの配送や送信者のセッションを妨げないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：二人の部屋でのメッセージ送信
//! - 正常系：切断済みのメンバーには配送されない
//! - 異常系：一人目の受信者への配送失敗
//! - 異常系：読み取りを止めた受信者（バッファ満杯）
//! - エッジケース：送信者しかいない部屋

use std::sync::Arc;

use crate::domain::{ChatLine, Client, ClientId, RoomRepository};

/// Outcome of one broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Recipients whose sink accepted the line
    pub delivered: Vec<ClientId>,
    /// Recipients whose sink was closed or full
    pub failed: Vec<ClientId>,
}

impl BroadcastReport {
    /// Number of recipients attempted.
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }
}

/// Relays one client's message to every other member of the room.
pub struct BroadcastMessageUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl BroadcastMessageUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Deliver `<sender name> said: <body>` to every member except `sender`.
    ///
    /// Recipients are snapshotted when this is called. Delivery failures,
    /// including recipients whose outbound buffer is full, are logged and
    /// recorded in the report, never returned as an error.
    pub async fn execute(&self, sender: &Client, body: &str) -> BroadcastReport {
        let line = ChatLine::new(&sender.name, body);
        let recipients = self.repository.recipients_except(sender.id);

        let mut report = BroadcastReport::default();
        for recipient in recipients {
            match recipient.deliver(&line).await {
                Ok(()) => report.delivered.push(recipient.id),
                Err(e) => {
                    tracing::warn!(
                        "Failed to deliver message from {} to {}: {}",
                        sender.name,
                        recipient.name,
                        e
                    );
                    report.failed.push(recipient.id);
                }
            }
        }

        tracing::debug!(
            "Broadcast from {} reached {}/{} recipients",
            sender.name,
            report.delivered.len(),
            report.attempted()
        );
        report
    }
}
