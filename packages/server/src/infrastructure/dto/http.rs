//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::Client;
use hiroba_shared::time::millis_to_rfc3339;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

/// Snapshot of the room for the debug endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSnapshotDto {
    pub count: usize,
    pub participants: Vec<ParticipantDto>,
}

/// One connected participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub id: u64,
    pub name: String,
    pub connected_at: String, // RFC 3339
}

impl From<&Client> for ParticipantDto {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.value(),
            name: client.name.as_str().to_string(),
            connected_at: millis_to_rfc3339(client.connected_at.value()),
        }
    }
}

impl RoomSnapshotDto {
    pub fn from_members(members: &[Client]) -> Self {
        let mut participants: Vec<ParticipantDto> =
            members.iter().map(ParticipantDto::from).collect();
        participants.sort_by_key(|p| p.id);

        Self {
            count: participants.len(),
            participants,
        }
    }
}
