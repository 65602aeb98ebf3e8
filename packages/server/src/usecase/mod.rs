//! UseCase layer
//!
//! Room operations invoked by the ui layer. Each usecase depends only on the
//! domain ports.

pub mod broadcast_message;
pub mod join_room;
pub mod leave_room;

pub use broadcast_message::{BroadcastMessageUseCase, BroadcastReport};
pub use join_room::{JoinRoomUseCase, Membership};
pub use leave_room::LeaveRoomUseCase;
