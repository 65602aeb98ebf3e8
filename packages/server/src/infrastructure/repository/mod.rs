//! Repository implementations.
//!
//! The usecase layer depends on the `RoomRepository` trait from the domain
//! layer, never on these types directly.

pub mod inmemory;

pub use inmemory::InMemoryRoomRepository;
