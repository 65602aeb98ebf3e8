//! Infrastructure layer: concrete implementations of the domain ports.

pub mod dto;
pub mod repository;
pub mod sink;
