//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod page;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{health_check, room_state};
pub use page::{html_dsl, index, styles_css};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;
