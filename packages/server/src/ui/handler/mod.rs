//! Request handlers.

pub mod assets;
pub mod http;
pub mod websocket;

pub use assets::{app_script, index_page, not_found};
pub use http::{get_chat_snapshot, health_check};
pub use websocket::websocket_handler;
