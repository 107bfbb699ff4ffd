//! Yoriai chat server
//!
//! Real-time group chat over WebSocket. Connections announce a display name
//! and exchange short messages that are fanned out to every connection;
//! authors may edit or delete their own messages.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
