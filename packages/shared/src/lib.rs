//! Utilities shared by the Yoriai server and client.

pub mod logger;
pub mod time;
