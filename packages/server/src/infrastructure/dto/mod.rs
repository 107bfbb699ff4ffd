//! Data Transfer Objects (DTOs)
//!
//! 外部との通信に使用するデータ構造。ドメインモデルとは独立している。

pub mod conversion;
pub mod http;
pub mod websocket;
