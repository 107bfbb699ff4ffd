//! Yoriai chat server.
//!
//! Connections join with a display name and every post, edit, delete,
//! join and leave is broadcast to all connected clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin yoriai-server
//! cargo run --bin yoriai-server -- --host 0.0.0.0 --port 3000
//! PORT=3000 cargo run --bin yoriai-server
//! ```

use std::sync::Arc;

use clap::Parser;
use yoriai_server::{
    infrastructure::message_pusher::WebSocketMessagePusher, ui::Server, usecase::BroadcastEngine,
};
use yoriai_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "yoriai-server")]
#[command(about = "Real-time group chat server over WebSocket", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. MessagePusher
    // 2. BroadcastEngine
    // 3. Server
    let message_pusher = Arc::new(WebSocketMessagePusher::new());
    let engine = Arc::new(BroadcastEngine::new(message_pusher, Arc::new(SystemClock)));

    let server = Server::new(engine);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
