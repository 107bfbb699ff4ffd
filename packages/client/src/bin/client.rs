//! Terminal chat client with reconnection support.
//!
//! Joins the chat under a display name, sends each input line as a message
//! and prints every event broadcast by the server. `/edit <messageId> <text>`
//! and `/delete <messageId>` change your own messages; `/quit` exits.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin yoriai-client -- --name Alice
//! cargo run --bin yoriai-client -- -n Bob -u ws://127.0.0.1:3000/ws
//! ```

use clap::Parser;

use yoriai_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "yoriai-client")]
#[command(about = "Terminal client for the Yoriai group chat", long_about = None)]
struct Args {
    /// Display name (1-16 characters, unique among connected participants)
    #[arg(short = 'n', long)]
    name: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = yoriai_client::run_client(args.url, args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
