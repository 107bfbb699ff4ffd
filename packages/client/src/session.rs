//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};
use yoriai_server::infrastructure::dto::websocket::{ClientEnvelope, ServerEvent};

use crate::{
    command::{Command, parse_input},
    error::ClientError,
    formatter::MessageFormatter,
    ui::Prompt,
};

fn encode(envelope: &ClientEnvelope) -> Result<Message, ClientError> {
    serde_json::to_string(envelope)
        .map(|json| Message::Text(json.into()))
        .map_err(|e| ClientError::ConnectionError(format!("failed to encode envelope: {}", e)))
}

/// Run one WebSocket client session
///
/// Returns `Ok(())` when the user quits, and `ClientError::ConnectionError`
/// when the connection is lost.
pub async fn run_client_session(url: &str, name: &str) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server!");
    let (mut write, mut read) = ws_stream.split();

    let join = ClientEnvelope::Join {
        username: name.to_string(),
    };
    write
        .send(encode(&join)?)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    println!(
        "\nJoining as '{}'. Type messages and press Enter to send.\n\
         Commands: /edit <messageId> <new text>, /delete <messageId>, /quit\n",
        name
    );

    let prompt = Prompt::new(name);

    // Spawn a task to handle incoming events
    let prompt_for_read = prompt.clone();
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match serde_json::from_str::<ServerEvent>(&text) {
                        Ok(event) => MessageFormatter::format_event(&event),
                        Err(e) => {
                            tracing::debug!("Unrecognized frame: {}", e);
                            MessageFormatter::format_raw_message(&text)
                        }
                    };
                    prompt_for_read.print_event(&formatted);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt_for_readline = prompt.clone();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(prompt_for_readline.as_str()) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, exit thread
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    // Ctrl+C / Ctrl+D
                    input_tx.send("/quit".to_string()).ok();
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to turn input lines into envelopes and send them
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            let envelope = match parse_input(&line) {
                Ok(Command::Quit) => {
                    write.send(Message::Close(None)).await.ok();
                    break;
                }
                Ok(command) => command.into_envelope(),
                Err(e) => {
                    prompt.print_event(&format!("{}\n", e));
                    continue;
                }
            };
            let Some(envelope) = envelope else {
                continue;
            };

            let frame = match encode(&envelope) {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!("{}", e);
                    continue;
                }
            };
            if let Err(e) = write.send(frame).await {
                tracing::warn!("Failed to send message: {}", e);
                write_error = true;
                break;
            }
        }

        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            if read_result.unwrap_or(false) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            if write_result.unwrap_or(false) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
    }

    Ok(())
}
