//! Parsing of the lines typed at the prompt.
//!
//! ```text
//! hello everyone               -> message
//! /edit <messageId> <new text> -> edit
//! /delete <messageId>          -> delete
//! /quit                        -> close the session
//! ```

use thiserror::Error;
use yoriai_server::infrastructure::dto::websocket::ClientEnvelope;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Post(String),
    Edit { message_id: String, new_text: String },
    Delete { message_id: String },
    Quit,
}

/// Input that is not sent to the server; the message is shown as a usage hint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("nothing to send")]
    Empty,

    #[error("usage: /edit <messageId> <new text>")]
    EditUsage,

    #[error("usage: /delete <messageId>")]
    DeleteUsage,

    #[error("unknown command '{0}' (available: /edit, /delete, /quit)")]
    Unknown(String),
}

impl Command {
    /// The envelope to send, or `None` for commands handled locally
    pub fn into_envelope(self) -> Option<ClientEnvelope> {
        match self {
            Command::Post(text) => Some(ClientEnvelope::Message { text }),
            Command::Edit {
                message_id,
                new_text,
            } => Some(ClientEnvelope::Edit {
                message_id,
                new_text,
            }),
            Command::Delete { message_id } => Some(ClientEnvelope::Delete { message_id }),
            Command::Quit => None,
        }
    }
}

pub fn parse_input(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }
    if !line.starts_with('/') {
        return Ok(Command::Post(line.to_string()));
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "/edit" => {
            let (message_id, new_text) = rest
                .split_once(char::is_whitespace)
                .ok_or(CommandError::EditUsage)?;
            let new_text = new_text.trim();
            if new_text.is_empty() {
                return Err(CommandError::EditUsage);
            }
            Ok(Command::Edit {
                message_id: message_id.to_string(),
                new_text: new_text.to_string(),
            })
        }
        "/delete" => {
            if rest.is_empty() || rest.contains(char::is_whitespace) {
                return Err(CommandError::DeleteUsage);
            }
            Ok(Command::Delete {
                message_id: rest.to_string(),
            })
        }
        "/quit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
