use anyhow::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::feed::FeedStore;
use crate::config::AppConfig;

mod error;
mod handlers;

pub use error::{ConsoleError, ErrorKind};
pub use handlers::{parse_command, Command};

/// Line-oriented JSON front end for a [`FeedStore`].
///
/// Each input line is one command; each command yields exactly one reply
/// line. Rejected commands are answered and logged, never fatal.
pub struct Console {
    store: FeedStore,
    max_text_chars: usize,
}

impl Console {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: FeedStore::new(config.id_strategy),
            max_text_chars: config.max_text_chars,
        }
    }

    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    pub fn execute(&mut self, command: Command) -> Result<Value, ConsoleError> {
        tracing::debug!(op = command.name(), "executing command");
        handlers::handle(&mut self.store, self.max_text_chars, command)
    }

    /// Parses and runs one raw line, returning the reply to write back.
    pub fn handle_line(&mut self, line: &str) -> Value {
        match parse_command(line).and_then(|command| self.execute(command)) {
            Ok(data) => json!({ "status": "ok", "data": data }),
            Err(err) => {
                tracing::warn!(
                    status = err.kind().as_str(),
                    error = %err.message(),
                    "command rejected"
                );
                err.to_reply()
            }
        }
    }

    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            // Undecodable bytes are a bad command, not a broken stream.
            let reply = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line),
                Err(err) => {
                    let err = ConsoleError::bad_request(format!("invalid command: {}", err));
                    tracing::warn!(error = %err.message(), "command rejected");
                    err.to_reply()
                }
            };

            let mut payload = serde_json::to_vec(&reply)?;
            payload.push(b'\n');
            writer.write_all(&payload).await?;
            writer.flush().await?;
        }

        tracing::info!(posts = self.store.len(), "input closed");
        Ok(())
    }
}
