use serde::Deserialize;
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::app::error::FeedError;
use crate::app::feed::FeedStore;
use crate::console::ConsoleError;

/// One user action, as sent by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    CreatePost {
        text: String,
        #[serde(default)]
        date: Option<String>,
    },
    CreateResponse {
        post_id: String,
        text: String,
        #[serde(default)]
        date: Option<String>,
    },
    ToggleLike {
        post_id: String,
    },
    ToggleResponseLike {
        post_id: String,
        response_id: String,
    },
    DeletePost {
        post_id: String,
    },
    DeleteResponse {
        post_id: String,
        response_id: String,
    },
    GetPost {
        post_id: String,
    },
    List,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreatePost { .. } => "create_post",
            Self::CreateResponse { .. } => "create_response",
            Self::ToggleLike { .. } => "toggle_like",
            Self::ToggleResponseLike { .. } => "toggle_response_like",
            Self::DeletePost { .. } => "delete_post",
            Self::DeleteResponse { .. } => "delete_response",
            Self::GetPost { .. } => "get_post",
            Self::List => "list",
        }
    }
}

pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    serde_json::from_str(line)
        .map_err(|err| ConsoleError::bad_request(format!("invalid command: {}", err)))
}

pub fn handle(
    store: &mut FeedStore,
    max_text_chars: usize,
    command: Command,
) -> Result<Value, ConsoleError> {
    match command {
        Command::CreatePost { text, date } => {
            validate_text(&text, max_text_chars)?;
            let post = store.create_post(text, date_or_now(date));
            to_data(&post)
        }
        Command::CreateResponse {
            post_id,
            text,
            date,
        } => {
            validate_text(&text, max_text_chars)?;
            let response = store.create_response(&post_id, text, date_or_now(date))?;
            to_data(&response)
        }
        Command::ToggleLike { post_id } => {
            let liked = store.toggle_like(&post_id)?;
            Ok(json!({ "liked": liked }))
        }
        Command::ToggleResponseLike {
            post_id,
            response_id,
        } => {
            let liked = store.toggle_response_like(&post_id, &response_id)?;
            Ok(json!({ "liked": liked }))
        }
        Command::DeletePost { post_id } => {
            let post = store.delete_post(&post_id)?;
            to_data(&post)
        }
        Command::DeleteResponse {
            post_id,
            response_id,
        } => {
            let response = store.delete_response(&post_id, &response_id)?;
            to_data(&response)
        }
        Command::GetPost { post_id } => {
            let post = store
                .post(&post_id)
                .ok_or_else(|| FeedError::post_not_found(&post_id))?;
            to_data(post)
        }
        Command::List => to_data(store.posts()),
    }
}

fn validate_text(text: &str, max_text_chars: usize) -> Result<(), ConsoleError> {
    if text.trim().is_empty() {
        return Err(ConsoleError::bad_request("text cannot be empty"));
    }
    if text.chars().count() > max_text_chars {
        return Err(ConsoleError::bad_request(format!(
            "text exceeds {} characters",
            max_text_chars
        )));
    }
    Ok(())
}

fn date_or_now(date: Option<String>) -> String {
    match date {
        Some(date) if !date.trim().is_empty() => date,
        _ => now_rfc3339(),
    }
}

fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

fn to_data<T: serde::Serialize + ?Sized>(value: &T) -> Result<Value, ConsoleError> {
    serde_json::to_value(value)
        .map_err(|err| ConsoleError::internal(format!("failed to encode reply: {}", err)))
}
