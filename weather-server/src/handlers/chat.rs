//! `POST /api/ai/chat` — mock AI reply with session id bookkeeping.

use axum::Json;
use axum::body::Bytes;
use weather_core::chat::mock_reply;
use weather_core::{ChatPrompt, ChatReply};

use crate::error::AppResult;

/// The body is parsed as JSON whatever its `Content-Type`, including none.
pub async fn chat_with_ai(body: Bytes) -> AppResult<Json<ChatReply>> {
    let Json(prompt) = Json::<ChatPrompt>::from_bytes(&body)?;
    Ok(Json(mock_reply(prompt)))
}
