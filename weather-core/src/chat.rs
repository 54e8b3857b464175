//! Mock chat endpoint logic.
//!
//! Nothing here talks to a model. The reply is a fixed prefix plus the prompt,
//! and the session id is passed through or freshly minted.

use uuid::Uuid;

use crate::model::{ChatPrompt, ChatReply};

pub const MOCK_RESPONSE_PREFIX: &str = "Mock AI response to: ";

pub fn mock_reply(prompt: ChatPrompt) -> ChatReply {
    let session_id = match prompt.session_id {
        Some(id) if !id.is_empty() => id,
        _ => new_session_id(),
    };

    ChatReply {
        response: format!("{MOCK_RESPONSE_PREFIX}{}", prompt.prompt),
        session_id,
    }
}

/// Fresh opaque session token (UUID v4, hyphenated).
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}
