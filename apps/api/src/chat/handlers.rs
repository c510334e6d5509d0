use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chat::responder::{intro, Reply};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct IntroResponse {
    pub message: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<Reply> {
    let reply = state.responder.reply(&req.question, &state.profile);
    debug!(intent = ?reply.intent, "Chat reply");
    Json(reply)
}

/// GET /api/v1/chat/intro
pub async fn handle_intro(State(state): State<AppState>) -> Json<IntroResponse> {
    Json(IntroResponse {
        message: intro(&state.profile),
    })
}
