use crate::error::{ServerError, ServerResult};
use crate::extract::ApiJson;
use crate::models::{Feedback, Message};
use crate::state::ServerState;
use crate::telemetry::record_match;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

/// Send message request
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub sender: String,
    pub text: String,
}

/// Feedback request
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub negative: bool,
}

/// Answer a user message from the corpus.
///
/// The user's message and the bot reply are both appended to the chat, in
/// that order, and the bot reply is returned. The reply is the best matching
/// corpus line, or the configured fallback when nothing matches or the
/// corpus cannot be read.
///
/// An unknown chat is reported before the body is looked at.
pub async fn send_message(
    State(state): State<Arc<ServerState>>,
    Path(chat_id): Path<String>,
    body: Result<ApiJson<SendMessageRequest>, ServerError>,
) -> ServerResult<Json<Message>> {
    if !state.store.contains(&chat_id) {
        return Err(ServerError::ChatNotFound(chat_id));
    }
    let ApiJson(request) = body?;

    tracing::info!(chat_id = %chat_id, sender = %request.sender, "message received");

    let lines = {
        let state = state.clone();
        tokio::task::spawn_blocking(move || state.candidate_lines()).await?
    };

    let started = Instant::now();
    let outcome = state.matcher.find_best_match(&request.text, &lines);
    record_match(started.elapsed(), lines.len(), &outcome);
    tracing::info!(
        chat_id = %chat_id,
        matched = outcome.is_match(),
        score = outcome.score().unwrap_or(0.0),
        corpus_lines = lines.len(),
        "answer selected"
    );

    let (answer, found) = outcome.into_answer();
    let reply = if found {
        answer
    } else {
        state.config.fallback_reply.clone()
    };

    let user_message = Message::new(&chat_id, request.sender, request.text);
    let bot_message = Message::bot_reply(&chat_id, reply);
    state
        .store
        .append_exchange(&chat_id, user_message, bot_message.clone())?;

    Ok(Json(bot_message))
}

/// Record feedback on a message and return the updated message
pub async fn submit_feedback(
    State(state): State<Arc<ServerState>>,
    Path((chat_id, message_id)): Path<(String, String)>,
    body: Result<ApiJson<FeedbackRequest>, ServerError>,
) -> ServerResult<Json<Message>> {
    if !state.store.contains(&chat_id) {
        return Err(ServerError::ChatNotFound(chat_id));
    }
    let ApiJson(request) = body?;

    let message = state
        .store
        .set_feedback(&chat_id, &message_id, Feedback::new(request.negative))?;

    tracing::info!(
        chat_id = %chat_id,
        message_id = %message_id,
        negative = request.negative,
        "feedback recorded"
    );
    Ok(Json(message))
}
